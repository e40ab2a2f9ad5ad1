mod area_store;

pub use area_store::AreaStore;
