mod area;
mod grid;

pub use area::Area;
pub use grid::{Grid, MAX_M, MAX_N, validate, validate_corners};
