pub mod cli;
pub mod config;
pub mod error;
pub mod field;
pub mod geometry;
pub mod output;
pub mod runner;
pub mod store;

pub use cli::{CliArgs, Command, CommonArgs, RunArgs};
pub use error::InvalidArgument;
pub use field::{BatchReport, Field};
pub use geometry::{Area, Grid};
pub use store::AreaStore;
