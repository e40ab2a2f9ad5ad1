mod load;
mod types;

pub use load::{LoadedScript, parse_script};
pub use types::{Operation, ScriptConfig};
