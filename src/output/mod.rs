mod json;

pub use json::{render_json, write_json};
