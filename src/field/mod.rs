mod field;

use serde::Serialize;

pub use field::Field;

/// Outcome of a batch `add_areas` / `delete_areas` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Groups that changed the store (inserted, or found and removed)
    pub applied: usize,
    /// Groups rejected by validation
    pub skipped: usize,
    /// Trailing values that did not form a complete group of four
    pub ignored_trailing: usize,
}
