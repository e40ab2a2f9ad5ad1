use serde::{Deserialize, Serialize};

/// One step of a script, tagged by `"op"` in JSON.
///
/// Batch operations take a flat `x1, y1, x2, y2, ...` list; single-area
/// operations take exactly four coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Add every valid group of four coordinates
    Add { coords: Vec<i32> },
    /// Delete every valid group of four coordinates
    Delete { coords: Vec<i32> },
    /// Delete one exact area
    DeleteArea { area: Vec<i32> },
    /// List areas enclosed by the rectangle
    Contained { area: Vec<i32> },
    /// List areas enclosed by or intersecting the rectangle
    ContainedAndCrossed { area: Vec<i32> },
    /// Delete areas enclosed by the rectangle
    DeleteContained { area: Vec<i32> },
    /// Delete areas enclosed by or intersecting the rectangle
    DeleteContainedAndCrossed { area: Vec<i32> },
    /// List every stored area
    All,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Delete { .. } => "delete",
            Operation::DeleteArea { .. } => "delete_area",
            Operation::Contained { .. } => "contained",
            Operation::ContainedAndCrossed { .. } => "contained_and_crossed",
            Operation::DeleteContained { .. } => "delete_contained",
            Operation::DeleteContainedAndCrossed { .. } => "delete_contained_and_crossed",
            Operation::All => "all",
        }
    }
}

/// Script file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Script format version (currently 1)
    pub version: u32,
    /// Grid width `n`
    pub width: i32,
    /// Grid height `m`
    pub height: i32,
    /// Areas added before any operation runs, as a flat coordinate list
    pub areas: Vec<i32>,
    /// Operations applied in order
    pub operations: Vec<Operation>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            version: 1,
            width: 100,
            height: 100,
            areas: Vec::new(),
            operations: Vec::new(),
        }
    }
}
