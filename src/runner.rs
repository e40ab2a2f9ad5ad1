use log::{debug, info};
use serde::Serialize;

use crate::config::{Operation, ScriptConfig};
use crate::error::Result;
use crate::field::{BatchReport, Field};
use crate::geometry::Area;

/// What a single operation produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Batch add/delete summary
    Batch(BatchReport),
    /// Number of areas removed by a single-area or range delete
    Removed(usize),
    /// Areas returned by a query
    Areas(Vec<Area>),
    /// The operation was rejected; the script carried on
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    pub op: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// A script applied to a fresh field
#[derive(Debug)]
pub struct ScriptRun {
    pub field: Field,
    pub results: Vec<OperationResult>,
}

/// Build the field described by `script` and apply its operations in order.
///
/// Only an invalid grid size aborts the run. A rejected operation is
/// recorded as [`Outcome::Error`] and the remaining operations still run.
pub fn run_script(script: &ScriptConfig) -> Result<ScriptRun> {
    let mut field = Field::new(script.width, script.height)?;
    info!("Created {}x{} field", field.n(), field.m());

    let seeded = field.add_areas(&script.areas);
    if seeded.applied > 0 || seeded.skipped > 0 {
        info!(
            "Seeded {} area(s), skipped {}",
            seeded.applied, seeded.skipped
        );
    }

    let mut results = Vec::with_capacity(script.operations.len());
    for operation in &script.operations {
        let outcome =
            apply(&mut field, operation).unwrap_or_else(|e| Outcome::Error(e.to_string()));
        debug!("{} -> {:?}", operation.name(), outcome);
        results.push(OperationResult {
            op: operation.name(),
            outcome,
        });
    }

    info!(
        "Ran {} operation(s), {} area(s) stored",
        results.len(),
        field.len()
    );

    Ok(ScriptRun { field, results })
}

fn apply(field: &mut Field, operation: &Operation) -> Result<Outcome> {
    let outcome = match operation {
        Operation::Add { coords } => Outcome::Batch(field.add_areas(coords)),
        Operation::Delete { coords } => Outcome::Batch(field.delete_areas(coords)),
        Operation::DeleteArea { area } => {
            let (top_left, bottom_right) = corners(field, area)?;
            let removed = field.delete_area_at(top_left, bottom_right)?;
            Outcome::Removed(usize::from(removed))
        }
        Operation::Contained { area } => {
            let (top_left, bottom_right) = corners(field, area)?;
            let found = field.get_contained_areas(top_left, bottom_right)?;
            Outcome::Areas(found.into_iter().collect())
        }
        Operation::ContainedAndCrossed { area } => {
            let (top_left, bottom_right) = corners(field, area)?;
            let found = field.get_contained_and_crossed_areas(top_left, bottom_right)?;
            Outcome::Areas(found.into_iter().collect())
        }
        Operation::DeleteContained { area } => {
            let (top_left, bottom_right) = corners(field, area)?;
            Outcome::Removed(field.delete_contained_areas(top_left, bottom_right)?)
        }
        Operation::DeleteContainedAndCrossed { area } => {
            let (top_left, bottom_right) = corners(field, area)?;
            Outcome::Removed(field.delete_contained_and_crossed_areas(top_left, bottom_right)?)
        }
        Operation::All => Outcome::Areas(field.all_areas()),
    };
    Ok(outcome)
}

/// Split a four-value rectangle into its corners, rejecting any other length
fn corners(field: &Field, coords: &[i32]) -> Result<((i32, i32), (i32, i32))> {
    let area = Area::from_slice(field.grid(), coords)?;
    Ok((area.top_left(), area.bottom_right()))
}
