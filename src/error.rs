use std::fmt;

use thiserror::Error;

/// Which grid dimension a [`GridBound`] violation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Grid width (`n`)
    Width,
    /// Grid height (`m`)
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => f.write_str("n"),
            Axis::Height => f.write_str("m"),
        }
    }
}

/// A grid dimension that fell outside `1..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBound {
    pub axis: Axis,
    pub value: i32,
    pub max: i32,
}

impl fmt::Display for GridBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} should be between 1 and {}, got {}",
            self.axis, self.max, self.value
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("Invalid grid size: {}", join_bounds(.violations))]
    GridSize { violations: Vec<GridBound> },

    #[error("An area needs exactly 4 coordinates (x1, y1, x2, y2), got {len}")]
    Dimension { len: usize },

    #[error(
        "Top-left corner ({x1}, {y1}) must be strictly less than bottom-right corner ({x2}, {y2})"
    )]
    Inverted { x1: i32, y1: i32, x2: i32, y2: i32 },

    #[error(
        "Area ({x1}, {y1}, {x2}, {y2}) is outside the grid: x must lie in 0..={n}, y in 0..={m}"
    )]
    OutOfBounds {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        n: i32,
        m: i32,
    },
}

impl InvalidArgument {
    /// Grid bounds that were violated, empty for non-grid errors
    pub fn grid_violations(&self) -> &[GridBound] {
        match self {
            InvalidArgument::GridSize { violations } => violations,
            _ => &[],
        }
    }
}

fn join_bounds(violations: &[GridBound]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, InvalidArgument>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_message_names_every_bound() {
        let err = InvalidArgument::GridSize {
            violations: vec![
                GridBound {
                    axis: Axis::Width,
                    value: 0,
                    max: 1 << 20,
                },
                GridBound {
                    axis: Axis::Height,
                    value: 20000,
                    max: 1 << 14,
                },
            ],
        };
        let message = err.to_string();

        assert!(message.contains("n should be between 1 and 1048576, got 0"));
        assert!(message.contains("m should be between 1 and 16384, got 20000"));
        assert_eq!(err.grid_violations().len(), 2);
    }

    #[test]
    fn test_non_grid_errors_have_no_violations() {
        let err = InvalidArgument::Dimension { len: 3 };
        assert!(err.grid_violations().is_empty());
        assert!(err.to_string().contains("got 3"));
    }
}
