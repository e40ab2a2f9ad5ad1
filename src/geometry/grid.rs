use crate::error::{Axis, GridBound, InvalidArgument, Result};

/// Largest accepted grid width
pub const MAX_N: i32 = 2i32.pow(20);
/// Largest accepted grid height
pub const MAX_M: i32 = 2i32.pow(14);

/// Bounded coordinate space `[0, n] x [0, m]` that every area must lie within
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    n: i32,
    m: i32,
}

impl Grid {
    /// Create a grid, reporting every dimension that is out of range.
    pub fn new(n: i32, m: i32) -> Result<Self> {
        let mut violations = Vec::new();
        if !(1..=MAX_N).contains(&n) {
            violations.push(GridBound {
                axis: Axis::Width,
                value: n,
                max: MAX_N,
            });
        }
        if !(1..=MAX_M).contains(&m) {
            violations.push(GridBound {
                axis: Axis::Height,
                value: m,
                max: MAX_M,
            });
        }

        if violations.is_empty() {
            Ok(Self { n, m })
        } else {
            Err(InvalidArgument::GridSize { violations })
        }
    }

    pub fn n(&self) -> i32 {
        self.n
    }

    pub fn m(&self) -> i32 {
        self.m
    }
}

/// Check a flat `[x1, y1, x2, y2]` sequence against the grid.
///
/// Checks run in order: coordinate count, corner ordering, grid bounds.
/// The first failing check is reported.
pub fn validate(grid: &Grid, coords: &[i32]) -> Result<()> {
    let &[x1, y1, x2, y2] = coords else {
        return Err(InvalidArgument::Dimension { len: coords.len() });
    };
    validate_corners(grid, x1, y1, x2, y2)
}

/// Check explicit corner coordinates against the grid.
pub fn validate_corners(grid: &Grid, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()> {
    if x1 >= x2 || y1 >= y2 {
        return Err(InvalidArgument::Inverted { x1, y1, x2, y2 });
    }
    if x1 < 0 || y1 < 0 || x2 > grid.n || y2 > grid.m {
        return Err(InvalidArgument::OutOfBounds {
            x1,
            y1,
            x2,
            y2,
            n: grid.n,
            m: grid.m,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_constants() {
        assert_eq!(MAX_N, 1_048_576);
        assert_eq!(MAX_M, 16_384);
    }

    #[test]
    fn test_grid_limits_accepted() {
        assert!(Grid::new(1, 1).is_ok());
        assert!(Grid::new(MAX_N, MAX_M).is_ok());
        assert!(Grid::new(100, 100).is_ok());
    }

    #[test]
    fn test_grid_reports_single_violation() {
        let err = Grid::new(MAX_N + 1, 10).unwrap_err();
        let violations = err.grid_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].axis, Axis::Width);
        assert_eq!(violations[0].value, MAX_N + 1);

        let err = Grid::new(10, 0).unwrap_err();
        let violations = err.grid_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].axis, Axis::Height);
    }

    #[test]
    fn test_grid_reports_both_violations() {
        let err = Grid::new(0, MAX_M + 1).unwrap_err();
        let axes: Vec<_> = err.grid_violations().iter().map(|v| v.axis).collect();
        assert_eq!(axes, vec![Axis::Width, Axis::Height]);
    }

    #[test]
    fn test_validate_dimension() {
        let grid = Grid::new(10, 10).unwrap();
        assert_eq!(
            validate(&grid, &[1, 1, 2]),
            Err(InvalidArgument::Dimension { len: 3 })
        );
        assert_eq!(
            validate(&grid, &[1, 1, 2, 2, 3]),
            Err(InvalidArgument::Dimension { len: 5 })
        );
        assert!(validate(&grid, &[1, 1, 2, 2]).is_ok());
    }

    #[test]
    fn test_validate_inverted() {
        let grid = Grid::new(10, 10).unwrap();
        assert!(matches!(
            validate_corners(&grid, 5, 1, 5, 2),
            Err(InvalidArgument::Inverted { .. })
        ));
        assert!(matches!(
            validate_corners(&grid, 1, 3, 2, 2),
            Err(InvalidArgument::Inverted { .. })
        ));
    }

    #[test]
    fn test_validate_bounds_inclusive() {
        let grid = Grid::new(10, 20).unwrap();
        assert!(validate_corners(&grid, 0, 0, 10, 20).is_ok());
        assert!(matches!(
            validate_corners(&grid, -1, 0, 5, 5),
            Err(InvalidArgument::OutOfBounds { .. })
        ));
        assert!(matches!(
            validate_corners(&grid, 0, 0, 11, 5),
            Err(InvalidArgument::OutOfBounds { .. })
        ));
        assert!(matches!(
            validate_corners(&grid, 0, 0, 5, 21),
            Err(InvalidArgument::OutOfBounds { .. })
        ));
    }
}
