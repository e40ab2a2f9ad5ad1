use std::fmt;

use serde::Serialize;

use super::{Grid, validate, validate_corners};
use crate::error::Result;

/// An axis-aligned rectangle on the grid, given by its top-left `(x1, y1)`
/// and bottom-right `(x2, y2)` corners.
///
/// Areas order lexicographically on `(x1, y1, x2, y2)`. The derived `Ord`
/// relies on the field declaration order below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Area {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Area {
    /// Create an area, validating it against the grid
    pub fn new(grid: &Grid, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self> {
        validate_corners(grid, x1, y1, x2, y2)?;
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Create an area from its top-left and bottom-right corners
    pub fn from_corners(
        grid: &Grid,
        top_left: (i32, i32),
        bottom_right: (i32, i32),
    ) -> Result<Self> {
        Self::new(grid, top_left.0, top_left.1, bottom_right.0, bottom_right.1)
    }

    /// Create an area from a flat `[x1, y1, x2, y2]` slice
    pub fn from_slice(grid: &Grid, coords: &[i32]) -> Result<Self> {
        validate(grid, coords)?;
        Ok(Self {
            x1: coords[0],
            y1: coords[1],
            x2: coords[2],
            y2: coords[3],
        })
    }

    /// Smallest key with the given `x1`. Only used to bound range scans.
    pub(crate) fn lower_key(x1: i32) -> Self {
        Self {
            x1,
            y1: i32::MIN,
            x2: i32::MIN,
            y2: i32::MIN,
        }
    }

    /// Largest key with the given `x1`. Only used to bound range scans.
    pub(crate) fn upper_key(x1: i32) -> Self {
        Self {
            x1,
            y1: i32::MAX,
            x2: i32::MAX,
            y2: i32::MAX,
        }
    }

    pub fn x1(&self) -> i32 {
        self.x1
    }

    pub fn y1(&self) -> i32 {
        self.y1
    }

    pub fn x2(&self) -> i32 {
        self.x2
    }

    pub fn y2(&self) -> i32 {
        self.y2
    }

    pub fn top_left(&self) -> (i32, i32) {
        (self.x1, self.y1)
    }

    pub fn bottom_right(&self) -> (i32, i32) {
        (self.x2, self.y2)
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Check if this area fully encloses another (shared edges count)
    pub fn contains(&self, other: &Area) -> bool {
        self.x1 <= other.x1 && self.y1 <= other.y1 && self.x2 >= other.x2 && self.y2 >= other.y2
    }

    /// Check if this area shares any point with another (touching edges count)
    pub fn intersects(&self, other: &Area) -> bool {
        !(self.x2 < other.x1 || self.x1 > other.x2 || self.y2 < other.y1 || self.y1 > other.y2)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.x1, self.y1, self.x2, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidArgument;

    fn grid() -> Grid {
        Grid::new(100, 100).unwrap()
    }

    fn area(x1: i32, y1: i32, x2: i32, y2: i32) -> Area {
        Area::new(&grid(), x1, y1, x2, y2).unwrap()
    }

    #[test]
    fn test_constructors_agree() {
        let g = grid();
        let a = Area::new(&g, 1, 2, 3, 4).unwrap();
        let b = Area::from_corners(&g, (1, 2), (3, 4)).unwrap();
        let c = Area::from_slice(&g, &[1, 2, 3, 4]).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.top_left(), (1, 2));
        assert_eq!(a.bottom_right(), (3, 4));
        assert_eq!(a.width(), 2);
        assert_eq!(a.height(), 2);
    }

    #[test]
    fn test_constructor_rejects_invalid() {
        let g = grid();
        assert!(Area::new(&g, 5, 5, 5, 6).is_err());
        assert!(Area::new(&g, 0, 0, 101, 1).is_err());
        assert_eq!(
            Area::from_slice(&g, &[1, 2]),
            Err(InvalidArgument::Dimension { len: 2 })
        );
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(area(1, 2, 3, 4), area(1, 2, 3, 4));
        assert_ne!(area(1, 2, 3, 4), area(1, 2, 3, 5));
        assert_ne!(area(1, 2, 3, 4), area(0, 2, 3, 4));
    }

    #[test]
    fn test_order_is_lexicographic() {
        let mut areas = vec![
            area(5, 5, 20, 25),
            area(5, 5, 20, 24),
            area(5, 4, 30, 30),
            area(10, 20, 30, 30),
            area(5, 5, 19, 99),
        ];
        areas.sort();

        assert_eq!(
            areas,
            vec![
                area(5, 4, 30, 30),
                area(5, 5, 19, 99),
                area(5, 5, 20, 24),
                area(5, 5, 20, 25),
                area(10, 20, 30, 30),
            ]
        );
    }

    #[test]
    fn test_order_consistent_with_equality() {
        use std::cmp::Ordering;

        // Differ only in y2 in both directions; the order must still separate them
        let a = area(1, 1, 5, 5);
        let b = area(1, 1, 5, 6);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn test_keys_bracket_every_area_with_same_x1() {
        let a = area(7, 0, 8, 1);
        let b = area(7, 99, 100, 100);
        assert!(Area::lower_key(7) < a);
        assert!(Area::upper_key(7) > b);
        assert!(Area::upper_key(6) < a);
        assert!(Area::lower_key(8) > b);
    }

    #[test]
    fn test_contains() {
        let outer = area(0, 0, 20, 20);
        let inner = area(5, 5, 10, 10);
        let partial = area(15, 15, 25, 25);

        assert!(outer.contains(&inner));
        assert!(outer.contains(&outer));
        assert!(!inner.contains(&outer));
        assert!(!outer.contains(&partial));
    }

    #[test]
    fn test_intersects() {
        let a = area(0, 0, 10, 10);
        let b = area(5, 5, 15, 15);
        let touching = area(10, 0, 20, 10);
        let apart = area(20, 20, 30, 30);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_display() {
        assert_eq!(area(10, 20, 30, 30).to_string(), "10, 20, 30, 30");
    }
}
