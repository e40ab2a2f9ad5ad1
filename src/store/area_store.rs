use std::collections::BTreeSet;
use std::collections::btree_set;

use crate::geometry::Area;

/// Ordered, duplicate-free set of areas
#[derive(Debug, Default, Clone)]
pub struct AreaStore {
    areas: BTreeSet<Area>,
}

impl AreaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an area. Returns false if an equal area was already stored.
    pub fn insert(&mut self, area: Area) -> bool {
        self.areas.insert(area)
    }

    /// Remove an area. Returns false if no equal area was stored.
    pub fn remove(&mut self, area: &Area) -> bool {
        self.areas.remove(area)
    }

    /// Remove every given area, returning how many were actually present
    pub fn remove_all<'a>(&mut self, areas: impl IntoIterator<Item = &'a Area>) -> usize {
        areas
            .into_iter()
            .filter(|area| self.areas.remove(*area))
            .count()
    }

    pub fn contains(&self, area: &Area) -> bool {
        self.areas.contains(area)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Area> {
        self.areas.iter()
    }

    /// Snapshot of every stored area in ascending order
    pub fn all(&self) -> Vec<Area> {
        self.areas.iter().copied().collect()
    }

    /// Stored areas whose `x1` lies in `x_lo..=x_hi`, in ascending order.
    ///
    /// Only `x1` is bracketed; `y1`, `x2` and `y2` are unconstrained, so
    /// callers must filter the result with their exact predicate.
    pub fn range_by_primary(&self, x_lo: i32, x_hi: i32) -> btree_set::Range<'_, Area> {
        // BTreeSet::range panics when start > end
        let (lo, hi) = if x_lo > x_hi {
            (Area::upper_key(x_lo), Area::upper_key(x_lo))
        } else {
            (Area::lower_key(x_lo), Area::upper_key(x_hi))
        };
        self.areas.range(lo..=hi)
    }
}

impl<'a> IntoIterator for &'a AreaStore {
    type Item = &'a Area;
    type IntoIter = btree_set::Iter<'a, Area>;

    fn into_iter(self) -> Self::IntoIter {
        self.areas.iter()
    }
}
