use std::collections::BTreeSet;

use log::{debug, warn};

use super::BatchReport;
use crate::error::Result;
use crate::geometry::{Area, Grid};
use crate::store::AreaStore;

/// Number of coordinates that describe one area
const GROUP: usize = 4;

/// A bounded grid holding a set of axis-aligned areas
#[derive(Debug, Clone)]
pub struct Field {
    grid: Grid,
    store: AreaStore,
}

impl Field {
    /// Create an empty field of width `n` and height `m`.
    ///
    /// Fails if either dimension is out of range; the error lists every
    /// offending dimension.
    pub fn new(n: i32, m: i32) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(n, m)?,
            store: AreaStore::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn n(&self) -> i32 {
        self.grid.n()
    }

    pub fn m(&self) -> i32 {
        self.grid.m()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn contains(&self, area: &Area) -> bool {
        self.store.contains(area)
    }

    /// Build an area validated against this field's grid
    pub fn area(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Area> {
        Area::new(&self.grid, x1, y1, x2, y2)
    }

    /// Add areas from a flat `x1, y1, x2, y2, ...` sequence.
    ///
    /// A trailing group of fewer than four values is ignored. Groups that
    /// fail validation are logged and skipped; the rest are still added.
    pub fn add_areas(&mut self, coords: &[i32]) -> BatchReport {
        let report = self.for_each_group(coords, "add_areas", |store, area| store.insert(area));
        debug!(
            "add_areas: {} added, {} skipped, {} now stored",
            report.applied,
            report.skipped,
            self.store.len()
        );
        report
    }

    /// Remove the exact area if it is stored
    pub fn delete_area(&mut self, area: &Area) -> bool {
        self.store.remove(area)
    }

    /// Remove the exact area given by its corners if it is stored.
    ///
    /// Unlike [`Field::delete_areas`], malformed input is an error.
    pub fn delete_area_at(
        &mut self,
        top_left: (i32, i32),
        bottom_right: (i32, i32),
    ) -> Result<bool> {
        let area = Area::from_corners(&self.grid, top_left, bottom_right)?;
        Ok(self.store.remove(&area))
    }

    /// Remove areas given as a flat `x1, y1, x2, y2, ...` sequence.
    ///
    /// Grouping and skip rules match [`Field::add_areas`]. `applied` in the
    /// report counts areas that were actually present.
    pub fn delete_areas(&mut self, coords: &[i32]) -> BatchReport {
        let report =
            self.for_each_group(coords, "delete_areas", |store, area| store.remove(&area));
        debug!(
            "delete_areas: {} removed, {} skipped, {} now stored",
            report.applied,
            report.skipped,
            self.store.len()
        );
        report
    }

    /// Stored areas fully enclosed by the query rectangle (edges inclusive)
    pub fn get_contained_areas(
        &self,
        top_left: (i32, i32),
        bottom_right: (i32, i32),
    ) -> Result<BTreeSet<Area>> {
        let query = Area::from_corners(&self.grid, top_left, bottom_right)?;
        Ok(self.contained_in(&query))
    }

    /// Stored areas that share any point with the query rectangle, whether
    /// enclosed by it, enclosing it or partially overlapping it
    pub fn get_contained_and_crossed_areas(
        &self,
        top_left: (i32, i32),
        bottom_right: (i32, i32),
    ) -> Result<BTreeSet<Area>> {
        let query = Area::from_corners(&self.grid, top_left, bottom_right)?;
        Ok(self.crossed_by(&query))
    }

    /// Remove every area enclosed by the query rectangle, including one equal
    /// to it. Returns the number of areas removed.
    pub fn delete_contained_areas(
        &mut self,
        top_left: (i32, i32),
        bottom_right: (i32, i32),
    ) -> Result<usize> {
        let query = Area::from_corners(&self.grid, top_left, bottom_right)?;
        let found = self.contained_in(&query);
        Ok(self.remove_found(&query, &found))
    }

    /// Remove every area that shares any point with the query rectangle.
    /// Returns the number of areas removed.
    pub fn delete_contained_and_crossed_areas(
        &mut self,
        top_left: (i32, i32),
        bottom_right: (i32, i32),
    ) -> Result<usize> {
        let query = Area::from_corners(&self.grid, top_left, bottom_right)?;
        let found = self.crossed_by(&query);
        Ok(self.remove_found(&query, &found))
    }

    /// Every stored area in ascending `(x1, y1, x2, y2)` order
    pub fn all_areas(&self) -> Vec<Area> {
        self.store.all()
    }

    fn contained_in(&self, query: &Area) -> BTreeSet<Area> {
        // Anything enclosed starts somewhere in query.x1..=query.x2
        self.store
            .range_by_primary(query.x1(), query.x2())
            .filter(|area| query.contains(area))
            .copied()
            .collect()
    }

    fn crossed_by(&self, query: &Area) -> BTreeSet<Area> {
        // An intersecting area cannot start right of query.x2
        self.store
            .range_by_primary(0, query.x2())
            .filter(|area| query.intersects(area))
            .copied()
            .collect()
    }

    fn remove_found(&mut self, query: &Area, found: &BTreeSet<Area>) -> usize {
        let mut removed = self.store.remove_all(found);
        if self.store.remove(query) {
            removed += 1;
        }

        debug!(
            "Removed {} area(s) around {}, {} remain",
            removed,
            query,
            self.store.len()
        );
        removed
    }

    fn for_each_group(
        &mut self,
        coords: &[i32],
        operation: &str,
        mut apply: impl FnMut(&mut AreaStore, Area) -> bool,
    ) -> BatchReport {
        let mut report = BatchReport::default();
        let groups = coords.chunks_exact(GROUP);

        report.ignored_trailing = groups.remainder().len();
        if report.ignored_trailing > 0 {
            debug!(
                "{}: ignoring {} trailing coordinate(s) {:?}",
                operation,
                report.ignored_trailing,
                groups.remainder()
            );
        }

        for group in groups {
            match Area::from_slice(&self.grid, group) {
                Ok(area) => {
                    if apply(&mut self.store, area) {
                        report.applied += 1;
                    }
                }
                Err(e) => {
                    warn!("{}: skipping {:?}: {}", operation, group, e);
                    report.skipped += 1;
                }
            }
        }

        report
    }
}
