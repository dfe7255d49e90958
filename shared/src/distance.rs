use std::collections::HashMap;

use crate::geometry::{Rect, ViewportSize, distance_to_center};
use crate::grid::TileId;

/// Distance a tile should report, or `None` while the grid is not `ready` or
/// the tile is not mounted. Pre-placement positions are never reported.
pub fn distance_report(
    ready: bool,
    viewport: ViewportSize,
    measure: impl FnOnce() -> Option<Rect>,
) -> Option<f64> {
    if !ready {
        return None;
    }
    measure().map(|rect| distance_to_center(&rect, viewport))
}

/// Last measured distance from each tile's center to the viewport center.
///
/// Entries keep the order in which tiles first reported, so equal distances
/// order by first report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceMap {
    entries: Vec<(TileId, f64)>,
    index: HashMap<TileId, usize>,
}

impl DistanceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a report. A later report for the same tile overwrites the value
    /// but keeps the tile's original position.
    pub fn merge(&mut self, id: TileId, distance: f64) {
        match self.index.get(&id) {
            Some(&slot) => self.entries[slot].1 = distance,
            None => {
                self.index.insert(id, self.entries.len());
                self.entries.push((id, distance));
            }
        }
    }

    pub fn get(&self, id: TileId) -> Option<f64> {
        self.index.get(&id).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tiles sorted by ascending distance; ties keep report order.
    pub fn ordered(&self) -> Vec<TileId> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| a.1.total_cmp(&b.1));
        sorted.into_iter().map(|(id, _)| id).collect()
    }
}
