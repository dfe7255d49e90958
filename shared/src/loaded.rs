use std::collections::HashSet;

use crate::grid::TileId;

/// Tiles whose bitmap the sequential preloader has fetched. Only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedSet(HashSet<TileId>);

impl LoadedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the tile was not marked before.
    pub fn mark(&mut self, id: TileId) -> bool {
        self.0.insert(id)
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
