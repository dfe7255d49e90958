use thiserror::Error;

use crate::grid::TileId;

/// Failure to fetch one tile bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileLoadError {
    #[error("could not create image element for tile {tile}")]
    ImageElement { tile: TileId },
    #[error("tile {tile} failed to load: {message}")]
    Load { tile: TileId, message: String },
}

impl TileLoadError {
    pub fn tile(&self) -> TileId {
        match self {
            Self::ImageElement { tile } | Self::Load { tile, .. } => *tile,
        }
    }
}
