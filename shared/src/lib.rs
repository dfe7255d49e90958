pub mod distance;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod loaded;
pub mod preload;
pub mod pulse;
pub mod scale;
pub mod transform;
pub mod visibility;

pub use distance::{DistanceMap, distance_report};
pub use error::TileLoadError;
pub use geometry::{Rect, ViewportSize, distance_to_center, is_rect_visible};
pub use grid::{DEFAULT_TILE_SIZE, GridConfig, GridLayout, TileId};
pub use loaded::LoadedSet;
pub use pulse::{PulseLatch, PulseToken};
pub use scale::ScaleBounds;
pub use transform::Transform;
pub use visibility::TileVisibility;
