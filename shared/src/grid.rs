use std::fmt;

use serde::{Deserialize, Serialize};

/// Pixel edge length of one tile bitmap.
pub const DEFAULT_TILE_SIZE: u32 = 292;
pub const DEFAULT_BASE_PATH: &str = "/images";
pub const DEFAULT_COLUMNS: u32 = 10;
pub const DEFAULT_ROWS: u32 = 4;
pub const TILE_EXTENSION: &str = "webp";

/// One grid cell. Both coordinates are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId {
    pub row: u32,
    pub col: u32,
}

impl TileId {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Resource file name, e.g. `row-2-column-7.webp`.
    pub fn file_name(&self) -> String {
        format!("row-{}-column-{}.{TILE_EXTENSION}", self.row, self.col)
    }

    /// Full resource path under `base_path`.
    pub fn src(&self, base_path: &str) -> String {
        format!("{}/{}", base_path.trim_end_matches('/'), self.file_name())
    }

    /// DOM id of the tile element.
    pub fn element_id(&self) -> String {
        format!("tile-{}-{}", self.row, self.col)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Row-major enumeration of every tile, starting at (1, 1).
pub fn tile_ids(rows: u32, cols: u32) -> impl Iterator<Item = TileId> {
    (1..=rows).flat_map(move |row| (1..=cols).map(move |col| TileId::new(row, col)))
}

/// Configuration for one mounted grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub base_path: String,
    pub columns: u32,
    pub rows: u32,
    pub tile_size_px: u32,
    pub preload_all: bool,
    /// Overlay each tile with its `row,col` label.
    pub tile_labels: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            tile_size_px: DEFAULT_TILE_SIZE,
            preload_all: false,
            tile_labels: false,
        }
    }
}

impl GridConfig {
    pub fn tile_count(&self) -> u32 {
        self.rows.saturating_mul(self.columns)
    }

    pub fn tiles(&self) -> impl Iterator<Item = TileId> {
        tile_ids(self.rows, self.columns)
    }
}

/// CSS sizing of the grid container.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub width: f64,
    pub height: f64,
    pub template_columns: String,
    pub template_rows: String,
}

impl GridLayout {
    pub fn new(rows: u32, cols: u32, tile_size: u32) -> Self {
        Self {
            width: cols as f64 * tile_size as f64,
            height: rows as f64 * tile_size as f64,
            template_columns: track_template(cols, tile_size),
            template_rows: track_template(rows, tile_size),
        }
    }
}

/// All tracks but the last are fixed to the tile size; the last one takes
/// whatever remains (`auto`).
fn track_template(count: u32, tile_size: u32) -> String {
    match count.saturating_sub(1) {
        0 => "auto".to_string(),
        fixed => format!("repeat({fixed}, {tile_size}px) auto"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_full_cross_product_row_major() {
        let ids: Vec<_> = tile_ids(3, 4).collect();
        assert_eq!(ids.len(), 12);
        assert_eq!(ids.first(), Some(&TileId::new(1, 1)));
        assert_eq!(ids.last(), Some(&TileId::new(3, 4)));
        assert_eq!(ids[1], TileId::new(1, 2));
        assert_eq!(ids[4], TileId::new(2, 1));

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn zero_rows_or_cols_produce_no_tiles() {
        assert_eq!(tile_ids(0, 5).count(), 0);
        assert_eq!(tile_ids(5, 0).count(), 0);
    }

    #[test]
    fn resource_path_follows_layout_contract() {
        let id = TileId::new(2, 7);
        assert_eq!(id.file_name(), "row-2-column-7.webp");
        assert_eq!(id.src("/images"), "/images/row-2-column-7.webp");
        assert_eq!(id.src("/images/"), "/images/row-2-column-7.webp");
        assert_eq!(id.to_string(), "2-7");
        assert_eq!(id.element_id(), "tile-2-7");
    }

    #[test]
    fn two_by_two_layout() {
        let layout = GridLayout::new(2, 2, DEFAULT_TILE_SIZE);
        assert_eq!(layout.width, 584.0);
        assert_eq!(layout.height, 584.0);
        assert_eq!(layout.template_columns, "repeat(1, 292px) auto");
        assert_eq!(layout.template_rows, "repeat(1, 292px) auto");
    }

    #[test]
    fn single_track_layout_is_auto() {
        let layout = GridLayout::new(1, 1, 100);
        assert_eq!(layout.template_columns, "auto");
        assert_eq!(layout.width, 100.0);
    }

    #[test]
    fn config_fills_missing_fields_with_defaults() {
        let config: GridConfig =
            serde_json::from_str(r#"{ "base_path": "/tiles", "columns": 3 }"#).unwrap();
        assert_eq!(config.base_path, "/tiles");
        assert_eq!(config.columns, 3);
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.tile_size_px, DEFAULT_TILE_SIZE);
        assert!(!config.preload_all);
        assert_eq!(config.tile_count(), 12);
    }
}
