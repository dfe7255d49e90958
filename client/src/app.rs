use std::sync::Arc;

use leptos::prelude::*;
use mosaic_shared::{GridConfig, TileId};

use crate::viewer::{TileContentFn, TiledImageViewer};

const LABEL_STYLE: &str = "position: absolute; top: 6px; left: 6px; padding: 1px 6px; border-radius: 4px; background: rgba(0, 0, 0, 0.55); color: #f1dec2; font: 12px/1.4 monospace; pointer-events: none;";

fn tile_label(id: TileId) -> String {
    format!("{},{}", id.row, id.col)
}

fn tile_label_renderer() -> TileContentFn {
    Arc::new(|id: TileId| Some(view! { <span style=LABEL_STYLE>{tile_label(id)}</span> }.into_any()))
}

/// Host page: one full-viewport tiled image viewer.
#[component]
pub fn App(config: GridConfig) -> impl IntoView {
    let render_tile_content = config.tile_labels.then(tile_label_renderer);

    view! {
        <main style="width: 100vw; height: 100vh; overflow: hidden;">
            <TiledImageViewer
                tiled_image_path=config.base_path
                cols=config.columns
                rows=config.rows
                tile_size=config.tile_size_px
                load_all_images_on_start=config.preload_all
                render_tile_content=render_tile_content
            />
        </main>
    }
}
