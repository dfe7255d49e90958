use std::sync::Arc;

use leptos::prelude::*;
use mosaic_shared::grid::tile_ids;
use mosaic_shared::pulse::PulseSource;
use mosaic_shared::{
    DEFAULT_TILE_SIZE, DistanceMap, GridLayout, LoadedSet, ScaleBounds, TileId, ViewportSize,
};

use crate::controls::ZoomControls;
use crate::focus::subscribe_window_focus;
use crate::pan_zoom::{PanZoom, PanZoomHandle};
use crate::preload;
use crate::pulse::SettlePulse;
use crate::tile::{Tile, element_rect};

/// Caller-supplied overlay for a tile, drawn over the bitmap once the tile is
/// shown. Returning `None` draws nothing.
pub type TileContentFn = Arc<dyn Fn(TileId) -> Option<AnyView> + Send + Sync>;

/// Grid-wide state shared with every tile.
#[derive(Clone, Copy)]
pub(crate) struct GridContext {
    /// Set once, when the pan/zoom surface has placed the content.
    pub ready: RwSignal<bool>,
    pub pulse: SettlePulse,
    /// Measured once at mount.
    pub viewport: RwSignal<ViewportSize>,
    pub distances: RwSignal<DistanceMap>,
    pub loaded: RwSignal<LoadedSet>,
}

impl GridContext {
    fn new() -> Self {
        Self {
            ready: RwSignal::new(false),
            pulse: SettlePulse::new(),
            viewport: RwSignal::new(ViewportSize::default()),
            distances: RwSignal::new(DistanceMap::new()),
            loaded: RwSignal::new(LoadedSet::new()),
        }
    }
}

pub(crate) fn window_size() -> ViewportSize {
    let Some(window) = web_sys::window() else {
        return ViewportSize::default();
    };
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    ViewportSize::new(w, h)
}

fn grid_style(layout: &GridLayout) -> String {
    format!(
        "display: grid; width: {}px; height: {}px; grid-template-columns: {}; grid-template-rows: {};",
        layout.width, layout.height, layout.template_columns, layout.template_rows
    )
}

/// Pannable, zoomable viewer for an image pre-sliced into
/// `rows x cols` tiles at `<tiled_image_path>/row-R-column-C.webp`.
///
/// Tiles fetch their bitmap once they enter the viewport. With
/// `load_all_images_on_start`, every tile is additionally fetched one at a
/// time, nearest to the viewport center first.
#[component]
pub fn TiledImageViewer(
    #[prop(into)] tiled_image_path: String,
    cols: u32,
    rows: u32,
    #[prop(default = None)] render_tile_content: Option<TileContentFn>,
    #[prop(default = false)] load_all_images_on_start: bool,
    #[prop(default = DEFAULT_TILE_SIZE)] tile_size: u32,
) -> impl IntoView {
    let grid = GridContext::new();
    provide_context(grid);
    let pulse = grid.pulse;

    let container_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        let Some(container) = container_ref.get() else {
            return;
        };
        if !grid.viewport.get_untracked().is_empty() {
            return;
        }
        let measured = element_rect(&container);
        grid.viewport
            .set(ViewportSize::new(measured.width, measured.height).or_fallback(window_size()));
    });

    let limits = Memo::new(move |_| {
        let viewport = grid.viewport.get();
        (!viewport.is_empty()).then(|| ScaleBounds::compute(viewport, rows, cols, tile_size))
    });

    subscribe_window_focus(pulse);

    if load_all_images_on_start {
        let ordered = Memo::new(move |_| grid.distances.with(DistanceMap::ordered));
        preload::preload_on_order_change(tiled_image_path.clone(), ordered, grid.loaded);
    }

    let layout = GridLayout::new(rows, cols, tile_size);
    let (content_width, content_height) = (layout.width, layout.height);
    let grid_css = grid_style(&layout);
    let handle = PanZoomHandle::new();

    let tiles = tile_ids(rows, cols)
        .map(|id| {
            view! {
                <Tile
                    id=id
                    src=id.src(&tiled_image_path)
                    tile_size=tile_size
                    render_content=render_tile_content.clone()
                />
            }
        })
        .collect_view();

    view! {
        <div
            node_ref=container_ref
            class="mosaic-viewer"
            style="position: relative; width: 100%; height: 100%; touch-action: none;"
            on:pointerup=move |_| pulse.trigger(PulseSource::PointerUp)
        >
            <PanZoom
                handle=handle
                content_width=content_width
                content_height=content_height
                limits=limits
                on_init=move || {
                    grid.ready.set(true);
                    pulse.trigger(PulseSource::Init);
                }
                on_pan_stop=move || pulse.trigger(PulseSource::PanStop)
                on_zoom_stop=move || pulse.trigger(PulseSource::ZoomStop)
            >
                <div style=grid_css>{tiles}</div>
            </PanZoom>
            <ZoomControls handle=handle pulse=pulse />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_grid_style() {
        let style = grid_style(&GridLayout::new(2, 2, DEFAULT_TILE_SIZE));
        assert!(style.contains("width: 584px"));
        assert!(style.contains("height: 584px"));
        assert!(style.contains("grid-template-columns: repeat(1, 292px) auto;"));
        assert!(style.contains("grid-template-rows: repeat(1, 292px) auto;"));
    }
}
