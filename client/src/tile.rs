use leptos::prelude::*;
use mosaic_shared::{Rect, TileId, TileVisibility, distance_report};

use crate::viewer::{GridContext, TileContentFn, window_size};

const TILE_FADE_MS: u32 = 1_000;
const OVERLAY_STYLE: &str = "position: absolute; top: 0; left: 0; width: 100%; height: 100%;";
const IMAGE_STYLE: &str = "display: block; width: 100%; height: 100%;";

pub(crate) fn element_rect(el: &web_sys::Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn tile_style(tile_size: u32, image_loaded: bool) -> String {
    let opacity = if image_loaded { 1 } else { 0 };
    format!(
        "position: relative; width: 100%; height: 100%; max-width: {tile_size}px; max-height: {tile_size}px; opacity: {opacity}; transition: opacity {TILE_FADE_MS}ms;"
    )
}

/// One grid cell. Fetches its bitmap once it has been seen (or preloaded)
/// and reports its distance to the viewport center once the grid is ready.
#[component]
pub fn Tile(
    id: TileId,
    src: String,
    tile_size: u32,
    render_content: Option<TileContentFn>,
) -> impl IntoView {
    let grid: GridContext = expect_context();
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let visibility = RwSignal::new(TileVisibility::default());
    let image_loaded = RwSignal::new(false);

    // Visibility sweep: runs once the surface is placed and on every edge of
    // the settle pulse, until the tile has been seen once.
    Effect::new(move || {
        grid.pulse.track();
        let ready = grid.ready.get();
        let mut state = visibility.get_untracked();
        let measure = || node_ref.get().map(|el| element_rect(&el));
        if state.sweep(ready, window_size(), measure) {
            visibility.set(state);
        }
    });

    // Distance report, gated on the pan/zoom surface being initialized.
    Effect::new(move || {
        let ready = grid.ready.get();
        let viewport = grid.viewport.get();
        let measure = || node_ref.get().map(|el| element_rect(&el));
        if let Some(distance) = distance_report(ready, viewport, measure) {
            grid.distances.update(|map| map.merge(id, distance));
        }
    });

    let shown = Memo::new(move |_| {
        visibility.get().is_visible() || grid.loaded.with(|loaded| loaded.contains(id))
    });

    view! {
        <div
            id=id.element_id()
            node_ref=node_ref
            style=move || tile_style(tile_size, image_loaded.get())
        >
            {move || {
                if !shown.get() {
                    return None;
                }
                let overlay = render_content.as_ref().and_then(|render| render(id));
                Some(view! {
                    <img
                        src=src.clone()
                        alt=""
                        style=IMAGE_STYLE
                        on:load=move |_| image_loaded.set(true)
                    />
                    <div style=OVERLAY_STYLE>{overlay}</div>
                })
            }}
        </div>
    }
}
