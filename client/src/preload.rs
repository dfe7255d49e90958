use leptos::prelude::*;
use mosaic_shared::preload::preload_in_order;
use mosaic_shared::{LoadedSet, TileId, TileLoadError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

/// Fetch and decode one tile bitmap through a detached image element.
async fn load_image(tile: TileId, src: String) -> Result<(), TileLoadError> {
    let image = HtmlImageElement::new().map_err(|_| TileLoadError::ImageElement { tile })?;
    image.set_src(&src);
    let decoded: js_sys::Promise = image.decode();
    JsFuture::from(decoded)
        .await
        .map(|_| ())
        .map_err(|err| TileLoadError::Load {
            tile,
            message: js_error_message(&err),
        })
}

fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "unknown error".to_string())
}

/// Walk the distance-ordered tile list one fetch at a time every time the
/// order changes, marking each fetched tile as loaded.
///
/// Passes are never cancelled; a pass started for an older order simply runs
/// to completion alongside the newer one.
pub fn preload_on_order_change(
    base_path: String,
    ordered: Memo<Vec<TileId>>,
    loaded: RwSignal<LoadedSet>,
) {
    Effect::new(move || {
        let order = ordered.get();
        if order.is_empty() {
            return;
        }
        let base_path = base_path.clone();
        wasm_bindgen_futures::spawn_local(async move {
            preload_in_order(
                order,
                |id| load_image(id, id.src(&base_path)),
                |id| {
                    loaded.update(|set| {
                        set.mark(id);
                    })
                },
                |err| {
                    web_sys::console::error_1(&format!("Failed to load image: {err}").into());
                },
            )
            .await;
        });
    });
}
