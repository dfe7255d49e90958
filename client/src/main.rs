mod app;
mod config;
mod controls;
mod focus;
mod pan_zoom;
mod preload;
mod pulse;
mod tile;
mod viewer;

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let mount_target = document
        .get_element_by_id("app")
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body());
    let Some(target) = mount_target else {
        return;
    };
    let config = config::load_grid_config();

    // The viewer lives for the whole page.
    mount_to(target, move || view! { <app::App config=config /> }).forget();
}
