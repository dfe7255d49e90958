use leptos::prelude::*;
use mosaic_shared::pulse::PulseSource;

use crate::pan_zoom::PanZoomHandle;
use crate::pulse::SettlePulse;

const PLUS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="12" y1="5" x2="12" y2="19"/><line x1="5" y1="12" x2="19" y2="12"/></svg>"#;
const MINUS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="5" y1="12" x2="19" y2="12"/></svg>"#;

const STACK_STYLE: &str = "position: fixed; bottom: 16px; right: 16px; z-index: 10; display: flex; flex-direction: column; gap: 8px;";
const BUTTON_STYLE: &str = "width: 48px; height: 48px; border: none; border-radius: 9999px; display: flex; align-items: center; justify-content: center; background: #fff; color: #000; cursor: pointer;";

/// Zoom in/out buttons. The animated zoom does not report a zoom stop, so
/// each press schedules its own delayed settle pulse.
#[component]
pub fn ZoomControls(handle: PanZoomHandle, pulse: SettlePulse) -> impl IntoView {
    view! {
        <div style=STACK_STYLE>
            <button
                type="button"
                aria-label="Zoom in"
                style=BUTTON_STYLE
                on:click=move |_| {
                    handle.zoom_in();
                    pulse.trigger(PulseSource::ZoomButton);
                }
                inner_html=PLUS_SVG
            />
            <button
                type="button"
                aria-label="Zoom out"
                style=BUTTON_STYLE
                on:click=move |_| {
                    handle.zoom_out();
                    pulse.trigger(PulseSource::ZoomButton);
                }
                inner_html=MINUS_SVG
            />
        </div>
    }
}
