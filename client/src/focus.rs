use gloo_events::EventListener;
use leptos::prelude::*;
use mosaic_shared::pulse::WindowFocusEvent;

use crate::pulse::SettlePulse;

/// Listen for window focus/blur for as long as the calling component lives.
///
/// Regaining focus pulses the grid so tiles that came into view while the tab
/// was backgrounded get picked up. Blur is only logged.
pub fn subscribe_window_focus(pulse: SettlePulse) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let listeners: Vec<EventListener> = WindowFocusEvent::EVENT_TYPES
        .into_iter()
        .map(|event_type| {
            EventListener::new(&window, event_type, move |event| {
                let Some(focus_event) = WindowFocusEvent::from_event_type(&event.type_()) else {
                    return;
                };
                web_sys::console::log_1(&focus_log_message(focus_event).into());
                if let Some(source) = focus_event.pulse() {
                    pulse.trigger(source);
                }
            })
        })
        .collect();

    // Owned by the reactive scope: dropping the listeners on unmount unregisters them.
    let _listeners = StoredValue::new_local(listeners);
}

fn focus_log_message(event: WindowFocusEvent) -> &'static str {
    match event {
        WindowFocusEvent::Focus => "Window has been refocused",
        WindowFocusEvent::Blur => "Window has lost focus",
    }
}
