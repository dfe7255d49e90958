use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use mosaic_shared::transform::{Surface, ZOOM_BUTTON_STEP};
use mosaic_shared::{ScaleBounds, Transform, ViewportSize};
use web_sys::{PointerEvent, WheelEvent};

/// Duration of the animated zoom triggered through [`PanZoomHandle`].
const ZOOM_ANIMATION_MS: u32 = 200;
/// Wheel idle time after which a zoom counts as stopped.
const WHEEL_STOP_MS: u32 = 150;

/// Imperative access to a [`PanZoom`] surface, used by the zoom buttons.
#[derive(Clone, Copy)]
pub struct PanZoomHandle {
    transform: RwSignal<Transform>,
    surface: RwSignal<Option<Surface>>,
    animating: RwSignal<bool>,
    animation_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl PanZoomHandle {
    pub fn new() -> Self {
        Self {
            transform: RwSignal::new(Transform::default()),
            surface: RwSignal::new(None),
            animating: RwSignal::new(false),
            animation_timer: StoredValue::new_local(None),
        }
    }

    pub fn zoom_in(&self) {
        self.animate_zoom(ZOOM_BUTTON_STEP);
    }

    pub fn zoom_out(&self) {
        self.animate_zoom(-ZOOM_BUTTON_STEP);
    }

    fn animate_zoom(&self, step: f64) {
        let Some(surface) = self.surface.get_untracked() else {
            return;
        };
        self.animating.set(true);
        self.transform.update(|t| t.zoom_step(step, &surface));

        let animating = self.animating;
        let timeout = Timeout::new(ZOOM_ANIMATION_MS, move || animating.set(false));
        self.animation_timer.set_value(Some(timeout));
    }

    fn pan(&self, dx: f64, dy: f64) {
        let Some(surface) = self.surface.get_untracked() else {
            return;
        };
        self.transform.update(|t| t.pan(dx, dy, &surface));
    }

    fn zoom_at(&self, delta: f64, focus_x: f64, focus_y: f64) {
        let Some(surface) = self.surface.get_untracked() else {
            return;
        };
        self.animating.set(false);
        self.transform
            .update(|t| t.zoom_at(delta, focus_x, focus_y, &surface));
    }
}

impl Default for PanZoomHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn content_style(transform: &Transform, animating: bool, placed: bool) -> String {
    let transition = if animating {
        format!("transform {ZOOM_ANIMATION_MS}ms ease-out")
    } else {
        "none".to_string()
    };
    let visibility = if placed { "visible" } else { "hidden" };
    format!(
        "position: absolute; left: 0; top: 0; transform-origin: 0 0; will-change: transform; transform: {}; transition: {transition}; visibility: {visibility};",
        transform.css()
    )
}

/// Pannable, zoomable surface around fixed-size content.
///
/// Drag pans (no inertia), the wheel zooms toward the cursor, pinch is not
/// handled. The content is centered at the initial scale once limits are
/// known, then kept within bounds.
#[component]
pub fn PanZoom(
    handle: PanZoomHandle,
    content_width: f64,
    content_height: f64,
    #[prop(into)] limits: Signal<Option<ScaleBounds>>,
    #[prop(into)] on_init: Callback<()>,
    #[prop(into)] on_pan_stop: Callback<()>,
    #[prop(into)] on_zoom_stop: Callback<()>,
    children: Children,
) -> impl IntoView {
    let wrapper_ref = NodeRef::<leptos::html::Div>::new();
    let initialized = StoredValue::new(false);
    let init_timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    // (Re)build the surface whenever limits change; the first build places
    // the content and reports init.
    Effect::new(move || {
        let Some(limits) = limits.get() else {
            return;
        };
        let Some(wrapper) = wrapper_ref.get() else {
            return;
        };
        let surface = Surface {
            content: ViewportSize::new(content_width, content_height),
            wrapper: ViewportSize::new(wrapper.client_width() as f64, wrapper.client_height() as f64),
            limits,
        };
        handle.surface.set(Some(surface));

        if initialized.get_value() {
            handle.transform.update(|t| t.clamp_to_bounds(&surface));
            return;
        }
        initialized.set_value(true);
        handle.transform.set(Transform::initial(&surface));
        // Report init only after the first transform has been applied.
        init_timer.set_value(Some(Timeout::new(0, move || on_init.run(()))));
    });

    let last_pointer: Rc<Cell<Option<(f64, f64)>>> = Rc::new(Cell::new(None));
    let wheel_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let on_pointer_down = {
        let last_pointer = last_pointer.clone();
        move |e: PointerEvent| {
            if e.button() != 0 {
                return;
            }
            last_pointer.set(Some((e.client_x() as f64, e.client_y() as f64)));
            if let Some(wrapper) = wrapper_ref.get_untracked() {
                wrapper.set_pointer_capture(e.pointer_id()).ok();
                web_sys::HtmlElement::style(&wrapper).set_property("cursor", "grabbing").ok();
            }
        }
    };

    let on_pointer_move = {
        let last_pointer = last_pointer.clone();
        move |e: PointerEvent| {
            let Some((last_x, last_y)) = last_pointer.get() else {
                return;
            };
            let (x, y) = (e.client_x() as f64, e.client_y() as f64);
            last_pointer.set(Some((x, y)));
            handle.pan(x - last_x, y - last_y);
        }
    };

    let end_drag = {
        let last_pointer = last_pointer.clone();
        move || {
            if last_pointer.take().is_none() {
                return;
            }
            if let Some(wrapper) = wrapper_ref.get_untracked() {
                web_sys::HtmlElement::style(&wrapper).set_property("cursor", "grab").ok();
            }
            on_pan_stop.run(());
        }
    };
    let on_pointer_up = {
        let end_drag = end_drag.clone();
        move |_: PointerEvent| end_drag()
    };
    let on_pointer_cancel = move |_: PointerEvent| end_drag();

    let on_wheel = move |e: WheelEvent| {
        e.prevent_default();
        let Some(wrapper) = wrapper_ref.get_untracked() else {
            return;
        };
        let rect = wrapper.get_bounding_client_rect();
        let focus_x = e.client_x() as f64 - rect.left();
        let focus_y = e.client_y() as f64 - rect.top();
        handle.zoom_at(e.delta_y(), focus_x, focus_y);

        // Zoom stop fires once the wheel has been idle for a moment.
        let timeout = Timeout::new(WHEEL_STOP_MS, move || on_zoom_stop.run(()));
        *wheel_timer.borrow_mut() = Some(timeout);
    };

    view! {
        <div
            node_ref=wrapper_ref
            style="position: relative; width: 100%; height: 100%; overflow: hidden; touch-action: none; cursor: grab;"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
            on:wheel=on_wheel
        >
            <div style=move || {
                content_style(
                    &handle.transform.get(),
                    handle.animating.get(),
                    handle.surface.with(Option::is_some),
                )
            }>{children()}</div>
        </div>
    }
}
