use crate::geometry::ViewportSize;
use crate::scale::ScaleBounds;

const WHEEL_ZOOM_SENSITIVITY: f64 = 0.001;
/// Exponential step applied by the zoom buttons.
pub const ZOOM_BUTTON_STEP: f64 = 0.5;

/// What the transform is applied to: content of a fixed pixel size shown
/// through a wrapper, within zoom limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub content: ViewportSize,
    pub wrapper: ViewportSize,
    pub limits: ScaleBounds,
}

/// Pan/zoom state mapping content coordinates to wrapper coordinates.
/// Applied as a CSS `translate(..) scale(..)` with origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    /// Content centered in the wrapper at the initial scale.
    pub fn initial(surface: &Surface) -> Self {
        Self::centered(surface, surface.limits.initial)
    }

    pub fn centered(surface: &Surface, scale: f64) -> Self {
        let scale = surface.limits.clamp(scale);
        Self {
            offset_x: (surface.wrapper.width - surface.content.width * scale) / 2.0,
            offset_y: (surface.wrapper.height - surface.content.height * scale) / 2.0,
            scale,
        }
    }

    /// Pan by a wrapper-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64, surface: &Surface) {
        self.offset_x += dx;
        self.offset_y += dy;
        self.clamp_to_bounds(surface);
    }

    /// Wheel zoom toward a focal point in wrapper coordinates.
    pub fn zoom_at(&mut self, delta: f64, focus_x: f64, focus_y: f64, surface: &Surface) {
        let factor = (-delta * WHEEL_ZOOM_SENSITIVITY).exp();
        self.zoom_to(self.scale * factor, focus_x, focus_y, surface);
    }

    /// Step zoom about the wrapper center. Positive steps zoom in.
    pub fn zoom_step(&mut self, step: f64, surface: &Surface) {
        let focus_x = surface.wrapper.width / 2.0;
        let focus_y = surface.wrapper.height / 2.0;
        self.zoom_to(self.scale * step.exp(), focus_x, focus_y, surface);
    }

    fn zoom_to(&mut self, scale: f64, focus_x: f64, focus_y: f64, surface: &Surface) {
        let new_scale = surface.limits.clamp(scale);
        let ratio = new_scale / self.scale;

        // Keep the content point under the focus fixed.
        self.offset_x = focus_x - (focus_x - self.offset_x) * ratio;
        self.offset_y = focus_y - (focus_y - self.offset_y) * ratio;
        self.scale = new_scale;
        self.clamp_to_bounds(surface);
    }

    /// Re-apply zoom limits and keep content edges from moving inside the
    /// wrapper. Axes where the content is smaller than the wrapper are centered.
    pub fn clamp_to_bounds(&mut self, surface: &Surface) {
        let clamped = surface.limits.clamp(self.scale);
        if clamped != self.scale {
            let ratio = clamped / self.scale;
            self.offset_x *= ratio;
            self.offset_y *= ratio;
            self.scale = clamped;
        }
        self.offset_x = clamp_axis(
            self.offset_x,
            surface.content.width * self.scale,
            surface.wrapper.width,
        );
        self.offset_y = clamp_axis(
            self.offset_y,
            surface.content.height * self.scale,
            surface.wrapper.height,
        );
    }

    pub fn css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.5})",
            self.offset_x, self.offset_y, self.scale
        )
    }
}

fn clamp_axis(offset: f64, scaled: f64, wrapper: f64) -> f64 {
    if scaled <= wrapper {
        (wrapper - scaled) / 2.0
    } else {
        offset.clamp(wrapper - scaled, 0.0)
    }
}
