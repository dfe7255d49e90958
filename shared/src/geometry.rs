/// An axis-aligned rectangle in viewport (client) pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Size of the visible area the grid is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Replace each zero-sized axis with the fallback's.
    pub fn or_fallback(self, fallback: ViewportSize) -> Self {
        Self {
            width: if self.width > 0.0 { self.width } else { fallback.width },
            height: if self.height > 0.0 { self.height } else { fallback.height },
        }
    }
}

fn within(value: f64, extent: f64) -> bool {
    value >= 0.0 && value <= extent
}

/// Boundary-intersection visibility test.
///
/// A rectangle counts as visible when at least one of its vertical edges lies
/// inside `[0, width]` and at least one of its horizontal edges lies inside
/// `[0, height]`. A rectangle that spans the whole viewport with every edge
/// outside those ranges is reported as not visible.
pub fn is_rect_visible(rect: &Rect, viewport: ViewportSize) -> bool {
    let horizontally =
        within(rect.left, viewport.width) || within(rect.right(), viewport.width);
    let vertically =
        within(rect.top, viewport.height) || within(rect.bottom(), viewport.height);
    horizontally && vertically
}

/// Euclidean distance between the rectangle's midpoint and the viewport's midpoint.
pub fn distance_to_center(rect: &Rect, viewport: ViewportSize) -> f64 {
    let (mid_x, mid_y) = rect.center();
    let dx = mid_x - viewport.width / 2.0;
    let dy = mid_y - viewport.height / 2.0;
    (dx * dx + dy * dy).sqrt()
}
