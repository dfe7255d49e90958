use crate::geometry::ViewportSize;

pub const MAX_SCALE: f64 = 1.0;
/// Used until a viewport and non-empty grid are known.
pub const FALLBACK_MIN_SCALE: f64 = 0.15;

/// Zoom limits and starting zoom for a grid inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    pub min: f64,
    pub initial: f64,
    pub max: f64,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self::from_min(FALLBACK_MIN_SCALE)
    }
}

impl ScaleBounds {
    /// The smallest scale fits the whole grid inside the viewport; the initial
    /// scale sits halfway between that and full size.
    pub fn compute(viewport: ViewportSize, rows: u32, cols: u32, tile_size: u32) -> Self {
        if rows == 0 || cols == 0 || tile_size == 0 {
            return Self::default();
        }
        let grid_w = cols as f64 * tile_size as f64;
        let grid_h = rows as f64 * tile_size as f64;
        let fit = (viewport.width / grid_w).min(viewport.height / grid_h);
        if !fit.is_finite() || fit <= 0.0 {
            return Self::default();
        }
        Self::from_min(fit)
    }

    fn from_min(min: f64) -> Self {
        let min = min.min(MAX_SCALE);
        let initial = ((min + 1.0) / 2.0).clamp(min, MAX_SCALE);
        Self {
            min,
            initial,
            max: MAX_SCALE,
        }
    }

    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_grid_into_viewport() {
        // 10x4 grid of 292px tiles = 2920 x 1168.
        let bounds = ScaleBounds::compute(ViewportSize::new(1460.0, 876.0), 4, 10, 292);
        assert!((bounds.min - 0.5).abs() < 1e-9);
        assert!((bounds.initial - 0.75).abs() < 1e-9);
        assert_eq!(bounds.max, 1.0);
    }

    #[test]
    fn small_grid_is_capped_at_full_size() {
        let bounds = ScaleBounds::compute(ViewportSize::new(4000.0, 4000.0), 2, 2, 292);
        assert_eq!(bounds.min, 1.0);
        assert_eq!(bounds.initial, 1.0);
        assert_eq!(bounds.max, 1.0);
    }

    #[test]
    fn empty_grid_or_viewport_uses_fallback() {
        assert_eq!(
            ScaleBounds::compute(ViewportSize::new(800.0, 600.0), 0, 3, 292),
            ScaleBounds::default()
        );
        assert_eq!(
            ScaleBounds::compute(ViewportSize::new(0.0, 0.0), 3, 3, 292),
            ScaleBounds::default()
        );
        assert_eq!(ScaleBounds::default().min, FALLBACK_MIN_SCALE);
    }

    #[test]
    fn initial_stays_between_min_and_max() {
        for width in [100.0, 700.0, 2000.0, 9000.0] {
            let bounds = ScaleBounds::compute(ViewportSize::new(width, 700.0), 6, 6, 292);
            assert!(bounds.min <= bounds.initial);
            assert!(bounds.initial <= bounds.max);
        }
    }

    #[test]
    fn clamp_respects_limits() {
        let bounds = ScaleBounds::compute(ViewportSize::new(1460.0, 876.0), 4, 10, 292);
        assert_eq!(bounds.clamp(0.1), 0.5);
        assert_eq!(bounds.clamp(3.0), 1.0);
        assert_eq!(bounds.clamp(0.8), 0.8);
    }
}
