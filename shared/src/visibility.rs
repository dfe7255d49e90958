use crate::geometry::{Rect, ViewportSize, is_rect_visible};

/// Per-tile visibility. Moves from `Unmeasured` to `Visible` and never back,
/// so a tile that was shown once keeps its bitmap when scrolled away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileVisibility {
    #[default]
    Unmeasured,
    Visible,
}

impl TileVisibility {
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    /// Whether a recomputation trigger should measure this tile at all.
    pub fn needs_measure(self) -> bool {
        !self.is_visible()
    }

    /// Apply one measurement. Returns `true` on the transition to `Visible`.
    pub fn observe(&mut self, rect: &Rect, viewport: ViewportSize) -> bool {
        if self.is_visible() || !is_rect_visible(rect, viewport) {
            return false;
        }
        *self = Self::Visible;
        true
    }

    /// One sweep on a settle pulse. Nothing is measured before the grid is
    /// `ready` or once the tile is already visible; `measure` returns `None`
    /// when the tile is not mounted.
    pub fn sweep(
        &mut self,
        ready: bool,
        viewport: ViewportSize,
        measure: impl FnOnce() -> Option<Rect>,
    ) -> bool {
        if !ready || !self.needs_measure() {
            return false;
        }
        match measure() {
            Some(rect) => self.observe(&rect, viewport),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: ViewportSize = ViewportSize::new(800.0, 600.0);

    #[test]
    fn offscreen_tile_stays_unmeasured() {
        let mut state = TileVisibility::default();
        assert!(!state.observe(&Rect::new(2000.0, 0.0, 292.0, 292.0), VIEWPORT));
        assert!(state.needs_measure());
    }

    #[test]
    fn becomes_visible_once_in_view() {
        let mut state = TileVisibility::default();
        assert!(state.observe(&Rect::new(100.0, 100.0, 292.0, 292.0), VIEWPORT));
        assert!(state.is_visible());
        assert!(!state.needs_measure());
    }

    #[test]
    fn sweep_waits_for_ready() {
        let mut state = TileVisibility::default();
        let mut measured = false;
        let changed = state.sweep(false, VIEWPORT, || {
            measured = true;
            Some(Rect::new(100.0, 100.0, 292.0, 292.0))
        });
        assert!(!changed);
        assert!(!measured);
        assert!(state.needs_measure());

        assert!(state.sweep(true, VIEWPORT, || Some(Rect::new(100.0, 100.0, 292.0, 292.0))));
        assert!(state.is_visible());
    }

    #[test]
    fn sweep_skips_visible_tiles() {
        let mut state = TileVisibility::Visible;
        let mut measured = false;
        assert!(!state.sweep(true, VIEWPORT, || {
            measured = true;
            None
        }));
        assert!(!measured);
    }

    #[test]
    fn sweep_of_unmounted_tile_changes_nothing() {
        let mut state = TileVisibility::default();
        assert!(!state.sweep(true, VIEWPORT, || None));
        assert!(state.needs_measure());
    }

    #[test]
    fn visibility_never_reverts() {
        let mut state = TileVisibility::default();
        state.observe(&Rect::new(100.0, 100.0, 292.0, 292.0), VIEWPORT);
        for offset in [-5000.0, 5000.0, 12_000.0] {
            assert!(!state.observe(&Rect::new(offset, offset, 292.0, 292.0), VIEWPORT));
            assert!(state.is_visible());
        }
    }
}
