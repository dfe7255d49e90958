/// How long a settle pulse stays raised before it clears itself.
pub const SETTLE_MS: u32 = 100;
/// Delay before a zoom-button pulse, long enough for the zoom animation to end.
pub const ZOOM_BUTTON_PULSE_DELAY_MS: u32 = 400;

/// Events that mark "the transform just settled" and trigger a visibility sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseSource {
    Init,
    PanStop,
    ZoomStop,
    PointerUp,
    WindowFocus,
    ZoomButton,
}

impl PulseSource {
    /// Milliseconds to wait before raising the pulse.
    pub fn delay_ms(self) -> u32 {
        match self {
            Self::ZoomButton => ZOOM_BUTTON_PULSE_DELAY_MS,
            _ => 0,
        }
    }
}

/// Handle for one scheduled clear. Only the most recent raise's token can
/// clear the pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseToken(u64);

/// Raised/cleared state of the settle pulse.
///
/// Every raise bumps the generation, so a clear scheduled by an earlier raise
/// is stale once a newer raise has happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PulseLatch {
    raised: bool,
    generation: u64,
}

impl PulseLatch {
    pub fn is_raised(&self) -> bool {
        self.raised
    }

    /// Raise (or re-raise) the pulse. The returned token is what the
    /// `SETTLE_MS` clear must hand back.
    pub fn raise(&mut self) -> PulseToken {
        self.raised = true;
        self.generation = self.generation.wrapping_add(1);
        PulseToken(self.generation)
    }

    /// Clear the pulse if `token` belongs to the latest raise. Returns whether
    /// the state changed.
    pub fn expire(&mut self, token: PulseToken) -> bool {
        if !self.raised || token.0 != self.generation {
            return false;
        }
        self.raised = false;
        true
    }
}

/// Window-level focus events the grid subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFocusEvent {
    Focus,
    Blur,
}

impl WindowFocusEvent {
    pub const EVENT_TYPES: [&'static str; 2] = ["focus", "blur"];

    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "focus" => Some(Self::Focus),
            "blur" => Some(Self::Blur),
            _ => None,
        }
    }

    /// Regaining focus re-checks visibility; losing it changes nothing.
    pub fn pulse(self) -> Option<PulseSource> {
        match self {
            Self::Focus => Some(PulseSource::WindowFocus),
            Self::Blur => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, ViewportSize};
    use crate::grid::tile_ids;
    use crate::visibility::TileVisibility;

    #[test]
    fn only_zoom_buttons_are_delayed() {
        assert_eq!(PulseSource::ZoomButton.delay_ms(), 400);
        for source in [
            PulseSource::Init,
            PulseSource::PanStop,
            PulseSource::ZoomStop,
            PulseSource::PointerUp,
            PulseSource::WindowFocus,
        ] {
            assert_eq!(source.delay_ms(), 0);
        }
    }

    #[test]
    fn re_raise_before_expiry_keeps_pulse_up() {
        let mut latch = PulseLatch::default();
        let first = latch.raise();
        let second = latch.raise();

        // The first raise's clear fires while the second is still pending.
        assert!(!latch.expire(first));
        assert!(latch.is_raised());

        assert!(latch.expire(second));
        assert!(!latch.is_raised());
    }

    #[test]
    fn expiry_after_clear_is_a_no_op() {
        let mut latch = PulseLatch::default();
        let token = latch.raise();
        assert!(latch.expire(token));
        assert!(!latch.expire(token));
        assert!(!latch.is_raised());
    }

    #[test]
    fn stale_token_cannot_clear_a_later_pulse() {
        let mut latch = PulseLatch::default();
        let old = latch.raise();
        assert!(latch.expire(old));
        let _new = latch.raise();
        assert!(!latch.expire(old));
        assert!(latch.is_raised());
    }

    #[test]
    fn focus_raises_pulse_but_blur_does_not() {
        let mut latch = PulseLatch::default();
        if WindowFocusEvent::Blur.pulse().is_some() {
            latch.raise();
        }
        assert!(!latch.is_raised());

        let source = WindowFocusEvent::Focus.pulse();
        assert_eq!(source.map(PulseSource::delay_ms), Some(0));
        if source.is_some() {
            latch.raise();
        }
        assert!(latch.is_raised());
    }

    #[test]
    fn parses_window_event_types() {
        for event_type in WindowFocusEvent::EVENT_TYPES {
            assert!(WindowFocusEvent::from_event_type(event_type).is_some());
        }
        assert_eq!(WindowFocusEvent::from_event_type("resize"), None);
    }

    #[test]
    fn blur_then_focus_triggers_sweep_of_hidden_tiles() {
        let viewport = ViewportSize::new(600.0, 600.0);
        let tiles: Vec<_> = tile_ids(3, 3).collect();
        let mut states = vec![TileVisibility::default(); tiles.len()];

        // Only the top-left tile is on screen at first.
        let rect_at = |index: usize, shift: f64| {
            let id = tiles[index];
            Rect::new(
                (id.col - 1) as f64 * 292.0 - shift,
                (id.row - 1) as f64 * 292.0 - shift,
                292.0,
                292.0,
            )
        };
        states[0].observe(&rect_at(0, -300.0), viewport);

        assert_eq!(WindowFocusEvent::Blur.pulse(), None);
        let pulse = WindowFocusEvent::Focus.pulse();
        assert_eq!(pulse, Some(PulseSource::WindowFocus));

        // While backgrounded the content moved; the sweep picks up the new rects.
        for (index, state) in states.iter_mut().enumerate() {
            if state.needs_measure() {
                state.observe(&rect_at(index, 300.0), viewport);
            }
        }
        let visible = states.iter().filter(|s| s.is_visible()).count();
        assert!(visible > 1);
        assert!(states[0].is_visible());
    }
}
