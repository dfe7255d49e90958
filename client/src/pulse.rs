use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use mosaic_shared::PulseLatch;
use mosaic_shared::pulse::{PulseSource, SETTLE_MS};

/// Short-lived "transform settled" flag that tiles watch to re-check their
/// visibility.
///
/// Each raise re-arms a single clear timer, so back-to-back raises extend the
/// pulse instead of stacking timers. Delayed raises (zoom buttons) own a second
/// single slot. Both timers are dropped, and so cancelled, with the owning scope.
#[derive(Clone, Copy)]
pub struct SettlePulse {
    latch: RwSignal<PulseLatch>,
    clear_timer: StoredValue<Option<Timeout>, LocalStorage>,
    delayed_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl SettlePulse {
    pub fn new() -> Self {
        Self {
            latch: RwSignal::new(PulseLatch::default()),
            clear_timer: StoredValue::new_local(None),
            delayed_timer: StoredValue::new_local(None),
        }
    }

    /// Subscribe the running effect to pulse changes (both edges).
    pub fn track(&self) {
        self.latch.track();
    }

    pub fn trigger(&self, source: PulseSource) {
        match source.delay_ms() {
            0 => self.raise(),
            delay => {
                let pulse = *self;
                let timeout = Timeout::new(delay, move || pulse.raise());
                self.delayed_timer.set_value(Some(timeout));
            }
        }
    }

    fn raise(&self) {
        let Some(token) = self.latch.try_update(|latch| latch.raise()) else {
            return;
        };
        let latch = self.latch;
        let timeout = Timeout::new(SETTLE_MS, move || {
            latch.maybe_update(|latch| latch.expire(token));
        });
        // Replacing the slot drops (cancels) any pending clear.
        self.clear_timer.set_value(Some(timeout));
    }
}

impl Default for SettlePulse {
    fn default() -> Self {
        Self::new()
    }
}
