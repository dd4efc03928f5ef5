use crate::constants::GESTURE_DEBOUNCE_SEC;
use crate::gesture::GestureMode;

// Slack for clocks built by summing frame deltas.
const TIME_EPSILON: f64 = 1e-9;

/// Turns noisy per-frame classifications into a stable confirmed mode.
///
/// A candidate is promoted only after it has been observed on every tick for
/// at least `delay_sec`. The confirmed mode never goes back to "nothing"; when
/// the hand disappears the caller simply stops observing.
#[derive(Clone, Debug)]
pub struct GestureDebouncer {
    pending: Option<GestureMode>,
    pending_since: f64,
    confirmed: GestureMode,
    delay_sec: f64,
}

impl Default for GestureDebouncer {
    fn default() -> Self {
        Self::new(GESTURE_DEBOUNCE_SEC)
    }
}

impl GestureDebouncer {
    pub fn new(delay_sec: f64) -> Self {
        Self {
            pending: None,
            pending_since: 0.0,
            confirmed: GestureMode::Lotus,
            delay_sec,
        }
    }

    /// Feed one classification taken at `now_sec`.
    ///
    /// Returns the new confirmed mode on the tick it changes.
    pub fn observe(&mut self, observed: GestureMode, now_sec: f64) -> Option<GestureMode> {
        if self.pending != Some(observed) {
            self.pending = Some(observed);
            self.pending_since = now_sec;
            return None;
        }
        let held = now_sec - self.pending_since;
        if held + TIME_EPSILON >= self.delay_sec && observed != self.confirmed {
            self.confirmed = observed;
            return Some(observed);
        }
        None
    }

    pub fn confirmed(&self) -> GestureMode {
        self.confirmed
    }

    pub fn pending(&self) -> Option<GestureMode> {
        self.pending
    }

    pub fn pending_since(&self) -> f64 {
        self.pending_since
    }

    pub fn delay_sec(&self) -> f64 {
        self.delay_sec
    }
}
