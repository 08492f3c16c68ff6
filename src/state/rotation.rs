//! Toast Rotation
//!
//! Cancellable periodic task that advances the daily toast through its item
//! list. Holding the `Interval` keeps it alive; dropping it cancels the
//! timer, so Idle vs Rotating is exactly "is the slot occupied".

use gloo_timers::callback::Interval;
use leptos::{SignalGetUntracked, SignalUpdate};
use std::cell::RefCell;
use std::rc::Rc;

use super::global::GlobalState;

/// How long each daily-content item stays up before the next one shows
pub const ROTATION_PERIOD_MS: u32 = 20_000;

/// Start/stop handle for the daily toast cycle
#[derive(Clone, Default)]
pub struct ToastRotation {
    interval: Rc<RefCell<Option<Interval>>>,
}

impl ToastRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin rotating over the loaded items.
    ///
    /// Any live timer is cancelled first so two intervals never run at once.
    /// With no items this stays Idle; otherwise the item at the current
    /// rotation index is already on screen (the banner tracks the index
    /// signal) and the index advances every period, wrapping, until `stop`.
    pub fn start(&self, state: &GlobalState) {
        self.stop();

        if state.toast_items.get_untracked().is_empty() {
            return;
        }

        let items = state.toast_items;
        let index = state.toast_index;
        let interval = Interval::new(ROTATION_PERIOD_MS, move || {
            let len = items.get_untracked().len();
            if len > 0 {
                index.update(|i| *i = next_index(*i, len));
            }
        });

        *self.interval.borrow_mut() = Some(interval);
    }

    /// Cancel the timer and return to Idle
    pub fn stop(&self) {
        self.interval.borrow_mut().take();
    }

    pub fn is_rotating(&self) -> bool {
        self.interval.borrow().is_some()
    }
}

/// Next rotation position, wrapping past the last item
pub fn next_index(index: usize, len: usize) -> usize {
    (index + 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        // quote -> achievement -> back to quote for a two-item list
        assert_eq!(next_index(0, 2), 1);
        assert_eq!(next_index(1, 2), 0);
    }

    #[test]
    fn test_rotation_single_item() {
        assert_eq!(next_index(0, 1), 0);
    }

    #[test]
    fn test_new_handle_is_idle() {
        let rotation = ToastRotation::new();
        assert!(!rotation.is_rotating());
        // Stopping while idle is a no-op
        rotation.stop();
        assert!(!rotation.is_rotating());
    }
}
