//! Heartbeat liveness blinker.
//!
//! The control loop calls [`Heartbeat::tick`] every iteration; the blinker
//! reports `true` whenever a full interval has elapsed since the last
//! toggle, and the loop flips the board LED in response.  A stalled loop
//! therefore shows up immediately as a frozen LED.

use crate::time::elapsed_ms;

pub struct Heartbeat {
    interval_ms: u32,
    last_toggle_ms: u32,
}

impl Heartbeat {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_toggle_ms: 0,
        }
    }

    /// Returns `true` when the LED should be toggled.
    pub fn tick(&mut self, now_ms: u32) -> bool {
        if elapsed_ms(now_ms, self.last_toggle_ms) >= self.interval_ms {
            self.last_toggle_ms = now_ms;
            return true;
        }
        false
    }
}
