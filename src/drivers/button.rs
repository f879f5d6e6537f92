//! ISR-fed button edge latch.
//!
//! ## Hardware
//!
//! Active-low momentary switch with external pull-up.  GPIO fires on the
//! falling edge; the ISR latches the raw clock reading into a pair of
//! atomics, and the control loop consumes the latch once per iteration
//! and runs the debounce logic in normal context.
//!
//! ## Concurrency
//!
//! Single producer (the ISR), single consumer (the control loop).  The
//! producer stores the timestamp first and raises the pending flag second
//! (release ordering); the consumer lowers the flag before reading the
//! timestamp (acquire ordering), so a torn edge record is never observed.
//! If several physical edges land between two loop iterations the latest
//! timestamp wins — at a 10 ms loop period those edges sit inside the
//! 200 ms debounce window and would be rejected regardless.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Raw ISR timestamp (milliseconds since boot, truncated to u32).
/// Written by the ISR, read by the control loop.
static EDGE_TIMESTAMP_MS: AtomicU32 = AtomicU32::new(0);
static EDGE_PENDING: AtomicBool = AtomicBool::new(false);

pub struct ButtonDriver {
    gpio: i32,
}

impl ButtonDriver {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// GPIO pin this button is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Consume the pending edge, if any.  Returns the clock reading that
    /// was latched at the moment of the hardware edge.
    pub fn take_edge(&mut self) -> Option<u32> {
        if EDGE_PENDING.swap(false, Ordering::Acquire) {
            Some(EDGE_TIMESTAMP_MS.load(Ordering::Acquire))
        } else {
            None
        }
    }
}

/// ISR handler — register this on the button GPIO falling edge.
/// Safe to call from interrupt context (two lock-free atomic stores).
pub fn button_isr_handler(now_ms: u32) {
    EDGE_TIMESTAMP_MS.store(now_ms, Ordering::Release);
    EDGE_PENDING.store(true, Ordering::Release);
}
