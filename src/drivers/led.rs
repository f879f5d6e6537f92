//! GPIO LED driver.
//!
//! Drives a single digital output (the room lamp relay input or the
//! on-board heartbeat LED) and mirrors the commanded state in memory so
//! `toggle` needs no register read-back.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the GPIO level via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct LedDriver {
    gpio: i32,
    lit: bool,
}

impl LedDriver {
    pub fn new(gpio: i32) -> Self {
        Self { gpio, lit: false }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(self.gpio, on);
        self.lit = on;
    }

    pub fn toggle(&mut self) {
        self.set(!self.lit);
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

// The standard embedded-hal pin interface, so the driver can slot into
// generic embedded code (blinkers, pattern engines) unchanged.

impl embedded_hal::digital::ErrorType for LedDriver {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for LedDriver {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

impl embedded_hal::digital::StatefulOutputPin for LedDriver {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.lit)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.lit)
    }
}
