//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the actuator drivers and exposes them through [`ActuatorPort`].
//! This is the only module besides `drivers::hw_init` that touches actual
//! hardware.  On non-espidf targets the underlying drivers use cfg-gated
//! simulation stubs.

use crate::app::ports::ActuatorPort;
use crate::drivers::dimmer::DimmerDriver;
use crate::drivers::led::LedDriver;

/// Concrete adapter that combines all actuators behind the port trait.
pub struct HardwareAdapter {
    lamp: LedDriver,
    heartbeat_led: LedDriver,
    dimmer: DimmerDriver,
}

impl HardwareAdapter {
    pub fn new(lamp: LedDriver, heartbeat_led: LedDriver, dimmer: DimmerDriver) -> Self {
        Self {
            lamp,
            heartbeat_led,
            dimmer,
        }
    }

    /// Current lamp state (commanded, not read back from the pin).
    pub fn lamp_lit(&self) -> bool {
        self.lamp.is_lit()
    }

    /// Current dimmer duty (commanded).
    pub fn dimmer_duty(&self) -> u8 {
        self.dimmer.duty_percent()
    }
}

impl ActuatorPort for HardwareAdapter {
    fn set_lamp(&mut self, on: bool) {
        self.lamp.set(on);
    }

    fn toggle_lamp(&mut self) {
        self.lamp.toggle();
    }

    fn set_dimmer_duty(&mut self, percent: u8) {
        self.dimmer.set_duty(percent);
    }

    fn toggle_heartbeat_led(&mut self) {
        self.heartbeat_led.toggle();
    }
}
