//! System configuration parameters
//!
//! All tunable parameters for the RoomCtl system.  There is no persistent
//! storage; values are compile-time defaults applied at boot.

/// Core system configuration
#[derive(Debug, Clone)]
pub struct RoomConfig {
    // --- Button ---
    /// Minimum gap between two accepted button presses (milliseconds).
    pub debounce_window_ms: u32,

    // --- Lamp ---
    /// How long the lamp stays on after an accepted press (milliseconds).
    pub lamp_hold_ms: u32,

    // --- Dimmer ---
    /// Dimmer duty cycle applied at startup (0-100%).
    pub initial_dimmer_duty_percent: u8,

    // --- Timing ---
    /// Control loop sleep per iteration (milliseconds).
    pub poll_interval_ms: u32,
    /// Heartbeat LED toggle interval (milliseconds).
    pub heartbeat_interval_ms: u32,

    // --- Serial ---
    /// UART console baud rate.
    pub uart_baud: u32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            // Button
            debounce_window_ms: 200,

            // Lamp
            lamp_hold_ms: 3000,

            // Dimmer
            initial_dimmer_duty_percent: 70,

            // Timing
            poll_interval_ms: 10,
            heartbeat_interval_ms: 200,

            // Serial
            uart_baud: 115_200,
        }
    }
}
