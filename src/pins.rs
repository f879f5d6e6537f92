//! GPIO / peripheral pin assignments for the RoomCtl board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Lamp outputs
// ---------------------------------------------------------------------------

/// External room lamp (relay driver input, active HIGH).
pub const LAMP_GPIO: i32 = 7;

/// On-board heartbeat LED — toggled by the control loop as a liveness
/// indicator.
pub const HEARTBEAT_LED_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Dimmer (LEDC PWM)
// ---------------------------------------------------------------------------

/// LEDC PWM channel output driving the ceiling-light dimmer module.
pub const DIMMER_PWM_GPIO: i32 = 6;

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the dimmer (1 kHz — module-compatible).
pub const DIMMER_PWM_FREQ_HZ: u32 = 1_000;

// ---------------------------------------------------------------------------
// User button (active-low with external pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button; falling edge fires the GPIO interrupt.
pub const BUTTON_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// UART console (command input + notifications to the PC)
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
