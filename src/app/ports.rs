//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ RoomService (domain)
//! ```
//!
//! Driven adapters (actuators, event sinks) implement these traits.  The
//! [`RoomService`](super::service::RoomService) consumes them via generics,
//! so the domain core never touches hardware directly.
//!
//! All port operations are fire-and-forget and infallible from the
//! domain's perspective: adapters that can fail must drop and continue,
//! never block the control loop.

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command outputs.
pub trait ActuatorPort {
    /// Switch the room lamp on or off.  Idempotent.
    fn set_lamp(&mut self, on: bool);

    /// Flip the room lamp's current state.
    fn toggle_lamp(&mut self);

    /// Set the dimmer duty cycle (0–100, clamped by the driver).
    fn set_dimmer_duty(&mut self, percent: u8);

    /// Flip the heartbeat LED (liveness indicator).
    fn toggle_heartbeat_led(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → serial / logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial console,
/// log records, test recorders).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
