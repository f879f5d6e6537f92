//! Outbound application events.
//!
//! The [`RoomService`](super::service::RoomService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other side
//! decide what to do with them — write a notification line to the serial
//! console, produce a log record, or collect them in a test recorder.

use super::commands::SerialCommand;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The service finished initialization and is waiting for events.
    Started,

    /// A button press survived the debounce window; the lamp is on and
    /// will hold for `hold_ms`.
    PressAccepted { hold_ms: u32 },

    /// The hold window elapsed and the lamp was switched off.
    LampExpired { after_ms: u32 },

    /// A serial command was recognized and applied.
    CommandAccepted(SerialCommand),
}
