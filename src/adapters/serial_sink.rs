//! Serial event sink adapter.
//!
//! Implements [`EventSink`] by writing the human-readable notification
//! lines to the UART console — the same lines the PC-side operator sees —
//! and mirroring each event as a structured log record.

use core::fmt::Write as _;

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::drivers::serial::SerialConsole;

/// Adapter that renders every [`AppEvent`] onto the serial console.
pub struct SerialEventSink {
    console: SerialConsole,
}

impl SerialEventSink {
    pub fn new(console: SerialConsole) -> Self {
        Self { console }
    }
}

impl EventSink for SerialEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                self.console.send_line("System initialized. Awaiting events.");
                info!("START | awaiting events");
            }
            AppEvent::PressAccepted { hold_ms } => {
                let mut line = heapless::String::<96>::new();
                let _ = write!(
                    line,
                    "Button B1: pressed. Lamp on for {} seconds.",
                    hold_ms / 1000
                );
                self.console.send_line(&line);
                info!("PRESS | lamp on, hold={}ms", hold_ms);
            }
            AppEvent::LampExpired { after_ms } => {
                let mut line = heapless::String::<96>::new();
                let _ = write!(line, "Lamp off after {} seconds.", after_ms / 1000);
                self.console.send_line(&line);
                info!("LAMP | hold expired after {}ms", after_ms);
            }
            AppEvent::CommandAccepted(cmd) => {
                self.console.send_line(cmd.ack());
                info!("CMD | {:?} -> {}", cmd, cmd.ack());
            }
        }
    }
}
