//! Room service — the hexagonal core.
//!
//! [`RoomService`] owns the button-debounce timestamp and the timed-lamp
//! state, and exposes the three domain entry points:
//!
//! - [`on_button_edge`](RoomService::on_button_edge) — called once per
//!   latched button edge with the clock reading captured at the edge,
//! - [`poll`](RoomService::poll) — called every loop iteration; reverts
//!   the lamp once the hold window elapses,
//! - [`handle_serial`](RoomService::handle_serial) — called once per
//!   received character.
//!
//! Debounce and auto-off are both "elapsed time since a recorded instant"
//! problems; both go through [`elapsed_ms`] so the wrap behaviour cannot
//! diverge.  The off-transition is deliberately deferred to the polled
//! path: the edge path stays short because its timestamp originates in
//! interrupt context.
//!
//! ```text
//!  button edge ──▶ ┌────────────────────────┐ ──▶ EventSink
//!  serial char ──▶ │       RoomService       │
//!  poll tick   ──▶ │  debounce · hold · cmd  │──▶ ActuatorPort
//!                  └────────────────────────┘
//! ```

use log::info;

use crate::config::RoomConfig;
use crate::time::elapsed_ms;

use super::commands::SerialCommand;
use super::events::AppEvent;
use super::ports::{ActuatorPort, EventSink};

// ───────────────────────────────────────────────────────────────
// RoomService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct RoomService {
    config: RoomConfig,
    /// Clock reading of the last press that survived the debounce window.
    /// `None` until the first press, so a press at tick zero is accepted.
    last_accepted_press_ms: Option<u32>,
    /// When the lamp was switched on by a press; `None` once reverted.
    /// A single field keeps the active-flag and the start timestamp one
    /// indivisible unit.
    lit_since_ms: Option<u32>,
}

impl RoomService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch the actuators — call [`start`](Self::start) next.
    pub fn new(config: RoomConfig) -> Self {
        Self {
            config,
            last_accepted_press_ms: None,
            lit_since_ms: None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Put the outputs into their boot state: lamp off, dimmer at the
    /// configured initial duty.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.set_lamp(false);
        hw.set_dimmer_duty(self.config.initial_dimmer_duty_percent);
        self.lit_since_ms = None;
        sink.emit(&AppEvent::Started);
        info!(
            "RoomService started (dimmer at {}%)",
            self.config.initial_dimmer_duty_percent
        );
    }

    // ── Button edge ───────────────────────────────────────────

    /// Handle a debounce-filtered button edge.
    ///
    /// `now_ms` is the clock reading latched at the moment of the hardware
    /// edge, not the time of dispatch.  An edge inside the debounce window
    /// is dropped with no side effects and no notification.
    pub fn on_button_edge(
        &mut self,
        now_ms: u32,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        if let Some(last) = self.last_accepted_press_ms {
            if elapsed_ms(now_ms, last) < self.config.debounce_window_ms {
                return;
            }
        }

        self.last_accepted_press_ms = Some(now_ms);
        hw.set_lamp(true);
        self.lit_since_ms = Some(now_ms);
        sink.emit(&AppEvent::PressAccepted {
            hold_ms: self.config.lamp_hold_ms,
        });
        info!("button press accepted at t={}ms", now_ms);
    }

    // ── Periodic poll ─────────────────────────────────────────

    /// Revert the lamp once the hold window has elapsed.
    ///
    /// Idempotent: after the expiry has been handled, further calls are
    /// no-ops until the next accepted press.
    pub fn poll(&mut self, now_ms: u32, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        let Some(lit_since) = self.lit_since_ms else {
            return;
        };
        if elapsed_ms(now_ms, lit_since) < self.config.lamp_hold_ms {
            return;
        }

        hw.set_lamp(false);
        self.lit_since_ms = None;
        sink.emit(&AppEvent::LampExpired {
            after_ms: self.config.lamp_hold_ms,
        });
        info!("lamp hold window elapsed at t={}ms", now_ms);
    }

    // ── Serial commands ───────────────────────────────────────

    /// Interpret and apply one received character.
    ///
    /// Unrecognized characters are dropped silently: no actuator command,
    /// no acknowledgement, no state change.
    pub fn handle_serial(
        &mut self,
        raw: char,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        let Some(cmd) = SerialCommand::parse(raw) else {
            return;
        };

        match cmd {
            SerialCommand::DimmerHigh | SerialCommand::DimmerLow => {
                // parse() guarantees a duty for the two dimmer commands.
                if let Some(duty) = cmd.dimmer_duty() {
                    hw.set_dimmer_duty(duty);
                }
            }
            SerialCommand::LampToggle => hw.toggle_lamp(),
        }
        sink.emit(&AppEvent::CommandAccepted(cmd));
    }

    // ── Queries ───────────────────────────────────────────────

    /// Whether the lamp is currently inside a button-triggered hold window.
    pub fn lamp_hold_active(&self) -> bool {
        self.lit_since_ms.is_some()
    }
}
