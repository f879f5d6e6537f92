//! Mock hardware adapter for integration tests.
//!
//! Records every actuator call so tests can assert on the full command
//! history without touching real GPIO/PWM registers.

use roomctl::app::events::AppEvent;
use roomctl::app::ports::{ActuatorPort, EventSink};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    SetLamp { on: bool },
    ToggleLamp,
    SetDimmerDuty { percent: u8 },
    ToggleHeartbeatLed,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
    lamp_lit: bool,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            lamp_lit: false,
        }
    }

    pub fn last_call(&self) -> Option<&ActuatorCall> {
        self.calls.last()
    }

    /// Lamp state after replaying every set/toggle command.
    pub fn lamp_lit(&self) -> bool {
        self.lamp_lit
    }

    /// Most recently commanded dimmer duty, if any.
    pub fn dimmer_duty(&self) -> Option<u8> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetDimmerDuty { percent } => Some(*percent),
            _ => None,
        })
    }

    pub fn heartbeat_toggles(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ActuatorCall::ToggleHeartbeatLed))
            .count()
    }

    /// Number of lamp ON commands issued so far.
    pub fn lamp_on_commands(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ActuatorCall::SetLamp { on: true }))
            .count()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ActuatorPort for MockHardware {
    fn set_lamp(&mut self, on: bool) {
        self.lamp_lit = on;
        self.calls.push(ActuatorCall::SetLamp { on });
    }

    fn toggle_lamp(&mut self) {
        self.lamp_lit = !self.lamp_lit;
        self.calls.push(ActuatorCall::ToggleLamp);
    }

    fn set_dimmer_duty(&mut self, percent: u8) {
        self.calls.push(ActuatorCall::SetDimmerDuty { percent });
    }

    fn toggle_heartbeat_led(&mut self) {
        self.calls.push(ActuatorCall::ToggleHeartbeatLed);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn last_event(&self) -> Option<&AppEvent> {
        self.events.last()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
