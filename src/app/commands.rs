//! Serial command interpreter.
//!
//! Maps a single received character to an actuator action and an
//! acknowledgement line.  Pure and stateless: the core keeps no record of
//! past commands, and the dimmer level itself lives in the actuator.
//!
//! Unrecognized characters are dropped silently — no acknowledgement, no
//! error.  That is a deliberate protocol choice, not an omission.

/// A recognized single-character command from the serial console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialCommand {
    /// `h` / `H` — dimmer to full brightness.
    DimmerHigh,
    /// `l` / `L` — dimmer fully off.
    DimmerLow,
    /// `t` / `T` — flip the room lamp.
    LampToggle,
}

impl SerialCommand {
    /// Interpret a received character.  Case-insensitive; returns `None`
    /// for anything unrecognized.
    pub fn parse(c: char) -> Option<Self> {
        match c {
            'h' | 'H' => Some(Self::DimmerHigh),
            'l' | 'L' => Some(Self::DimmerLow),
            't' | 'T' => Some(Self::LampToggle),
            _ => None,
        }
    }

    /// Acknowledgement line sent back over serial once the command has
    /// been applied.
    pub fn ack(self) -> &'static str {
        match self {
            Self::DimmerHigh => "PWM at 100%",
            Self::DimmerLow => "PWM at 0%",
            Self::LampToggle => "Toggle",
        }
    }

    /// Dimmer duty this command requests, if it is a dimmer command.
    pub fn dimmer_duty(self) -> Option<u8> {
        match self {
            Self::DimmerHigh => Some(100),
            Self::DimmerLow => Some(0),
            Self::LampToggle => None,
        }
    }
}
