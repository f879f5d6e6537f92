//! UART console driver.
//!
//! TX side: assembles one notification line (text + CRLF) in a
//! fixed-capacity buffer and hands it to the UART in a single write, so
//! the control loop never allocates.  Best-effort: what the UART cannot
//! take is dropped, the loop is never blocked.
//!
//! RX side: non-blocking single-byte poll, drained by the control loop
//! one character at a time.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: real UART via hw_init.
//! On host/test: TX goes nowhere, RX is always empty.

use crate::drivers::hw_init;

/// Longest notification line, CRLF included.
const LINE_CAP: usize = 128;

pub struct SerialConsole;

impl SerialConsole {
    pub fn new() -> Self {
        Self
    }

    /// Send one text line, CRLF-terminated.  Text beyond the line buffer
    /// capacity is truncated; every notification in this firmware is far
    /// shorter.
    pub fn send_line(&mut self, text: &str) {
        let mut line: heapless::String<LINE_CAP> = heapless::String::new();
        let _ = line.push_str(text);
        let _ = line.push_str("\r\n");
        hw_init::uart_write(line.as_bytes());
    }
}

/// Consume one received character, if any.  Non-blocking.
pub fn take_received() -> Option<char> {
    hw_init::uart_read_byte().map(char::from)
}
