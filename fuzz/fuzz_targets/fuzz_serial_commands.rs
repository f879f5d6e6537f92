#![no_main]

//! The command interpreter must never panic, whatever bytes arrive on
//! the wire, and must map every recognized command to an ack and a duty.

use libfuzzer_sys::fuzz_target;
use roomctl::app::commands::SerialCommand;

fuzz_target!(|data: &[u8]| {
    for &byte in data {
        let c = char::from(byte);
        if let Some(cmd) = SerialCommand::parse(c) {
            assert!(!cmd.ack().is_empty());
            if let Some(duty) = cmd.dimmer_duty() {
                assert!(duty <= 100);
            }
        }
    }
});
