//! Integration tests for the RoomService → actuator pipeline.
//!
//! These run on the host (x86_64) and verify the full chain from a
//! button edge or serial character down to the recorded actuator calls,
//! without any real hardware.

use crate::mock_hw::{ActuatorCall, MockHardware, RecordingSink};

use roomctl::app::commands::SerialCommand;
use roomctl::app::events::AppEvent;
use roomctl::app::service::RoomService;
use roomctl::config::RoomConfig;

fn make_service() -> (RoomService, MockHardware, RecordingSink) {
    let config = RoomConfig::default();
    let mut service = RoomService::new(config);
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    service.start(&mut hw, &mut sink);
    (service, hw, sink)
}

// ── Startup state ────────────────────────────────────────────

#[test]
fn start_switches_lamp_off_and_applies_initial_duty() {
    let (service, hw, sink) = make_service();

    assert!(!hw.lamp_lit(), "lamp must be off after start");
    assert_eq!(hw.dimmer_duty(), Some(70), "initial dimmer duty is 70%");
    assert_eq!(sink.events, vec![AppEvent::Started]);
    assert!(!service.lamp_hold_active());
}

// ── Press → hold → expiry scenario ───────────────────────────

#[test]
fn press_holds_lamp_for_three_seconds() {
    let (mut service, mut hw, mut sink) = make_service();

    service.on_button_edge(0, &mut hw, &mut sink);
    assert!(hw.lamp_lit(), "lamp on immediately after accepted press");
    assert_eq!(
        sink.last_event(),
        Some(&AppEvent::PressAccepted { hold_ms: 3000 })
    );

    service.poll(2999, &mut hw, &mut sink);
    assert!(hw.lamp_lit(), "still inside the hold window at t=2999");
    assert_eq!(sink.events.len(), 2, "no event while the window holds");

    service.poll(3000, &mut hw, &mut sink);
    assert!(!hw.lamp_lit(), "lamp off exactly at t=3000");
    assert_eq!(
        sink.last_event(),
        Some(&AppEvent::LampExpired { after_ms: 3000 })
    );
}

#[test]
fn poll_after_expiry_is_idempotent() {
    let (mut service, mut hw, mut sink) = make_service();

    service.on_button_edge(0, &mut hw, &mut sink);
    service.poll(3000, &mut hw, &mut sink);
    let calls_after_expiry = hw.calls.len();
    let events_after_expiry = sink.events.len();

    service.poll(3001, &mut hw, &mut sink);
    service.poll(60_000, &mut hw, &mut sink);

    assert_eq!(hw.calls.len(), calls_after_expiry);
    assert_eq!(sink.events.len(), events_after_expiry);
}

// ── Debounce scenarios ───────────────────────────────────────

#[test]
fn bounce_within_window_is_suppressed() {
    let (mut service, mut hw, mut sink) = make_service();

    service.on_button_edge(1000, &mut hw, &mut sink);
    service.on_button_edge(1150, &mut hw, &mut sink);

    assert_eq!(hw.lamp_on_commands(), 1, "second edge must be a no-op");
    assert_eq!(
        sink.events
            .iter()
            .filter(|e| matches!(e, AppEvent::PressAccepted { .. }))
            .count(),
        1
    );
}

#[test]
fn accepted_repress_restarts_the_hold_window() {
    let (mut service, mut hw, mut sink) = make_service();

    service.on_button_edge(0, &mut hw, &mut sink); // accepted
    service.on_button_edge(150, &mut hw, &mut sink); // rejected (within window)
    service.on_button_edge(250, &mut hw, &mut sink); // accepted, restarts hold

    assert_eq!(hw.lamp_on_commands(), 2);

    service.poll(3000, &mut hw, &mut sink);
    assert!(hw.lamp_lit(), "3000 - 250 = 2750 < 3000, still on");

    service.poll(3250, &mut hw, &mut sink);
    assert!(!hw.lamp_lit(), "window restarted at 250 expires at 3250");
}

// ── Clock wraparound ─────────────────────────────────────────

#[test]
fn hold_window_survives_counter_wrap() {
    let (mut service, mut hw, mut sink) = make_service();

    // Accepted 50 ms before the counter wraps.
    let edge = u32::MAX - 49;
    service.on_button_edge(edge, &mut hw, &mut sink);
    assert!(hw.lamp_lit());

    // 60 ms elapsed, 10 of them past the wrap — nowhere near 3000.
    service.poll(10, &mut hw, &mut sink);
    assert!(hw.lamp_lit(), "elapsed must compute 60, not a huge value");

    // 3000 ms after the edge (2950 past the wrap).
    service.poll(2950, &mut hw, &mut sink);
    assert!(!hw.lamp_lit());
}

// ── Serial command dispatch ──────────────────────────────────

#[test]
fn dimmer_commands_set_duty_and_acknowledge() {
    let (mut service, mut hw, mut sink) = make_service();

    service.handle_serial('H', &mut hw, &mut sink);
    assert_eq!(hw.dimmer_duty(), Some(100));
    assert_eq!(
        sink.last_event(),
        Some(&AppEvent::CommandAccepted(SerialCommand::DimmerHigh))
    );

    service.handle_serial('l', &mut hw, &mut sink);
    assert_eq!(hw.dimmer_duty(), Some(0));
    assert_eq!(
        sink.last_event(),
        Some(&AppEvent::CommandAccepted(SerialCommand::DimmerLow))
    );
}

#[test]
fn toggle_flips_lamp_without_touching_the_dimmer() {
    let (mut service, mut hw, mut sink) = make_service();
    let duty_before = hw.dimmer_duty();

    service.handle_serial('t', &mut hw, &mut sink);
    assert!(hw.lamp_lit());
    service.handle_serial('T', &mut hw, &mut sink);
    assert!(!hw.lamp_lit());

    assert_eq!(hw.dimmer_duty(), duty_before);
}

#[test]
fn unknown_character_produces_no_command_and_no_ack() {
    let (mut service, mut hw, mut sink) = make_service();
    let calls_before = hw.calls.len();
    let events_before = sink.events.len();

    service.handle_serial('x', &mut hw, &mut sink);

    assert_eq!(hw.calls.len(), calls_before);
    assert_eq!(sink.events.len(), events_before);
}

#[test]
fn toggle_during_hold_window_does_not_cancel_expiry() {
    let (mut service, mut hw, mut sink) = make_service();

    service.on_button_edge(0, &mut hw, &mut sink);
    service.handle_serial('t', &mut hw, &mut sink);
    assert!(!hw.lamp_lit(), "toggle flipped the lamp off mid-window");

    // The timer still fires: poll issues the OFF command at expiry.
    service.poll(3000, &mut hw, &mut sink);
    assert_eq!(hw.last_call(), Some(&ActuatorCall::SetLamp { on: false }));
    assert!(!service.lamp_hold_active());
}
