//! Simulated driver-loop composition tests.
//!
//! Step a fake clock in 10 ms increments the way `main()`'s control loop
//! does — consume a pending edge, run the periodic poll, tick the
//! heartbeat — and assert the composed behaviour over several seconds of
//! simulated time.

use crate::mock_hw::{MockHardware, RecordingSink};

use roomctl::app::ports::ActuatorPort;
use roomctl::app::service::RoomService;
use roomctl::config::RoomConfig;
use roomctl::heartbeat::Heartbeat;

const STEP_MS: u32 = 10;

#[test]
fn heartbeat_blinks_while_lamp_cycle_runs() {
    let config = RoomConfig::default();
    let mut service = RoomService::new(config.clone());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    let mut heartbeat = Heartbeat::new(config.heartbeat_interval_ms);

    service.start(&mut hw, &mut sink);

    // Press arrives between loop iterations at t≈1000.
    let mut pending_edge = Some(1000u32);

    let mut now_ms = 0u32;
    while now_ms <= 5000 {
        now_ms += STEP_MS;

        if now_ms >= 1000 {
            if let Some(edge_ms) = pending_edge.take() {
                service.on_button_edge(edge_ms, &mut hw, &mut sink);
            }
        }

        service.poll(now_ms, &mut hw, &mut sink);

        if heartbeat.tick(now_ms) {
            hw.toggle_heartbeat_led();
        }
    }

    // 5000 ms / 200 ms cadence = 25 toggles.
    assert_eq!(hw.heartbeat_toggles(), 25);

    // The lamp came on once and went off once, 3000 ms later.
    assert_eq!(hw.lamp_on_commands(), 1);
    assert!(!hw.lamp_lit(), "hold window expired during the run");
    assert!(!service.lamp_hold_active());
}

#[test]
fn lamp_stays_on_between_polls_and_reverts_on_schedule() {
    let config = RoomConfig::default();
    let mut service = RoomService::new(config.clone());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    service.start(&mut hw, &mut sink);
    service.on_button_edge(40, &mut hw, &mut sink);

    let mut now_ms = 40u32;
    let mut off_at = None;
    while now_ms <= 4000 {
        now_ms += STEP_MS;
        service.poll(now_ms, &mut hw, &mut sink);
        if off_at.is_none() && !hw.lamp_lit() {
            off_at = Some(now_ms);
        }
    }

    // The 10 ms poll grid first reaches 40 + 3000 at t=3040.
    assert_eq!(off_at, Some(3040));
}
