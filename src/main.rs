//! RoomCtl Firmware — Main Entry Point
//!
//! Hexagonal architecture around a cooperative polling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter        SerialEventSink      Esp32TimeAdapter  │
//! │  (ActuatorPort)         (EventSink)          (monotonic ms)    │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              RoomService (pure logic)                  │    │
//! │  │  debounce · timed lamp · command interpreter           │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  ButtonDriver (ISR edge latch) · Heartbeat (liveness blinker)  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
mod config;
mod heartbeat;
mod pins;
mod time;

mod adapters;
pub mod app;
mod drivers;

// ── Imports ───────────────────────────────────────────────────
use std::time::Duration;

use anyhow::Result;
use log::info;

use adapters::hardware::HardwareAdapter;
use adapters::serial_sink::SerialEventSink;
use adapters::time::Esp32TimeAdapter;
use app::ports::ActuatorPort;
use app::service::RoomService;
use config::RoomConfig;
use drivers::button::ButtonDriver;
use drivers::dimmer::DimmerDriver;
use drivers::led::LedDriver;
use drivers::serial::SerialConsole;
use heartbeat::Heartbeat;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("RoomCtl v{}", env!("CARGO_PKG_VERSION"));

    let config = RoomConfig::default();

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals(config.uart_baud) {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    if let Err(e) = drivers::hw_init::init_isr_service() {
        log::error!("ISR service init failed: {} — continuing without button input", e);
    }

    // ── 3. Construct adapters ─────────────────────────────────
    let clock = Esp32TimeAdapter::new();
    let mut hw = HardwareAdapter::new(
        LedDriver::new(pins::LAMP_GPIO),
        LedDriver::new(pins::HEARTBEAT_LED_GPIO),
        DimmerDriver::new(),
    );
    let mut sink = SerialEventSink::new(SerialConsole::new());
    let mut button = ButtonDriver::new(pins::BUTTON_GPIO);
    let mut heartbeat = Heartbeat::new(config.heartbeat_interval_ms);

    // ── 4. Construct and start the room service ───────────────
    let mut service = RoomService::new(config.clone());
    service.start(&mut hw, &mut sink);

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    //
    // Bounded sleep, then one cooperative pass: consume the latched
    // button edge (timestamped in the ISR), drain the serial console,
    // run the periodic poll, blink the heartbeat. Runs forever.
    loop {
        std::thread::sleep(Duration::from_millis(config.poll_interval_ms as u64));
        let now_ms = clock.uptime_ms();

        if let Some(edge_ms) = button.take_edge() {
            service.on_button_edge(edge_ms, &mut hw, &mut sink);
        }

        while let Some(c) = drivers::serial::take_received() {
            service.handle_serial(c, &mut hw, &mut sink);
        }

        service.poll(now_ms, &mut hw, &mut sink);

        if heartbeat.tick(now_ms) {
            hw.toggle_heartbeat_led();
        }
    }
}
