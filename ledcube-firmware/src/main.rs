//! ledcube - LED Cube Scan-out Firmware
//!
//! Main firmware binary for RP2040 boards driving an LED cube through a
//! shift-register chain. Port wiring, pulse patterns and the initial image
//! come from `cube.toml`.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use ledcube_core::CubeDriver;
use ledcube_hal::DelayNsHook;
use ledcube_hal_rp2040::PinBank;

mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("ledcube firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    let mut bank = PinBank::new(p);
    info!("Peripherals initialized");

    // Output pins first: the driver must never write to unconfigured lines
    let port = match config::build_port(&mut bank) {
        Ok(port) => port,
        Err(e) => {
            error!("Port setup failed: {:?}", e);
            defmt::panic!("cannot continue without an output port");
        }
    };
    info!("Output port ready: {} lines", port.width());

    let scan = match config::scan_config() {
        Ok(scan) => scan,
        Err(e) => {
            error!("Invalid scan config: {:?}", e);
            defmt::panic!("cannot continue without a scan config");
        }
    };
    info!(
        "Scan config: repeat={}, reset={:08b}, zero={:08b}, one={:08b}",
        scan.scan_repeat,
        scan.pattern.reset(),
        scan.pattern.zero(),
        scan.pattern.one()
    );

    let timing = config::pulse_timing();
    debug!(
        "Pulse hold: reset={}ns bit={}ns",
        timing.reset_ns, timing.bit_ns
    );

    let mut driver = CubeDriver::with_delay(port, DelayNsHook::new(Delay, timing), scan);
    driver.fill(config::INITIAL_FILL);
    info!("Framebuffer filled with {:02x}", config::INITIAL_FILL);

    spawner.spawn(tasks::refresh_task(driver)).unwrap();

    info!("All tasks spawned");
}
