//! Refresh task
//!
//! The LEDs are multiplexed and go dark as soon as they stop being driven,
//! so the framebuffer is scanned out continuously. Each refresh blocks the
//! core for its full duration; the task yields to the executor in between.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::{Delay, Instant};

use ledcube_core::CubeDriver;
use ledcube_hal::DelayNsHook;
use ledcube_hal_rp2040::GpioPort;

/// Concrete driver type used by the firmware
pub type Cube = CubeDriver<GpioPort<'static>, DelayNsHook<Delay>>;

/// Refreshes between rate reports
const REPORT_EVERY: u32 = 1024;

/// Refresh task - scans the framebuffer out forever
#[embassy_executor::task]
pub async fn refresh_task(mut driver: Cube) {
    info!(
        "Refresh task started ({} writes per refresh)",
        driver.scanner().writes_per_refresh()
    );

    let mut refreshes: u32 = 0;
    let mut window_start = Instant::now();

    loop {
        driver.refresh();
        refreshes = refreshes.wrapping_add(1);

        if refreshes % REPORT_EVERY == 0 {
            let elapsed_ms = window_start.elapsed().as_millis().max(1);
            debug!(
                "{} refreshes in {} ms (last pattern {:08b})",
                REPORT_EVERY,
                elapsed_ms,
                driver.port().last()
            );
            window_start = Instant::now();
        }

        yield_now().await;
    }
}
