//! Cube driver
//!
//! Owns the framebuffer together with the port and timing hook, so the
//! board code only has to fill it and call [`CubeDriver::refresh`] in a loop.

use ledcube_hal::{HardwarePort, NoDelay, PulseDelay};

use crate::config::ScanConfig;
use crate::framebuffer::{Framebuffer, FramebufferError};
use crate::scanner::RefreshScanner;

/// Framebuffer plus the hardware it is scanned out to
///
/// # Preconditions
///
/// The port pins must be configured as outputs before the first
/// [`refresh`](Self::refresh). The driver never touches pin direction.
///
/// The LEDs only stay lit while they are being driven, so the caller must
/// keep calling `refresh` fast enough to avoid flicker.
pub struct CubeDriver<P, D = NoDelay> {
    framebuffer: Framebuffer,
    scanner: RefreshScanner,
    config: ScanConfig,
    port: P,
    delay: D,
}

impl<P: HardwarePort> CubeDriver<P, NoDelay> {
    /// Create a driver that writes pulses back to back
    pub fn new(port: P, config: ScanConfig) -> Self {
        Self::with_delay(port, NoDelay, config)
    }
}

impl<P: HardwarePort, D: PulseDelay> CubeDriver<P, D> {
    /// Create a driver with a pulse timing hook
    pub fn with_delay(port: P, delay: D, config: ScanConfig) -> Self {
        Self {
            framebuffer: Framebuffer::new(),
            scanner: RefreshScanner::new(&config),
            config,
            port,
            delay,
        }
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: u8) {
        self.framebuffer.fill(value);
    }

    /// Set every cell to the low 8 bits of `value`
    pub fn fill_wide(&mut self, value: u32) {
        self.framebuffer.fill_wide(value);
    }

    /// Write one cell
    pub fn set_cell(&mut self, row: usize, col: usize, value: u8) -> Result<(), FramebufferError> {
        self.framebuffer.set(row, col, value)
    }

    /// Read one cell
    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        self.framebuffer.get(row, col)
    }

    /// Get the framebuffer
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Get mutable access to the framebuffer
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    /// Send the framebuffer to the port once
    pub fn refresh(&mut self) {
        self.scanner
            .refresh(&self.framebuffer, &mut self.port, &mut self.delay);
    }

    /// Get the scan configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Get the scanner
    pub fn scanner(&self) -> &RefreshScanner {
        &self.scanner
    }

    /// Get the port
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Tear down the driver and hand back the hardware
    pub fn release(self) -> (P, D) {
        (self.port, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PulsePattern;
    use crate::testing::{decode_cells, CountingDelay, RecordingPort};

    #[test]
    fn test_fill_then_refresh() {
        let mut driver = CubeDriver::new(RecordingPort::new(), ScanConfig::default());
        driver.fill(0xFF);
        driver.refresh();

        let writes = &driver.port().writes;
        assert_eq!(writes.len(), 8192);
        assert!(writes.chunks(2).all(|p| p == [0b00, 0b11]));
    }

    #[test]
    fn test_fill_reads_back() {
        let mut driver = CubeDriver::new(RecordingPort::new(), ScanConfig::default());
        driver.fill(0x3C);

        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(driver.cell(row, col), Some(0x3C));
            }
        }
        assert!(driver.port().writes.is_empty());
    }

    #[test]
    fn test_set_cell_scenario() {
        let mut driver = CubeDriver::new(RecordingPort::new(), ScanConfig::default());
        driver.set_cell(3, 5, 0b1011_0000).unwrap();
        driver.refresh();

        let cells = decode_cells(&driver.port().writes, &PulsePattern::DEFAULT);
        assert_eq!(cells.len(), 512);
        assert_eq!(cells.iter().filter(|v| **v == 0b1011_0000).count(), 8);
        assert_eq!(cells.iter().filter(|v| **v == 0).count(), 504);
    }

    #[test]
    fn test_set_cell_out_of_range() {
        let mut driver = CubeDriver::new(RecordingPort::new(), ScanConfig::default());
        assert_eq!(
            driver.set_cell(8, 0, 1),
            Err(FramebufferError::OutOfBounds { row: 8, col: 0 })
        );
    }

    #[test]
    fn test_consecutive_refreshes_match() {
        let mut driver = CubeDriver::new(RecordingPort::new(), ScanConfig::default());
        driver.framebuffer_mut()[(7, 0)] = 0x81;
        driver.refresh();
        driver.refresh();

        let (port, _) = driver.release();
        let (first, second) = port.writes.split_at(8192);
        assert_eq!(first, second);
    }

    #[test]
    fn test_wide_fill_truncates() {
        let mut wide = CubeDriver::new(RecordingPort::new(), ScanConfig::default());
        let mut narrow = CubeDriver::new(RecordingPort::new(), ScanConfig::default());
        wide.fill_wide(0x1FF);
        narrow.fill(0xFF);
        wide.refresh();
        narrow.refresh();

        assert_eq!(wide.framebuffer(), narrow.framebuffer());
        assert_eq!(wide.port().writes, narrow.port().writes);
    }

    #[test]
    fn test_delay_hook_owned_by_driver() {
        let config = ScanConfig::new(1, PulsePattern::DEFAULT);
        let mut driver = CubeDriver::with_delay(RecordingPort::new(), CountingDelay::default(), config);
        driver.refresh();

        assert_eq!(driver.config().scan_repeat, 1);
        assert_eq!(driver.scanner().serializations_per_refresh(), 64);
        let (port, delay) = driver.release();
        assert_eq!(port.writes.len(), 64 * 16);
        assert_eq!(delay.resets, 64 * 8);
        assert_eq!(delay.bits, 64 * 8);
    }
}
