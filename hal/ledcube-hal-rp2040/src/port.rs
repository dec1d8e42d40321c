//! GPIO-backed parallel output port
//!
//! RP2040 has no 8-bit port register like the AVR `PORTB`, so the port is
//! assembled from individual output pins. Line N of the port mirrors bit N
//! of every pattern written.

use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;
use heapless::Vec;
use ledcube_hal::HardwarePort;

use crate::gpio::line_level;
use crate::pins::PinError;

/// Maximum number of lines (one per bit of a pattern)
pub const MAX_PORT_LINES: usize = 8;

struct PortLine<'d> {
    output: Output<'d>,
    inverted: bool,
}

/// Parallel output port built from GPIO pins
pub struct GpioPort<'d> {
    lines: Vec<PortLine<'d>, MAX_PORT_LINES>,
    last: u8,
}

impl Default for GpioPort<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'d> GpioPort<'d> {
    /// Create a port with no lines
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            last: 0,
        }
    }

    /// Append a line as the next bit of the port
    ///
    /// The pin is switched to output mode and driven to the logical low
    /// level immediately, so the port starts out all-zero. Returns the bit
    /// position assigned to the line.
    pub fn add_line(&mut self, pin: Peri<'d, AnyPin>, inverted: bool) -> Result<u8, PinError> {
        if self.lines.is_full() {
            return Err(PinError::PortFull);
        }
        let bit = self.lines.len() as u8;
        let output = Output::new(pin, Level::from(line_level(0, bit as usize, inverted)));
        self.lines
            .push(PortLine { output, inverted })
            .map_err(|_| PinError::PortFull)?;
        Ok(bit)
    }

    /// Number of lines in the port
    pub fn width(&self) -> usize {
        self.lines.len()
    }

    /// Last pattern written
    pub fn last(&self) -> u8 {
        self.last
    }
}

impl HardwarePort for GpioPort<'_> {
    fn write(&mut self, pattern: u8) {
        for (bit, line) in self.lines.iter_mut().enumerate() {
            line.output
                .set_level(Level::from(line_level(pattern, bit, line.inverted)));
        }
        self.last = pattern;
    }
}
