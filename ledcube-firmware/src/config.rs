//! Firmware configuration
//!
//! Values come from `cube.toml`, validated and turned into constants by
//! `build.rs`. This module turns them into driver types.

use ledcube_core::{ConfigError, PulsePattern, ScanConfig};
use ledcube_hal::PulseTiming;
use ledcube_hal_rp2040::gpio::parse_pin_string;
use ledcube_hal_rp2040::{GpioPort, PinBank, PinError};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/cube_config.rs"));
}

pub use generated::*;

/// Errors while building the output port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortSetupError {
    /// Pin string could not be parsed (index into `PORT_PINS`)
    BadPinString(usize),
    /// Pin could not be taken from the bank
    Pin(PinError),
}

impl From<PinError> for PortSetupError {
    fn from(e: PinError) -> Self {
        Self::Pin(e)
    }
}

/// Build the scan configuration
pub fn scan_config() -> Result<ScanConfig, ConfigError> {
    let pattern = PulsePattern::new(PULSE_RESET, PULSE_ZERO, PULSE_ONE)?;
    Ok(ScanConfig::new(SCAN_REPEAT, pattern))
}

/// Pulse hold times
pub fn pulse_timing() -> PulseTiming {
    PulseTiming {
        reset_ns: RESET_HOLD_NS,
        bit_ns: BIT_HOLD_NS,
    }
}

/// Take the configured pins and assemble the output port
///
/// Every line is made an output and driven to logical low before this
/// returns, which is the precondition the driver expects.
pub fn build_port(bank: &mut PinBank) -> Result<GpioPort<'static>, PortSetupError> {
    let mut port = GpioPort::new();

    for (index, spec) in PORT_PINS.iter().enumerate() {
        let (num, inverted) =
            parse_pin_string(spec).ok_or(PortSetupError::BadPinString(index))?;
        let pin = bank.take(num)?;
        port.add_line(pin, inverted)?;
    }

    Ok(port)
}
