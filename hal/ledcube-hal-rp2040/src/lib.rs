//! RP2040-specific HAL for the ledcube driver
//!
//! This crate provides RP2040 implementations of the shared `ledcube-hal`
//! traits, plus the glue needed for config-driven pin setup:
//!
//! - Pin string parsing (`gpio11`, `!gpio12`)
//! - Dynamic pin allocation by number
//! - A GPIO-backed parallel output port (implements `ledcube_hal::HardwarePort`)

#![no_std]

pub mod gpio;
pub mod pins;
pub mod port;

// Re-export shared traits from ledcube-hal for convenience
pub use ledcube_hal::{HardwarePort, PulseDelay};
pub use pins::{PinBank, PinError};
pub use port::GpioPort;
