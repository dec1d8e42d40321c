//! Board-agnostic core logic for the LED cube scan-out driver
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - Framebuffer storage (fixed 8x8 grid of 8-bit intensities)
//! - Bit-serial encoding of a cell into port-write pulses
//! - The refresh scan that walks the framebuffer and drives the port
//! - Scan configuration (pulse patterns, repeat count)
//!
//! The only I/O boundary is [`ledcube_hal::HardwarePort`]. Pin direction
//! setup is the board's job and must happen before the first refresh.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod driver;
pub mod framebuffer;
pub mod scanner;
pub mod serializer;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, PulsePattern, ScanConfig, SCAN_REPEAT};
pub use driver::CubeDriver;
pub use framebuffer::{Framebuffer, FramebufferError, COLS, DECLARED_ROWS, ROWS};
pub use scanner::RefreshScanner;
pub use serializer::{truncate_cell, BitSerializer, CELL_BITS};
