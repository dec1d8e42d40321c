//! ledcube Hardware Abstraction Layer
//!
//! This crate defines the hardware boundary of the scan-out driver. Chip
//! HALs (RP2040, host mocks, etc.) implement these traits so the same driver
//! logic in `ledcube-core` runs everywhere.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  ledcube-core (framebuffer + scan-out)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ledcube-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ ledcube-hal-  │       │  test mocks   │
//! │    rp2040     │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`port::HardwarePort`] - Parallel output register
//! - [`delay::PulseDelay`] - Timing hook around each serialized pulse

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod port;

// Re-export key traits at crate root for convenience
pub use delay::{DelayNsHook, NoDelay, PulseDelay, PulseTiming};
pub use port::HardwarePort;
