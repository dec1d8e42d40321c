//! Pulse timing hooks
//!
//! The bit encoding itself carries no timing. Real shift registers have
//! setup/hold requirements, so the serializer calls a [`PulseDelay`] after
//! each port write and the board supplies the actual wait.

use embedded_hal::delay::DelayNs;

/// Timing hook invoked around every serialized bit
pub trait PulseDelay {
    /// Called after the reset pattern has been written
    fn after_reset(&mut self) {}

    /// Called after the bit-0/bit-1 pattern has been written
    fn after_bit(&mut self) {}
}

impl<T: PulseDelay + ?Sized> PulseDelay for &mut T {
    fn after_reset(&mut self) {
        T::after_reset(self);
    }

    fn after_bit(&mut self) {
        T::after_bit(self);
    }
}

/// Zero-delay hook: pulses are written back to back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoDelay;

impl PulseDelay for NoDelay {}

/// Pulse widths in nanoseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTiming {
    /// Hold time after the reset pattern
    pub reset_ns: u32,
    /// Hold time after the bit pattern
    pub bit_ns: u32,
}

/// Adapts any `embedded-hal` delay provider into a [`PulseDelay`]
///
/// A zero width skips the call to the delay provider entirely.
pub struct DelayNsHook<D> {
    delay: D,
    timing: PulseTiming,
}

impl<D: DelayNs> DelayNsHook<D> {
    /// Create a new hook with the given pulse widths
    pub fn new(delay: D, timing: PulseTiming) -> Self {
        Self { delay, timing }
    }

    /// Get the configured pulse widths
    pub fn timing(&self) -> PulseTiming {
        self.timing
    }

    /// Release the underlying delay provider
    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> PulseDelay for DelayNsHook<D> {
    fn after_reset(&mut self) {
        if self.timing.reset_ns > 0 {
            self.delay.delay_ns(self.timing.reset_ns);
        }
    }

    fn after_bit(&mut self) {
        if self.timing.bit_ns > 0 {
            self.delay.delay_ns(self.timing.bit_ns);
        }
    }
}
