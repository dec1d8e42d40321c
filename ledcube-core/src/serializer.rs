//! Bit-serial cell encoder
//!
//! A cell is sent as [`CELL_BITS`] pulses, least significant bit first.
//! Each pulse is a reset write followed by the bit-0 or bit-1 pattern.

use ledcube_hal::{HardwarePort, PulseDelay};

use crate::config::PulsePattern;

/// Bits serialized per cell
pub const CELL_BITS: usize = 8;

/// Keep only the low [`CELL_BITS`] bits of a value
///
/// Wider intensities are truncated, never rejected.
pub const fn truncate_cell(value: u32) -> u8 {
    (value & 0xFF) as u8
}

/// Encodes cell values into port writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitSerializer {
    pattern: PulsePattern,
}

impl BitSerializer {
    /// Create a serializer using the given patterns
    pub const fn new(pattern: PulsePattern) -> Self {
        Self { pattern }
    }

    /// Get the patterns in use
    pub const fn pattern(&self) -> PulsePattern {
        self.pattern
    }

    /// Send one cell value to the port
    ///
    /// Always performs exactly `2 * CELL_BITS` writes.
    pub fn emit<P, D>(&self, port: &mut P, delay: &mut D, value: u8)
    where
        P: HardwarePort + ?Sized,
        D: PulseDelay + ?Sized,
    {
        let mut remaining = value;
        for _ in 0..CELL_BITS {
            port.write(self.pattern.reset());
            delay.after_reset();
            port.write(self.pattern.for_bit(remaining & 1 == 1));
            delay.after_bit();
            remaining >>= 1;
        }
    }

    /// Send a wider value, discarding everything above bit 7
    pub fn emit_wide<P, D>(&self, port: &mut P, delay: &mut D, value: u32)
    where
        P: HardwarePort + ?Sized,
        D: PulseDelay + ?Sized,
    {
        self.emit(port, delay, truncate_cell(value));
    }
}

impl Default for BitSerializer {
    fn default() -> Self {
        Self::new(PulsePattern::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{decode_bits, CountingDelay, RecordingPort};
    use ledcube_hal::NoDelay;
    use proptest::prelude::*;

    #[test]
    fn test_emits_eight_pulse_pairs() {
        let serializer = BitSerializer::default();
        let mut port = RecordingPort::new();

        serializer.emit(&mut port, &mut NoDelay, 0x5A);

        assert_eq!(port.writes.len(), 2 * CELL_BITS);
        for pair in port.writes.chunks(2) {
            assert_eq!(pair[0], PulsePattern::DEFAULT.reset());
        }
    }

    #[test]
    fn test_lsb_first() {
        let serializer = BitSerializer::default();
        let mut port = RecordingPort::new();

        serializer.emit(&mut port, &mut NoDelay, 0b1011_0000);

        let bits = decode_bits(&port.writes, &PulsePattern::DEFAULT);
        assert_eq!(bits, [false, false, false, false, true, true, false, true]);
    }

    #[test]
    fn test_zero_and_ones() {
        let serializer = BitSerializer::default();

        let mut port = RecordingPort::new();
        serializer.emit(&mut port, &mut NoDelay, 0x00);
        assert!(port.writes.chunks(2).all(|p| p == [0b00, 0b01]));

        let mut port = RecordingPort::new();
        serializer.emit(&mut port, &mut NoDelay, 0xFF);
        assert!(port.writes.chunks(2).all(|p| p == [0b00, 0b11]));
    }

    #[test]
    fn test_truncation_law() {
        let serializer = BitSerializer::default();
        let mut narrow = RecordingPort::new();
        let mut wide = RecordingPort::new();

        serializer.emit_wide(&mut narrow, &mut NoDelay, 0xFF);
        serializer.emit_wide(&mut wide, &mut NoDelay, 0x1FF);

        assert_eq!(narrow.writes, wide.writes);
    }

    #[test]
    fn test_delay_hook_called_per_pulse() {
        let serializer = BitSerializer::default();
        let mut port = RecordingPort::new();
        let mut delay = CountingDelay::default();

        serializer.emit(&mut port, &mut delay, 0x42);

        assert_eq!(delay.resets, CELL_BITS);
        assert_eq!(delay.bits, CELL_BITS);
    }

    #[test]
    fn test_custom_patterns() {
        let pattern = PulsePattern::new(0b1000_0000, 0b0000_0100, 0b0000_1100).unwrap();
        let serializer = BitSerializer::new(pattern);
        let mut port = RecordingPort::new();

        serializer.emit(&mut port, &mut NoDelay, 0b0000_0001);

        assert_eq!(&port.writes[..4], &[0b1000_0000, 0b0000_1100, 0b1000_0000, 0b0000_0100]);
    }

    proptest! {
        #[test]
        fn prop_decodes_back_to_value(value in any::<u8>()) {
            let serializer = BitSerializer::default();
            let mut port = RecordingPort::new();
            serializer.emit(&mut port, &mut NoDelay, value);

            let decoded = decode_bits(&port.writes, &PulsePattern::DEFAULT)
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, bit)| acc | ((*bit as u8) << i));
            prop_assert_eq!(decoded, value);
        }

        #[test]
        fn prop_high_bits_ignored(value in any::<u32>()) {
            let serializer = BitSerializer::default();
            let mut wide = RecordingPort::new();
            let mut narrow = RecordingPort::new();

            serializer.emit_wide(&mut wide, &mut NoDelay, value);
            serializer.emit(&mut narrow, &mut NoDelay, (value & 0xFF) as u8);

            prop_assert_eq!(wide.writes, narrow.writes);
        }
    }
}
