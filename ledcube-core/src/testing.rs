//! Test doubles shared by the unit tests

use std::vec::Vec;

use ledcube_hal::{HardwarePort, PulseDelay};

use crate::config::PulsePattern;
use crate::serializer::CELL_BITS;

/// Port that records every write
#[derive(Default)]
pub struct RecordingPort {
    pub writes: Vec<u8>,
}

impl RecordingPort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HardwarePort for RecordingPort {
    fn write(&mut self, pattern: u8) {
        self.writes.push(pattern);
    }
}

/// Delay hook that counts invocations
#[derive(Default)]
pub struct CountingDelay {
    pub resets: usize,
    pub bits: usize,
}

impl PulseDelay for CountingDelay {
    fn after_reset(&mut self) {
        self.resets += 1;
    }

    fn after_bit(&mut self) {
        self.bits += 1;
    }
}

/// Turn reset/bit write pairs back into bit values
///
/// Panics if a pair does not start with the reset pattern or its second
/// write matches neither bit pattern.
pub fn decode_bits(writes: &[u8], pattern: &PulsePattern) -> Vec<bool> {
    assert_eq!(writes.len() % 2, 0, "odd number of writes");
    writes
        .chunks(2)
        .map(|pair| {
            assert_eq!(pair[0], pattern.reset(), "pulse without reset");
            if pair[1] == pattern.one() {
                true
            } else if pair[1] == pattern.zero() {
                false
            } else {
                panic!("unknown bit pattern {:#010b}", pair[1]);
            }
        })
        .collect()
}

/// Turn a full write stream back into one value per serialized cell
pub fn decode_cells(writes: &[u8], pattern: &PulsePattern) -> Vec<u8> {
    decode_bits(writes, pattern)
        .chunks(CELL_BITS)
        .map(|bits| {
            bits.iter()
                .enumerate()
                .fold(0u8, |acc, (i, bit)| acc | (u8::from(*bit) << i))
        })
        .collect()
}
