//! Scan configuration
//!
//! The pulse patterns are the wire contract with the shift-register chain.
//! Defaults reproduce the stock cube wiring: port bit 0 is the SS/latch
//! line and port bit 1 is SCLK.

/// Default number of times each column is re-sent during one refresh
pub const SCAN_REPEAT: u8 = 8;

/// Errors in scan configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The bit-0 and bit-1 patterns are the same, so bits are indistinguishable
    IndistinctBitPatterns,
}

/// Port patterns used to serialize one bit
///
/// Every bit is sent as a reset write followed by either the bit-0 or the
/// bit-1 pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulsePattern {
    reset: u8,
    zero: u8,
    one: u8,
}

impl PulsePattern {
    /// Stock wiring: reset all low, bit-0 raises SS, bit-1 raises SS and SCLK
    pub const DEFAULT: Self = Self {
        reset: 0b0000_0000,
        zero: 0b0000_0001,
        one: 0b0000_0011,
    };

    /// Create a pattern set
    ///
    /// Returns `Err(ConfigError::IndistinctBitPatterns)` if `zero == one`.
    pub const fn new(reset: u8, zero: u8, one: u8) -> Result<Self, ConfigError> {
        if zero == one {
            return Err(ConfigError::IndistinctBitPatterns);
        }
        Ok(Self { reset, zero, one })
    }

    /// Pattern written before every bit
    pub const fn reset(&self) -> u8 {
        self.reset
    }

    /// Pattern for a 0 bit
    pub const fn zero(&self) -> u8 {
        self.zero
    }

    /// Pattern for a 1 bit
    pub const fn one(&self) -> u8 {
        self.one
    }

    /// Pattern for the given bit value
    pub const fn for_bit(&self, bit: bool) -> u8 {
        if bit {
            self.one
        } else {
            self.zero
        }
    }
}

impl Default for PulsePattern {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Refresh scan configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanConfig {
    /// How many times each column is sent back to back per refresh
    ///
    /// No layer-select line changes between repeats; zero disables output.
    pub scan_repeat: u8,
    /// Bit encoding patterns
    pub pattern: PulsePattern,
}

impl ScanConfig {
    /// Create a scan configuration
    pub const fn new(scan_repeat: u8, pattern: PulsePattern) -> Self {
        Self {
            scan_repeat,
            pattern,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(SCAN_REPEAT, PulsePattern::DEFAULT)
    }
}
