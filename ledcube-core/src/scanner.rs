//! Refresh scan
//!
//! One refresh walks the framebuffer column by column. Each column is sent
//! `scan_repeat` times in a row, and within a pass the rows go top to bottom,
//! so the cell read for step `(i, k, j)` is `fb[(j, i)]`. Note this is the
//! transpose of the row-major order used by [`Framebuffer::iter`].
//!
//! ```text
//! for i in 0..COLS
//!   for k in 0..scan_repeat
//!     for j in 0..ROWS
//!       emit(fb[(j, i)])
//! ```
//!
//! The scan never branches on framebuffer contents, so every refresh with
//! the same configuration produces the same number of writes.

use ledcube_hal::{HardwarePort, PulseDelay};

use crate::config::ScanConfig;
use crate::framebuffer::{Framebuffer, COLS, ROWS};
use crate::serializer::{BitSerializer, CELL_BITS};

/// Drives a full framebuffer through a [`BitSerializer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshScanner {
    serializer: BitSerializer,
    scan_repeat: u8,
}

impl RefreshScanner {
    /// Create a scanner from configuration
    pub const fn new(config: &ScanConfig) -> Self {
        Self {
            serializer: BitSerializer::new(config.pattern),
            scan_repeat: config.scan_repeat,
        }
    }

    /// Get the serializer in use
    pub const fn serializer(&self) -> &BitSerializer {
        &self.serializer
    }

    /// Number of passes per column
    pub const fn scan_repeat(&self) -> u8 {
        self.scan_repeat
    }

    /// Cells serialized per refresh
    pub const fn serializations_per_refresh(&self) -> usize {
        COLS * self.scan_repeat as usize * ROWS
    }

    /// Port writes per refresh (reset plus bit write for every bit)
    pub const fn writes_per_refresh(&self) -> usize {
        self.serializations_per_refresh() * CELL_BITS * 2
    }

    /// Cell coordinates `(row, col)` in the order they are serialized
    pub fn scan_order(&self) -> impl Iterator<Item = (usize, usize)> {
        let repeat = usize::from(self.scan_repeat);
        (0..COLS).flat_map(move |i| (0..repeat).flat_map(move |_| (0..ROWS).map(move |j| (j, i))))
    }

    /// Send the whole framebuffer to the port once
    ///
    /// Blocks until all writes are done.
    pub fn refresh<P, D>(&self, framebuffer: &Framebuffer, port: &mut P, delay: &mut D)
    where
        P: HardwarePort + ?Sized,
        D: PulseDelay + ?Sized,
    {
        for (row, col) in self.scan_order() {
            self.serializer.emit(port, delay, framebuffer[(row, col)]);
        }
    }
}

impl Default for RefreshScanner {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}
