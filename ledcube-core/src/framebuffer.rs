//! Framebuffer storage
//!
//! A fixed grid of 8-bit intensities indexed by `(row, col)`.

use core::ops::{Index, IndexMut};

use crate::serializer::truncate_cell;

/// Addressed rows
pub const ROWS: usize = 8;

/// Addressed columns
pub const COLS: usize = 8;

/// Row count the cube firmware historically declared
///
/// Only the first [`ROWS`] rows were ever addressed; the rest is inert
/// capacity and is not allocated here.
pub const DECLARED_ROWS: usize = 16;

/// Framebuffer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FramebufferError {
    /// Cell lies outside the addressed region
    OutOfBounds { row: usize, col: usize },
}

/// In-memory image of the display
///
/// Dimensions are fixed at [`ROWS`] x [`COLS`]. Indexing with
/// `fb[(row, col)]` panics on out-of-range coordinates; use [`Framebuffer::get`]
/// and [`Framebuffer::set`] for checked access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    cells: [[u8; COLS]; ROWS],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a framebuffer with every cell at zero
    pub const fn new() -> Self {
        Self {
            cells: [[0; COLS]; ROWS],
        }
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: u8) {
        for row in &mut self.cells {
            row.fill(value);
        }
    }

    /// Set every cell to the low 8 bits of `value`
    pub fn fill_wide(&mut self, value: u32) {
        self.fill(truncate_cell(value));
    }

    /// Set every cell to zero
    pub fn clear(&mut self) {
        self.fill(0);
    }

    /// Read a cell, or `None` if out of range
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Write a cell
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> Result<(), FramebufferError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(FramebufferError::OutOfBounds { row, col })?;
        *cell = value;
        Ok(())
    }

    /// Write the low 8 bits of `value` to a cell
    pub fn set_wide(&mut self, row: usize, col: usize, value: u32) -> Result<(), FramebufferError> {
        self.set(row, col, truncate_cell(value))
    }

    /// Number of addressed rows
    pub const fn rows(&self) -> usize {
        ROWS
    }

    /// Number of addressed columns
    pub const fn cols(&self) -> usize {
        COLS
    }

    /// Iterate `(row, col, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, value)| (row, col, *value))
        })
    }
}

impl Index<(usize, usize)> for Framebuffer {
    type Output = u8;

    fn index(&self, (row, col): (usize, usize)) -> &u8 {
        &self.cells[row][col]
    }
}

impl IndexMut<(usize, usize)> for Framebuffer {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut u8 {
        &mut self.cells[row][col]
    }
}
