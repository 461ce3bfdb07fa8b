//! Bimodal table predictors.
//!
//! Both variants index a direction table with the word-aligned PC. The
//! one-bit table simply remembers the last outcome per entry; the two-bit
//! table runs the classic four-state saturating counter FSM, which needs
//! two consecutive misses before it flips direction.

use super::{BranchPredictor, counter_taken, train_counter};

/// One-bit last-outcome predictor.
pub struct OneBitPredictor {
    table: Vec<bool>,
    mask: usize,
}

impl OneBitPredictor {
    /// Creates a predictor with `2^table_bits` entries, all not-taken.
    pub fn new(table_bits: usize) -> Self {
        let size = 1 << table_bits;
        Self {
            table: vec![false; size],
            mask: size - 1,
        }
    }

    #[inline]
    fn index(&self, pc: u32) -> usize {
        (pc as usize >> 2) & self.mask
    }
}

impl BranchPredictor for OneBitPredictor {
    fn predict(&self, pc: u32, _target: u32) -> bool {
        self.table[self.index(pc)]
    }

    /// Remembers the observed outcome for this entry.
    fn update(&mut self, pc: u32, taken: bool, _target: u32) {
        let idx = self.index(pc);
        self.table[idx] = taken;
    }

    fn reset(&mut self) {
        self.table.fill(false);
    }
}

/// Two-bit saturating counter predictor.
///
/// Entries start weakly not-taken, so a single taken outcome moves an entry
/// to weakly taken without yet committing to the direction.
pub struct TwoBitPredictor {
    table: Vec<u8>,
    mask: usize,
}

impl TwoBitPredictor {
    /// Creates a predictor with `2^table_bits` counters, all weakly
    /// not-taken.
    pub fn new(table_bits: usize) -> Self {
        let size = 1 << table_bits;
        Self {
            table: vec![1; size],
            mask: size - 1,
        }
    }

    #[inline]
    fn index(&self, pc: u32) -> usize {
        (pc as usize >> 2) & self.mask
    }
}

impl BranchPredictor for TwoBitPredictor {
    fn predict(&self, pc: u32, _target: u32) -> bool {
        counter_taken(self.table[self.index(pc)])
    }

    /// Saturating increment on taken, decrement on not-taken.
    fn update(&mut self, pc: u32, taken: bool, _target: u32) {
        let idx = self.index(pc);
        train_counter(&mut self.table[idx], taken);
    }

    fn reset(&mut self) {
        self.table.fill(1);
    }
}
