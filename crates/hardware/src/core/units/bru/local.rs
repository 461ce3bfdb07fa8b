//! Two-level local-history branch predictor.
//!
//! The first level records, per branch, the pattern of its own recent
//! outcomes; the second level maps each pattern to a 2-bit saturating
//! counter. Branches with periodic behavior (alternating, every-Nth-taken)
//! become predictable once their pattern fits in the history length.

use super::{BranchPredictor, counter_taken, train_counter};

/// Local-history predictor.
pub struct LocalHistoryPredictor {
    /// Per-branch history patterns, indexed by word-aligned PC.
    history_table: Vec<u16>,
    /// History table index mask.
    history_mask: usize,
    /// Pattern history table of 2-bit counters, indexed by local pattern.
    pht: Vec<u8>,
    /// Pattern mask (`2^pattern_bits - 1`).
    pattern_mask: u16,
}

impl LocalHistoryPredictor {
    /// Creates a predictor with `2^table_bits` local histories of
    /// `pattern_bits` bits and a `2^pattern_bits`-entry counter table.
    pub fn new(table_bits: usize, pattern_bits: usize) -> Self {
        let table_size = 1usize << table_bits;
        let pattern_size = 1usize << pattern_bits;
        Self {
            history_table: vec![0; table_size],
            history_mask: table_size - 1,
            pht: vec![1; pattern_size],
            pattern_mask: (pattern_size - 1) as u16,
        }
    }

    #[inline]
    fn history_index(&self, pc: u32) -> usize {
        (pc as usize >> 2) & self.history_mask
    }
}

impl BranchPredictor for LocalHistoryPredictor {
    fn predict(&self, pc: u32, _target: u32) -> bool {
        let pattern = self.history_table[self.history_index(pc)] & self.pattern_mask;
        counter_taken(self.pht[pattern as usize])
    }

    /// Trains the counter selected by the current pattern, then shifts the
    /// outcome into this branch's history.
    fn update(&mut self, pc: u32, taken: bool, _target: u32) {
        let idx = self.history_index(pc);
        let pattern = self.history_table[idx] & self.pattern_mask;
        train_counter(&mut self.pht[pattern as usize], taken);
        self.history_table[idx] = ((pattern << 1) | u16::from(taken)) & self.pattern_mask;
    }

    fn reset(&mut self) {
        self.history_table.fill(0);
        self.pht.fill(1);
    }
}
