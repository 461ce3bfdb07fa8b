//! Gshare branch predictor.
//!
//! Gshare correlates global branch history with the program counter using
//! an XOR hash, so the same branch is predicted differently in different
//! execution contexts. A shared table of 2-bit saturating counters holds
//! the per-context direction.

use super::{BranchPredictor, counter_taken, train_counter};

/// Gshare predictor.
pub struct GsharePredictor {
    /// Global history register of the most recent outcomes.
    ghr: u32,
    /// Pattern history table of 2-bit saturating counters.
    pht: Vec<u8>,
    /// Table index mask (`2^table_bits - 1`).
    table_mask: u32,
    /// History mask applied to the GHR on update.
    history_mask: u32,
    /// Mask limiting how much history folds into the index.
    index_history_mask: u32,
}

impl GsharePredictor {
    /// Creates a predictor with `2^table_bits` counters and `history_bits`
    /// of global history.
    pub fn new(table_bits: usize, history_bits: usize) -> Self {
        let size = 1usize << table_bits;
        let index_bits = history_bits.min(table_bits);
        Self {
            ghr: 0,
            pht: vec![1; size],
            table_mask: (size - 1) as u32,
            history_mask: ((1u64 << history_bits) - 1) as u32,
            index_history_mask: ((1u64 << index_bits) - 1) as u32,
        }
    }

    /// Index: word-aligned PC XOR the folded global history.
    #[inline]
    fn index(&self, pc: u32) -> usize {
        let pc_part = (pc >> 2) & self.table_mask;
        let gh_part = self.ghr & self.index_history_mask;
        (pc_part ^ gh_part) as usize
    }
}

impl BranchPredictor for GsharePredictor {
    fn predict(&self, pc: u32, _target: u32) -> bool {
        counter_taken(self.pht[self.index(pc)])
    }

    /// Trains the indexed counter, then shifts the outcome into the GHR.
    fn update(&mut self, pc: u32, taken: bool, _target: u32) {
        let idx = self.index(pc);
        train_counter(&mut self.pht[idx], taken);
        self.ghr = ((self.ghr << 1) | u32::from(taken)) & self.history_mask;
    }

    fn reset(&mut self) {
        self.ghr = 0;
        self.pht.fill(1);
    }
}
