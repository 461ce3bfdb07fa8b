//! Tournament branch predictor.
//!
//! A hybrid that owns one gshare predictor and one local-history predictor
//! and arbitrates between them with a table of 2-bit chooser counters
//! indexed by the branch PC. The chooser trains only when exactly one of
//! the two components was right, drifting toward whichever wins more often
//! for that branch.

use super::gshare::GsharePredictor;
use super::local::LocalHistoryPredictor;
use super::{BranchPredictor, counter_taken, train_counter};
use crate::config::PredictorConfig;

/// Tournament predictor composing gshare and local-history components.
pub struct TournamentPredictor {
    global: GsharePredictor,
    local: LocalHistoryPredictor,
    /// Chooser counters: taken-state selects the global component.
    chooser: Vec<u8>,
    chooser_mask: usize,
}

impl TournamentPredictor {
    /// Creates a tournament predictor from the configured component sizes.
    pub fn new(config: &PredictorConfig) -> Self {
        let chooser_size = 1usize << config.chooser_bits;
        Self {
            global: GsharePredictor::new(config.table_bits, config.history_bits),
            local: LocalHistoryPredictor::new(config.local_table_bits, config.local_pattern_bits),
            chooser: vec![1; chooser_size],
            chooser_mask: chooser_size - 1,
        }
    }

    #[inline]
    fn chooser_index(&self, pc: u32) -> usize {
        (pc as usize >> 2) & self.chooser_mask
    }
}

impl BranchPredictor for TournamentPredictor {
    fn predict(&self, pc: u32, target: u32) -> bool {
        if counter_taken(self.chooser[self.chooser_index(pc)]) {
            self.global.predict(pc, target)
        } else {
            self.local.predict(pc, target)
        }
    }

    /// Trains the chooser toward whichever component was right, then trains
    /// both components.
    fn update(&mut self, pc: u32, taken: bool, target: u32) {
        let global_pred = self.global.predict(pc, target);
        let local_pred = self.local.predict(pc, target);

        let global_correct = global_pred == taken;
        let local_correct = local_pred == taken;

        if global_correct != local_correct {
            let idx = self.chooser_index(pc);
            train_counter(&mut self.chooser[idx], global_correct);
        }

        self.global.update(pc, taken, target);
        self.local.update(pc, taken, target);
    }

    fn reset(&mut self) {
        self.global.reset();
        self.local.reset();
        self.chooser.fill(1);
    }
}
