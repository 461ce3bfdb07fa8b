//! Backward-taken / forward-not-taken static predictor.
//!
//! Loop closing branches jump backwards and are taken on every iteration
//! but the last, so predicting "backward means taken" captures most loop
//! behavior with no state at all.

use super::BranchPredictor;

/// BTFN predictor: taken exactly when the target address precedes the
/// branch.
pub struct BtfnPredictor;

impl BtfnPredictor {
    /// Creates the (stateless) predictor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for BtfnPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl BranchPredictor for BtfnPredictor {
    fn predict(&self, pc: u32, target: u32) -> bool {
        target < pc
    }

    /// BTFN keeps no history.
    fn update(&mut self, _pc: u32, _taken: bool, _target: u32) {}

    fn reset(&mut self) {}
}
