//! Constant-direction static predictors.
//!
//! The simplest possible policies: predict every conditional branch the
//! same way. Not-taken matches straight-line speculative fetch; taken is
//! mostly useful as a baseline for loops.

use super::BranchPredictor;

/// Static predictor returning a fixed direction.
pub struct StaticPredictor {
    taken: bool,
}

impl StaticPredictor {
    /// Policy that predicts every branch not taken.
    pub fn not_taken() -> Self {
        Self { taken: false }
    }

    /// Policy that predicts every branch taken.
    pub fn taken() -> Self {
        Self { taken: true }
    }
}

impl BranchPredictor for StaticPredictor {
    fn predict(&self, _pc: u32, _target: u32) -> bool {
        self.taken
    }

    /// Static policies keep no history.
    fn update(&mut self, _pc: u32, _taken: bool, _target: u32) {}

    fn reset(&mut self) {}
}
