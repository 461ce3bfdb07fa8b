//! Branch predictor interface.
//!
//! This module defines the trait every direction predictor implements.
//! `predict` must be a pure query: the engine consults it speculatively at
//! fetch and again, for scoring, inside the predictor unit's update path.

/// Trait for branch direction prediction algorithms.
pub trait BranchPredictor {
    /// Predicts whether the branch at `pc` will be taken.
    ///
    /// `target` is the branch's taken-target, already computed from the
    /// encoding; static policies such as BTFN use it, dynamic tables ignore
    /// it. Must not mutate any state.
    fn predict(&self, pc: u32, target: u32) -> bool;

    /// Trains the predictor with the actual outcome of a resolved branch.
    fn update(&mut self, pc: u32, taken: bool, target: u32);

    /// Clears all direction state back to the power-on values.
    fn reset(&mut self);
}
