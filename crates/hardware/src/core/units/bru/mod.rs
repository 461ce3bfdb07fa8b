//! Branch prediction unit (BRU) implementations.
//!
//! This module contains the branch prediction algorithms: the static
//! policies (not-taken, taken, BTFN), the bimodal one- and two-bit tables,
//! gshare, the two-level local-history predictor, and the tournament hybrid
//! that arbitrates between gshare and local-history.
//!
//! Direction state and accounting are split: each algorithm implements
//! [`BranchPredictor`] (pure `predict`, training `update`), while
//! [`PredictorUnit`] wraps one algorithm and maintains the accuracy
//! statistics. The unit recomputes the prediction inside `update` rather
//! than caching it across calls, so `predict` stays a pure query.

pub use self::branch_predictor::BranchPredictor;

/// Branch predictor trait.
pub mod branch_predictor;

/// Bimodal one-bit and two-bit table predictors.
pub mod bimodal;

/// Backward-taken / forward-not-taken static predictor.
pub mod btfn;

/// Global-history (gshare) predictor.
pub mod gshare;

/// Two-level local-history predictor.
pub mod local;

/// Constant-direction static predictors.
pub mod static_bp;

/// Tournament hybrid predictor.
pub mod tournament;

use serde::Serialize;

use self::{
    bimodal::{OneBitPredictor, TwoBitPredictor},
    btfn::BtfnPredictor,
    gshare::GsharePredictor,
    local::LocalHistoryPredictor,
    static_bp::StaticPredictor,
    tournament::TournamentPredictor,
};
use crate::config::{PredictorConfig, PredictorKind};

/// True when a 2-bit saturating counter predicts taken (WT or ST).
#[inline]
pub(crate) fn counter_taken(counter: u8) -> bool {
    counter >= 2
}

/// Trains a 2-bit saturating counter toward the observed outcome.
///
/// States: 0 = strongly not-taken, 1 = weakly not-taken, 2 = weakly taken,
/// 3 = strongly taken. Saturates at both ends.
#[inline]
pub(crate) fn train_counter(counter: &mut u8, taken: bool) {
    if taken {
        if *counter < 3 {
            *counter += 1;
        }
    } else if *counter > 0 {
        *counter -= 1;
    }
}

/// Prediction accuracy counters.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct PredictionStats {
    /// Branches observed in `update`.
    pub total: u64,
    /// Predictions that matched the actual outcome.
    pub correct: u64,
    /// Predictions that missed.
    pub mispredicted: u64,
}

impl PredictionStats {
    /// Fraction of correct predictions; 0.0 before any branch resolves.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Enum wrapper for static dispatch of the direction predictors.
/// This avoids vtable lookups in the fetch loop.
pub enum DirectionPredictor {
    /// Constant direction (not-taken or taken).
    Static(StaticPredictor),
    /// Backward taken, forward not taken.
    Btfn(BtfnPredictor),
    /// One-bit last-outcome table.
    OneBit(OneBitPredictor),
    /// Two-bit saturating counter table.
    TwoBit(TwoBitPredictor),
    /// Global history XOR PC.
    Gshare(GsharePredictor),
    /// Two-level local history.
    Local(LocalHistoryPredictor),
    /// Gshare/local hybrid with a chooser.
    Tournament(TournamentPredictor),
}

impl BranchPredictor for DirectionPredictor {
    #[inline(always)]
    fn predict(&self, pc: u32, target: u32) -> bool {
        match self {
            Self::Static(bp) => bp.predict(pc, target),
            Self::Btfn(bp) => bp.predict(pc, target),
            Self::OneBit(bp) => bp.predict(pc, target),
            Self::TwoBit(bp) => bp.predict(pc, target),
            Self::Gshare(bp) => bp.predict(pc, target),
            Self::Local(bp) => bp.predict(pc, target),
            Self::Tournament(bp) => bp.predict(pc, target),
        }
    }

    #[inline(always)]
    fn update(&mut self, pc: u32, taken: bool, target: u32) {
        match self {
            Self::Static(bp) => bp.update(pc, taken, target),
            Self::Btfn(bp) => bp.update(pc, taken, target),
            Self::OneBit(bp) => bp.update(pc, taken, target),
            Self::TwoBit(bp) => bp.update(pc, taken, target),
            Self::Gshare(bp) => bp.update(pc, taken, target),
            Self::Local(bp) => bp.update(pc, taken, target),
            Self::Tournament(bp) => bp.update(pc, taken, target),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Static(bp) => bp.reset(),
            Self::Btfn(bp) => bp.reset(),
            Self::OneBit(bp) => bp.reset(),
            Self::TwoBit(bp) => bp.reset(),
            Self::Gshare(bp) => bp.reset(),
            Self::Local(bp) => bp.reset(),
            Self::Tournament(bp) => bp.reset(),
        }
    }
}

/// A direction predictor together with its accuracy accounting.
///
/// The pipeline queries [`PredictorUnit::predict`] at fetch and calls
/// [`PredictorUnit::update`] once per resolved conditional branch at
/// execute. `update` recomputes what `predict` returns for that PC and
/// scores it against the actual outcome before training the predictor.
pub struct PredictorUnit {
    pred: DirectionPredictor,
    stats: PredictionStats,
}

impl PredictorUnit {
    /// Builds the predictor variant selected by the configuration.
    pub fn from_config(config: &PredictorConfig) -> Self {
        let pred = match config.kind {
            PredictorKind::StaticNotTaken => {
                DirectionPredictor::Static(StaticPredictor::not_taken())
            }
            PredictorKind::StaticTaken => DirectionPredictor::Static(StaticPredictor::taken()),
            PredictorKind::Btfn => DirectionPredictor::Btfn(BtfnPredictor::new()),
            PredictorKind::Bimodal1Bit => {
                DirectionPredictor::OneBit(OneBitPredictor::new(config.table_bits))
            }
            PredictorKind::Bimodal2Bit => {
                DirectionPredictor::TwoBit(TwoBitPredictor::new(config.table_bits))
            }
            PredictorKind::Gshare => DirectionPredictor::Gshare(GsharePredictor::new(
                config.table_bits,
                config.history_bits,
            )),
            PredictorKind::LocalHistory => DirectionPredictor::Local(LocalHistoryPredictor::new(
                config.local_table_bits,
                config.local_pattern_bits,
            )),
            PredictorKind::Tournament => {
                DirectionPredictor::Tournament(TournamentPredictor::new(config))
            }
        };
        Self {
            pred,
            stats: PredictionStats::default(),
        }
    }

    /// Predicts the direction of the branch at `pc` whose taken-target is
    /// `target`. Pure query; no state changes.
    #[inline]
    pub fn predict(&self, pc: u32, target: u32) -> bool {
        self.pred.predict(pc, target)
    }

    /// Scores and trains the predictor with a resolved branch outcome.
    #[inline]
    pub fn update(&mut self, pc: u32, taken: bool, target: u32) {
        let predicted = self.pred.predict(pc, target);
        self.stats.total += 1;
        if predicted == taken {
            self.stats.correct += 1;
        } else {
            self.stats.mispredicted += 1;
        }
        self.pred.update(pc, taken, target);
    }

    /// Clears all direction state and accuracy counters.
    pub fn reset(&mut self) {
        self.pred.reset();
        self.stats = PredictionStats::default();
    }

    /// Snapshot of the accuracy counters.
    pub fn stats(&self) -> PredictionStats {
        self.stats
    }
}
