//! Simulation: the top-level [`simulator::Simulator`] and program loading.

/// Program image parsing.
pub mod loader;
/// The top-level simulator.
pub mod simulator;

pub use simulator::{RunOutcome, RunResult, Simulator, StepResult};
