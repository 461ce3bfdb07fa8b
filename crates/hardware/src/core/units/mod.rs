//! Functional units consumed by the pipeline stages.

/// Arithmetic logic unit.
pub mod alu;
/// Branch prediction unit.
pub mod bru;
