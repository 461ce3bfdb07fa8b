//! The in-order five-stage pipeline.
//!
//! This module contains the pipeline infrastructure:
//! 1. **Engine:** The latch-advancing state machine and redirect policy.
//! 2. **Latches:** Inter-stage buffers (IF/ID, ID/EX, EX/MEM, MEM/WB).
//! 3. **Signals:** Control signals generated during decode.
//! 4. **Hazards:** Forwarding decisions and the load-use stall.
//! 5. **Stages:** The five stage functions.

/// The pipeline state machine.
pub mod engine;

/// Data hazard detection and forwarding decisions.
pub mod hazards;

/// Inter-stage pipeline latches.
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// The five pipeline stages.
pub mod stages;

pub use engine::Pipeline;
