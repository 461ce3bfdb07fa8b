//! The five pipeline stages.
//!
//! Each stage is a function from the previous cycle's latch to the next
//! cycle's. The engine calls them in reverse order (WB, MEM, EX, ID, IF)
//! within one tick so every stage observes the prior cycle's outputs, and
//! the register-file write in WB is visible to the read in ID of the same
//! cycle.

/// Instruction decode (ID) stage and control signal generation.
pub mod decode;
/// Execute (EX) stage: ALU, forwarding, branch resolution.
pub mod execute;
/// Instruction fetch (IF) stage and speculative next-PC selection.
pub mod fetch;
/// Memory access (MEM) stage.
pub mod memory;
/// Writeback (WB) stage and retirement.
pub mod writeback;
