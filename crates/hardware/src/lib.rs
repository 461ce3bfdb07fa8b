//! Cycle-accurate MIPS-I pipeline simulator library.
//!
//! This crate implements a deterministic simulator for a 32-bit MIPS-I
//! style integer ISA with the following:
//! 1. **ISA:** Decoding, capability flags, and disassembly for the integer
//!    subset (`isa`).
//! 2. **Core:** Register file, ALU, branch predictor family, and the
//!    five-stage in-order pipeline with forwarding, stalling, and flushing
//!    (`core`).
//! 3. **Memory:** Flat byte-addressable big-endian main memory (`mem`).
//! 4. **Simulation:** The `Simulator` front door, program loading,
//!    configuration, and statistics (`sim`, `config`, `stats`).
//!
//! The pipelined path and the single-cycle interpreter path share decode,
//! ALU, branch, and memory semantics, and produce identical final state for
//! hazard-free programs.

/// Common types and constants.
pub mod common;
/// Simulator configuration.
pub mod config;
/// CPU core: architectural state, pipeline, functional units.
pub mod core;
/// Instruction set: decode, disassembly, encodings, ABI.
pub mod isa;
/// Byte-addressable big-endian main memory.
pub mod mem;
/// Simulation: the top-level simulator and program loading.
pub mod sim;
/// Statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Engine error surfaced when a program image is rejected.
pub use crate::common::LoadError;
/// Main CPU state type.
pub use crate::core::Cpu;
/// Top-level simulator; owns the CPU and the pipeline side by side.
pub use crate::sim::Simulator;
/// Disassembles one machine word.
pub use crate::isa::disasm::disassemble;
