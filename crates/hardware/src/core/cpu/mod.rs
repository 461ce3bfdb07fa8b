//! CPU architectural state.
//!
//! This module defines the central `Cpu` structure, which holds all state
//! the pipeline reads and writes:
//! 1. **State:** Register file, program counter, main memory.
//! 2. **Prediction:** The configured branch predictor unit.
//! 3. **Accounting:** Statistics and the halted flag.
//!
//! The pipeline itself lives in `Simulator`, next to the `Cpu`, so stage
//! functions borrow the architectural state without fighting the latches
//! for it.

/// Single-cycle interpreter path.
pub mod execution;

use crate::common::constants::WORD_BYTES;
use crate::config::Config;
use crate::core::arch::Gpr;
use crate::core::units::bru::PredictorUnit;
use crate::isa::abi;
use crate::mem::Memory;
use crate::stats::SimStats;

/// CPU architectural state: registers, memory, predictor, and statistics.
pub struct Cpu {
    /// General-purpose register file.
    pub regs: Gpr,
    /// Main memory.
    pub mem: Memory,
    /// Branch predictor unit.
    pub bp: PredictorUnit,
    /// Program counter.
    pub pc: u32,
    /// Execution has terminated (BREAK or program end with a drained
    /// pipeline).
    pub halted: bool,
    /// Emit per-stage trace lines to stderr.
    pub trace: bool,
    /// Performance statistics.
    pub stats: SimStats,

    /// Address the program image is loaded at; also the reset PC.
    pub base_address: u32,
    /// Length of the loaded program in words.
    pub program_words: usize,

    config: Config,
}

impl Cpu {
    /// Creates a CPU in the reset state for the given configuration.
    pub fn new(config: &Config) -> Self {
        let mut cpu = Self {
            regs: Gpr::new(),
            mem: Memory::new(config.core.memory_bytes),
            bp: PredictorUnit::from_config(&config.predictor),
            pc: config.core.base_address,
            halted: false,
            trace: config.core.trace,
            stats: SimStats::default(),
            base_address: config.core.base_address,
            program_words: 0,
            config: *config,
        };
        cpu.init_special_regs();
        cpu
    }

    /// Returns to the initial state, preserving the configuration and the
    /// program length. The caller re-installs the program image.
    pub fn reset(&mut self) {
        self.regs.clear();
        self.mem.clear();
        self.bp.reset();
        self.pc = self.base_address;
        self.halted = false;
        self.stats = SimStats::default();
        self.init_special_regs();
    }

    /// First address past the loaded program.
    #[inline]
    pub fn program_end(&self) -> u32 {
        self.base_address
            .wrapping_add((self.program_words as u32) * WORD_BYTES)
    }

    /// True when `pc` points into the loaded program text.
    #[inline]
    pub fn in_text(&self, pc: u32) -> bool {
        pc >= self.base_address && pc < self.program_end()
    }

    /// The configuration this CPU was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads `$sp` at the top word of memory and `$gp` at its midpoint.
    fn init_special_regs(&mut self) {
        let top = (self.mem.len() as u32).saturating_sub(WORD_BYTES);
        self.regs.write(abi::REG_SP, top);
        self.regs.write(abi::REG_GP, (self.mem.len() / 2) as u32);
    }
}
