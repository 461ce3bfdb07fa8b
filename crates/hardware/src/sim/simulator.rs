//! Top-level simulator: architectural state and pipeline side by side.
//!
//! `Simulator` owns the [`Cpu`] and the [`Pipeline`] as siblings so the
//! pipeline stages can borrow the architectural state without interior
//! mutability. It is the engine's public API surface: program loading,
//! stepping, running with a safety cap, state pokes for debugging, and the
//! statistics report. External front-ends must serialize their calls; the
//! engine itself is single-threaded and deterministic.

use crate::common::constants::WORD_BYTES;
use crate::common::error::LoadError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::execution::step_direct;
use crate::core::pipeline::Pipeline;
use crate::stats::StatsReport;

/// Result of a single [`Simulator::step`].
#[derive(Clone, Copy, Debug)]
pub struct StepResult {
    /// Execution has terminated.
    pub halted: bool,
    /// Total cycles elapsed so far.
    pub cycles: u64,
    /// Program counter after the step.
    pub pc: u32,
}

/// Why [`Simulator::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program terminated normally.
    Halted,
    /// The safety cap was reached; state remains valid for inspection.
    CycleLimit,
}

/// Result of a [`Simulator::run`].
#[derive(Clone, Copy, Debug)]
pub struct RunResult {
    /// Why the run stopped.
    pub outcome: RunOutcome,
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Total instructions retired.
    pub retired: u64,
    /// Program counter at the stop point.
    pub pc: u32,
}

/// The simulator: CPU architectural state plus the pipeline.
pub struct Simulator {
    /// CPU architectural state (registers, memory, predictor, statistics).
    pub cpu: Cpu,
    pipeline: Pipeline,
    pipeline_enabled: bool,
    program: Vec<u32>,
}

impl Simulator {
    /// Creates a simulator from a configuration.
    pub fn new(config: Config) -> Self {
        Self {
            cpu: Cpu::new(&config),
            pipeline: Pipeline::new(),
            pipeline_enabled: config.core.pipeline_enabled,
            program: Vec::new(),
        }
    }

    /// Clears all state and installs a program image at the base address.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ImageTooLarge`] when the image does not fit
    /// between the base address and the end of memory; the state is left
    /// reset with no program installed.
    pub fn load_words(&mut self, words: &[u32]) -> Result<(), LoadError> {
        self.reset_state();
        self.cpu.program_words = 0;
        self.program.clear();

        let base = self.cpu.base_address as usize;
        let capacity = self
            .cpu
            .mem
            .len()
            .saturating_sub(base)
            / WORD_BYTES as usize;
        if words.len() > capacity {
            return Err(LoadError::ImageTooLarge {
                words: words.len(),
                capacity,
            });
        }

        self.program = words.to_vec();
        self.cpu.program_words = words.len();
        self.install_program();
        tracing::debug!(
            words = words.len(),
            base = self.cpu.base_address,
            "program loaded"
        );
        Ok(())
    }

    /// Parses a text program image and loads it.
    ///
    /// # Errors
    ///
    /// Propagates parse failures and [`LoadError::ImageTooLarge`].
    pub fn load_image(&mut self, text: &str) -> Result<(), LoadError> {
        let words = crate::sim::loader::parse_image(text)?;
        self.load_words(&words)
    }

    /// Advances exactly one cycle. Does nothing once halted.
    pub fn step(&mut self) -> StepResult {
        if !self.cpu.halted {
            self.cpu.stats.cycles += 1;
            if self.pipeline_enabled {
                self.pipeline.tick(&mut self.cpu);
            } else {
                step_direct(&mut self.cpu);
            }
        }
        StepResult {
            halted: self.cpu.halted,
            cycles: self.cpu.stats.cycles,
            pc: self.cpu.pc,
        }
    }

    /// Steps until the program halts or `max_cycles` cycles have elapsed.
    pub fn run(&mut self, max_cycles: u64) -> RunResult {
        let mut outcome = RunOutcome::CycleLimit;
        for _ in 0..max_cycles {
            if self.step().halted {
                outcome = RunOutcome::Halted;
                break;
            }
        }
        if self.cpu.halted {
            outcome = RunOutcome::Halted;
        }
        if outcome == RunOutcome::CycleLimit {
            tracing::warn!(max_cycles, "safety cap reached before halt");
        }
        RunResult {
            outcome,
            cycles: self.cpu.stats.cycles,
            retired: self.cpu.stats.instructions_retired,
            pc: self.cpu.pc,
        }
    }

    /// Returns to the initial state, preserving the configuration and the
    /// loaded program.
    pub fn reset(&mut self) {
        self.reset_state();
        self.install_program();
    }

    /// Switches between the pipelined and single-cycle execution paths.
    ///
    /// Takes effect on the next cycle; call [`Simulator::reset`] first for
    /// a comparable run.
    pub fn enable_pipeline(&mut self, enabled: bool) {
        self.pipeline_enabled = enabled;
    }

    /// True when execution has terminated.
    pub fn halted(&self) -> bool {
        self.cpu.halted
    }

    /// Current program counter.
    pub fn pc(&self) -> u32 {
        self.cpu.pc
    }

    /// Reads a register.
    pub fn get_register(&self, idx: usize) -> u32 {
        self.cpu.regs.read(idx)
    }

    /// Writes a register (debug/test poke).
    pub fn set_register(&mut self, idx: usize, value: u32) {
        self.cpu.regs.write(idx, value);
    }

    /// Reads a memory word without disturbing the access counters.
    pub fn get_memory_word(&self, addr: u32) -> u32 {
        self.cpu.mem.peek_word(addr)
    }

    /// Writes a memory word (debug/test poke).
    pub fn set_memory_word(&mut self, addr: u32, value: u32) {
        self.cpu.mem.write_word(addr, value);
    }

    /// Reads a memory byte without disturbing the access counters.
    pub fn get_memory_byte(&self, addr: u32) -> u8 {
        self.cpu.mem.peek_byte(addr)
    }

    /// Assembles the statistics report.
    pub fn stats(&self) -> StatsReport {
        let mut stats = self.cpu.stats;
        stats.oob_accesses = self.cpu.mem.oob_accesses();
        StatsReport {
            cycles: stats.cycles,
            retired: stats.instructions_retired,
            cpi: stats.cpi(),
            branch_stats: self.cpu.bp.stats().into(),
            hazard_stats: stats.hazards,
        }
    }

    /// Prints the full statistics breakdown to stdout.
    pub fn print_stats(&self) {
        let mut stats = self.cpu.stats;
        stats.oob_accesses = self.cpu.mem.oob_accesses();
        stats.print(&self.cpu.bp.stats());
    }

    fn reset_state(&mut self) {
        self.cpu.reset();
        self.pipeline.reset();
    }

    fn install_program(&mut self) {
        let base = self.cpu.base_address;
        for (i, word) in self.program.iter().enumerate() {
            self.cpu
                .mem
                .write_word(base.wrapping_add((i as u32) * WORD_BYTES), *word);
        }
    }
}
