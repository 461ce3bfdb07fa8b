//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the simulator:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, derived CPI.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Hazards:** Data/control hazard detections, forwards, stalls, flushes.
//! 4. **Anomalies:** Unknown encodings and out-of-range memory accesses.
//!
//! Branch prediction accuracy lives with the predictor unit
//! ([`crate::core::units::bru::PredictionStats`]); the simulator's `stats()`
//! method assembles everything into one [`StatsReport`].

use serde::Serialize;

use crate::core::units::bru::PredictionStats;
use crate::isa::instruction::Instruction;

/// Hazard-unit statistics.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct HazardStats {
    /// Cycles in which a data hazard (forward or stall) was detected.
    pub data_hazards: u64,
    /// Control hazards detected (jumps resolved at ID, redirects at EX).
    pub control_hazards: u64,
    /// Operand forwarding events applied.
    pub forwards: u64,
    /// Load-use stall cycles inserted.
    pub stalls: u64,
    /// Pipeline flushes performed.
    pub flushes: u64,
}

/// Simulation statistics tracking all performance counters.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired at writeback.
    pub instructions_retired: u64,

    /// Count of ALU (non-load/store/branch/jump) instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of jump instructions retired.
    pub inst_jump: u64,

    /// Unknown opcode/funct encodings executed as NOPs.
    pub decode_anomalies: u64,
    /// Reads or writes outside memory, dropped or zero-filled.
    pub oob_accesses: u64,

    /// Hazard-unit counters.
    pub hazards: HazardStats,
}

impl SimStats {
    /// Counts one retired instruction and classifies it for the mix.
    pub fn record_retired(&mut self, inst: &Instruction) {
        self.instructions_retired += 1;
        if inst.is_load {
            self.inst_load += 1;
        } else if inst.is_store {
            self.inst_store += 1;
        } else if inst.is_branch {
            self.inst_branch += 1;
        } else if inst.is_jump {
            self.inst_jump += 1;
        } else {
            self.inst_alu += 1;
        }
    }

    /// Cycles per retired instruction; 0.0 before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self, branch: &PredictionStats) {
        println!("==========================================================");
        println!("MIPS PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_cpi                  {:.4}", self.cpi());
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  alu                    {}", self.inst_alu);
        println!("  load                   {}", self.inst_load);
        println!("  store                  {}", self.inst_store);
        println!("  branch                 {}", self.inst_branch);
        println!("  jump                   {}", self.inst_jump);
        println!("----------------------------------------------------------");
        println!("BRANCH PREDICTION");
        println!("  lookups                {}", branch.total);
        println!("  correct                {}", branch.correct);
        println!("  mispredicted           {}", branch.mispredicted);
        println!("  accuracy               {:.2}%", branch.accuracy() * 100.0);
        println!("----------------------------------------------------------");
        println!("HAZARDS");
        println!("  data                   {}", self.hazards.data_hazards);
        println!("  control                {}", self.hazards.control_hazards);
        println!("  forwards               {}", self.hazards.forwards);
        println!("  stalls                 {}", self.hazards.stalls);
        println!("  flushes                {}", self.hazards.flushes);
        if self.decode_anomalies != 0 || self.oob_accesses != 0 {
            println!("----------------------------------------------------------");
            println!("ANOMALIES");
            println!("  unknown_encodings      {}", self.decode_anomalies);
            println!("  oob_accesses           {}", self.oob_accesses);
        }
        println!("==========================================================");
    }
}

/// Branch prediction section of the statistics report.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct BranchReport {
    /// Branches observed.
    pub total: u64,
    /// Correct predictions.
    pub correct: u64,
    /// Mispredictions.
    pub mispredicted: u64,
    /// `correct / total`, or 0.0 before any branch resolves.
    pub accuracy: f64,
}

impl From<PredictionStats> for BranchReport {
    fn from(stats: PredictionStats) -> Self {
        Self {
            total: stats.total,
            correct: stats.correct,
            mispredicted: stats.mispredicted,
            accuracy: stats.accuracy(),
        }
    }
}

/// One-shot statistics snapshot assembled by the simulator.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct StatsReport {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired.
    pub retired: u64,
    /// Cycles per instruction.
    pub cpi: f64,
    /// Branch predictor counters.
    pub branch_stats: BranchReport,
    /// Hazard-unit counters.
    pub hazard_stats: HazardStats,
}
