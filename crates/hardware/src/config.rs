//! Configuration system for the simulator.
//!
//! This module defines all configuration structures and enums used to
//! parameterize the simulator:
//! 1. **Defaults:** Baseline machine constants (memory, base address, tables).
//! 2. **Structures:** Config for the machine and for the branch predictor.
//! 3. **Enums:** The branch predictor variant selector.
//!
//! Configuration is built in code via `Config::default()` or deserialized
//! from JSON by a front-end.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Size of main memory in bytes (1 MiB).
    pub const MEMORY_BYTES: usize = 1 << 20;

    /// Program base address.
    ///
    /// Zero pairs with the default 1 MiB flat memory. The conventional
    /// 0x0040_0000 text base is equally supported, but needs a memory large
    /// enough to contain it (see [`TEXT_BASE_HIGH`]).
    pub const BASE_ADDRESS: u32 = 0;

    /// Conventional text-segment base used by MIPS toolchains.
    ///
    /// Pair with a memory of at least 8 MiB so the text segment is in range.
    pub const TEXT_BASE_HIGH: u32 = 0x0040_0000;

    /// Pipelined execution is the default; the single-cycle interpreter
    /// path is opt-in.
    pub const PIPELINE_ENABLED: bool = true;

    /// Direction table size for the bimodal and gshare predictors
    /// (log2, 1024 entries).
    pub const TABLE_BITS: usize = 10;

    /// Global history length for the gshare predictor (bits).
    pub const HISTORY_BITS: usize = 8;

    /// Local history table size (log2, 1024 entries).
    pub const LOCAL_TABLE_BITS: usize = 10;

    /// Per-branch history length and pattern table size for the
    /// local-history predictor (log2, 1024 entries).
    pub const LOCAL_PATTERN_BITS: usize = 10;

    /// Tournament chooser table size (log2, 1024 entries).
    pub const CHOOSER_BITS: usize = 10;

    /// Safety cap for `run()` when the caller does not supply one.
    pub const MAX_RUN_CYCLES: u64 = 1_000_000;
}

/// Conventional high text base (0x0040_0000) for callers that want the
/// classic memory map; pair it with a memory of at least 8 MiB.
pub const TEXT_BASE_HIGH: u32 = defaults::TEXT_BASE_HIGH;

/// Default safety cap for `run()`.
pub const DEFAULT_MAX_CYCLES: u64 = defaults::MAX_RUN_CYCLES;

/// Branch predictor variant selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PredictorKind {
    /// Every branch predicted not taken.
    #[default]
    #[serde(alias = "static")]
    StaticNotTaken,
    /// Every branch predicted taken.
    StaticTaken,
    /// Backward taken, forward not taken.
    Btfn,
    /// Per-branch single-bit last-outcome table.
    #[serde(alias = "1bit")]
    Bimodal1Bit,
    /// Per-branch 2-bit saturating counter table.
    #[serde(alias = "2bit")]
    Bimodal2Bit,
    /// Global history XOR PC indexed counter table.
    Gshare,
    /// Two-level predictor with per-branch local histories.
    #[serde(alias = "local")]
    LocalHistory,
    /// Chooser-arbitrated hybrid of gshare and local-history.
    Tournament,
}

/// Branch predictor parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Which predictor variant to build.
    pub kind: PredictorKind,
    /// Direction table size (log2) for bimodal and gshare.
    pub table_bits: usize,
    /// Global history length in bits for gshare.
    pub history_bits: usize,
    /// Local history table size (log2).
    pub local_table_bits: usize,
    /// Per-branch history length / pattern table size (log2).
    pub local_pattern_bits: usize,
    /// Tournament chooser table size (log2).
    pub chooser_bits: usize,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            kind: PredictorKind::default(),
            table_bits: defaults::TABLE_BITS,
            history_bits: defaults::HISTORY_BITS,
            local_table_bits: defaults::LOCAL_TABLE_BITS,
            local_pattern_bits: defaults::LOCAL_PATTERN_BITS,
            chooser_bits: defaults::CHOOSER_BITS,
        }
    }
}

impl PredictorConfig {
    /// Shorthand for a predictor config of the given kind with default sizes.
    pub fn of_kind(kind: PredictorKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

/// Machine configuration: memory geometry and execution mode.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Size of main memory in bytes.
    pub memory_bytes: usize,
    /// Address the program image is loaded at; also the reset PC.
    pub base_address: u32,
    /// Run the five-stage pipeline (`true`) or the single-cycle
    /// interpreter (`false`).
    pub pipeline_enabled: bool,
    /// Emit per-stage trace lines to stderr.
    pub trace: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            memory_bytes: defaults::MEMORY_BYTES,
            base_address: defaults::BASE_ADDRESS,
            pipeline_enabled: defaults::PIPELINE_ENABLED,
            trace: false,
        }
    }
}

/// Root configuration type.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Machine configuration.
    pub core: CoreConfig,
    /// Branch predictor configuration.
    pub predictor: PredictorConfig,
}

impl Config {
    /// Configuration with a specific predictor and default machine settings.
    pub fn with_predictor(kind: PredictorKind) -> Self {
        Self {
            predictor: PredictorConfig::of_kind(kind),
            ..Self::default()
        }
    }

    /// Deserializes a configuration from JSON; omitted fields keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
