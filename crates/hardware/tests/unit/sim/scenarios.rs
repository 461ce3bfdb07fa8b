//! End-to-end scenarios and engine invariants.

use mipsim_core::config::{Config, CoreConfig, PredictorKind, TEXT_BASE_HIGH};
use mipsim_core::sim::Simulator;

use crate::common::builder::instruction::{add, addi, brk, lw, sw};
use crate::common::harness::TestContext;

// ══════════════════════════════════════════════════════════
// 1. Memory scenarios
// ══════════════════════════════════════════════════════════

/// A stored word reads back big-endian byte by byte.
#[test]
fn stored_word_reads_back_big_endian() {
    let mut ctx = TestContext::new().load_program(&[sw(8, 0x100, 0), brk()]);
    ctx.set_reg(8, 0x11223344);
    ctx.run_to_halt();

    assert_eq!(ctx.sim.get_memory_byte(0x100), 0x11);
    assert_eq!(ctx.sim.get_memory_byte(0x101), 0x22);
    assert_eq!(ctx.sim.get_memory_byte(0x102), 0x33);
    assert_eq!(ctx.sim.get_memory_byte(0x103), 0x44);
    assert_eq!(ctx.sim.get_memory_word(0x100), 0x11223344);
}

/// Out-of-range accesses read zero, drop writes, and are counted; the
/// program keeps running.
#[test]
fn out_of_range_memory_is_counted_not_fatal() {
    let mut ctx = TestContext::new().load_program(&[
        lw(8, 0, 9),      // read far outside memory
        sw(8, 4, 9),      // write far outside memory
        addi(10, 0, 7),
    ]);
    ctx.set_reg(9, 0x00F0_0000);
    let result = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(8), 0, "out-of-range read returns zero");
    assert_eq!(ctx.get_reg(10), 7, "execution continued");
    assert_eq!(result.retired, 3);
    assert!(ctx.sim.cpu.mem.oob_accesses() >= 2);
}

// ══════════════════════════════════════════════════════════
// 2. Termination
// ══════════════════════════════════════════════════════════

/// BREAK halts before anything younger retires.
#[test]
fn break_halts_immediately() {
    let mut ctx = TestContext::new().load_program(&[brk(), addi(8, 0, 5)]);
    let result = ctx.run_to_halt();

    assert_eq!(result.retired, 1, "only the break retires");
    assert_eq!(ctx.get_reg(8), 0);
    assert_eq!(result.cycles, 5, "break drains through the five stages");
}

/// Stepping a halted machine is a no-op.
#[test]
fn step_after_halt_is_inert() {
    let mut ctx = TestContext::new().load_program(&[addi(8, 0, 1)]);
    ctx.run_to_halt();

    let before = ctx.sim.stats().cycles;
    let step = ctx.sim.step();
    assert!(step.halted);
    assert_eq!(step.cycles, before, "no cycle consumed after halt");
}

/// The safety cap stops an endless loop and leaves state inspectable.
#[test]
fn safety_cap_stops_infinite_loop() {
    use mipsim_core::sim::RunOutcome;
    use crate::common::builder::instruction::j;

    let mut ctx = TestContext::new().load_program(&[
        addi(8, 8, 1),
        j(0x0),
    ]);
    let result = ctx.sim.run(500);

    assert_eq!(result.outcome, RunOutcome::CycleLimit);
    assert_eq!(result.cycles, 500);
    assert!(!ctx.sim.halted());
    assert!(ctx.get_reg(8) > 0, "state remains inspectable");
}

// ══════════════════════════════════════════════════════════
// 3. Invariants
// ══════════════════════════════════════════════════════════

/// `$zero` stays zero and is never a forwarding source.
#[test]
fn zero_register_is_hardwired() {
    let mut ctx = TestContext::new().load_program(&[
        addi(8, 0, 7),
        add(0, 8, 8),     // write to $zero is discarded
        add(9, 0, 0),     // must read 0, not a forwarded 14
    ]);
    ctx.run_to_halt();

    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.get_reg(9), 0);
}

/// Per-cycle counters: cycles grow by one per step, retired by zero or
/// one, and retired never exceeds cycles.
#[test]
fn counter_invariants_hold_every_cycle() {
    let mut ctx = TestContext::new().load_program(&[0x20020005, 0x20030003, 0x00622020]);

    let mut prev_cycles = 0;
    let mut prev_retired = 0;
    for _ in 0..50 {
        let step = ctx.sim.step();
        let stats = ctx.sim.stats();

        assert_eq!(stats.cycles, prev_cycles + 1);
        let delta = stats.retired - prev_retired;
        assert!(delta <= 1, "at most one retirement per cycle");
        assert!(stats.retired <= stats.cycles);
        assert_eq!(ctx.get_reg(0), 0);

        prev_cycles = stats.cycles;
        prev_retired = stats.retired;
        if step.halted {
            break;
        }
    }
    assert!(ctx.sim.halted());
}

/// Unknown encodings execute as NOPs, retire, and are counted as
/// anomalies.
#[test]
fn unknown_encoding_is_counted_anomaly() {
    let mut ctx = TestContext::new().load_program(&[0xFC00_0000, addi(8, 0, 3)]);
    let result = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(8), 3);
    assert_eq!(result.retired, 2);
    assert_eq!(ctx.sim.cpu.stats.decode_anomalies, 1);
}

/// CPI is cycles over retired instructions.
#[test]
fn cpi_matches_definition() {
    let mut ctx = TestContext::new().load_program(&[addi(8, 0, 1), addi(9, 0, 2)]);
    let result = ctx.run_to_halt();

    let stats = ctx.sim.stats();
    let expected = result.cycles as f64 / result.retired as f64;
    assert!((stats.cpi - expected).abs() < f64::EPSILON);
}

// ══════════════════════════════════════════════════════════
// 4. Reset and configuration
// ══════════════════════════════════════════════════════════

/// Reset restores the initial state but keeps the loaded program, so the
/// same run repeats deterministically.
#[test]
fn reset_replays_the_same_program() {
    let mut ctx = TestContext::with_predictor(PredictorKind::Gshare)
        .load_program(&[0x20020005, 0x20030003, 0x00622020]);
    let first = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(2), 5);

    ctx.sim.reset();
    assert!(!ctx.sim.halted());
    assert_eq!(ctx.sim.pc(), 0);
    assert_eq!(ctx.sim.stats().cycles, 0);
    assert_eq!(ctx.sim.stats().branch_stats.total, 0);
    assert_eq!(ctx.get_reg(2), 0);

    let second = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(2), 5);
    assert_eq!(second.cycles, first.cycles);
    assert_eq!(second.retired, first.retired);
}

/// The conventional 0x0040_0000 text base works with a memory sized to
/// reach it.
#[test]
fn high_text_base_scheme() {
    let config = Config {
        core: CoreConfig {
            memory_bytes: 8 << 20,
            base_address: TEXT_BASE_HIGH,
            ..CoreConfig::default()
        },
        ..Config::default()
    };
    let mut sim = Simulator::new(config);
    sim.load_words(&[0x20020005, 0x20030003, 0x00622020]).unwrap();
    assert_eq!(sim.pc(), TEXT_BASE_HIGH);

    let result = sim.run(1_000);
    assert!(sim.halted());
    assert_eq!(sim.get_register(2), 5);
    assert_eq!(sim.get_register(4), 8);
    assert_eq!(result.pc, TEXT_BASE_HIGH + 12);
}

/// Config deserializes from JSON with defaults for omitted fields.
#[test]
fn config_from_json() {
    let config = Config::from_json(
        r#"{ "core": { "pipeline_enabled": false }, "predictor": { "kind": "2bit" } }"#,
    )
    .unwrap();
    assert!(!config.core.pipeline_enabled);
    assert_eq!(config.predictor.kind, PredictorKind::Bimodal2Bit);
    assert_eq!(config.core.memory_bytes, 1 << 20, "default preserved");
}

/// The stats report is machine-readable.
#[test]
fn stats_report_serializes() {
    let mut ctx = TestContext::new().load_program(&[addi(8, 0, 1)]);
    ctx.run_to_halt();

    let value = serde_json::to_value(ctx.sim.stats()).unwrap();
    assert!(value.get("cycles").is_some());
    assert!(value.get("branch_stats").is_some());
    assert!(value.get("hazard_stats").is_some());
}
