//! Control hazard and flush-cost tests.
//!
//! Pins the redirect policy: a mispredicted branch or a register jump
//! resolved at execute costs exactly two bubbles; a direct jump resolved at
//! decode costs exactly one. The costs are observed through total cycle
//! counts of fixed programs, which fail if a single extra bubble appears.

use mipsim_core::config::PredictorKind;

use crate::common::builder::instruction::{addi, beq, bne, brk, j, jal, jr};
use crate::common::harness::TestContext;

// ══════════════════════════════════════════════════════════
// 1. Flush costs
// ══════════════════════════════════════════════════════════

/// Taken branch under static not-taken prediction: two bubbles.
///
/// Three retiring instructions drain in 7 cycles; the mispredict adds
/// exactly two.
#[test]
fn mispredicted_branch_costs_two_bubbles() {
    let mut ctx = TestContext::new().load_program(&[
        addi(8, 0, 1),     // $t0 = 1
        beq(0, 0, 1),      // always taken, skips one word
        addi(9, 0, 99),    // squashed
        addi(10, 0, 7),    // branch target
    ]);
    let result = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(8), 1);
    assert_eq!(ctx.get_reg(9), 0, "wrong-path instruction never retires");
    assert_eq!(ctx.get_reg(10), 7);
    assert_eq!(result.retired, 3);
    assert_eq!(result.cycles, 9, "7-cycle drain + 2 mispredict bubbles");

    let stats = ctx.sim.stats();
    assert_eq!(stats.hazard_stats.flushes, 1);
    assert_eq!(stats.branch_stats.mispredicted, 1);
    assert_eq!(stats.branch_stats.total, 1);
}

/// A correctly predicted not-taken branch costs nothing.
#[test]
fn correct_not_taken_prediction_is_free() {
    let mut ctx = TestContext::new().load_program(&[
        addi(8, 0, 1),
        beq(8, 0, 1),      // $t0 != 0: not taken, as predicted
        addi(9, 0, 5),
        addi(10, 0, 7),
    ]);
    let result = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(9), 5);
    assert_eq!(ctx.get_reg(10), 7);
    assert_eq!(result.retired, 4);
    assert_eq!(result.cycles, 8, "four instructions, no bubbles");
    assert_eq!(ctx.sim.stats().hazard_stats.flushes, 0);
}

/// Direct jump resolved at decode: exactly one bubble.
#[test]
fn direct_jump_costs_one_bubble() {
    let mut ctx = TestContext::new().load_program(&[
        addi(8, 0, 1),     // $t0 = 1
        j(0x10),           // skip two words
        addi(9, 0, 99),    // squashed
        addi(10, 0, 88),   // never fetched on the good path
        addi(11, 0, 7),    // jump target
    ]);
    let result = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(9), 0);
    assert_eq!(ctx.get_reg(10), 0);
    assert_eq!(ctx.get_reg(11), 7);
    assert_eq!(result.retired, 3);
    assert_eq!(result.cycles, 8, "7-cycle drain + 1 jump bubble");
    assert_eq!(ctx.sim.stats().hazard_stats.flushes, 1);
}

/// Register jump resolved at execute: exactly two bubbles, with the target
/// register forwarded from the producer directly ahead of it.
#[test]
fn register_jump_costs_two_bubbles() {
    let mut ctx = TestContext::new().load_program(&[
        addi(8, 0, 0x10),  // $t0 = 0x10
        jr(8),
        addi(9, 0, 99),    // squashed
        addi(10, 0, 88),   // never fetched on the good path
        addi(11, 0, 7),    // jump target
    ]);
    let result = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(9), 0);
    assert_eq!(ctx.get_reg(10), 0);
    assert_eq!(ctx.get_reg(11), 7);
    assert_eq!(result.retired, 3);
    assert_eq!(result.cycles, 9, "7-cycle drain + 2 register-jump bubbles");
    assert_eq!(ctx.sim.stats().hazard_stats.flushes, 1);
}

// ══════════════════════════════════════════════════════════
// 2. Prediction interaction
// ══════════════════════════════════════════════════════════

/// A backward loop branch under BTFN: taken on every iteration but the
/// exit, so the only mispredict is the final one.
#[test]
fn btfn_loop_mispredicts_only_the_exit() {
    let mut ctx = TestContext::with_predictor(PredictorKind::Btfn).load_program(&[
        addi(9, 0, 10),  // $t1 = 10
        addi(8, 0, 0),   // $t0 = 0
        addi(8, 8, 1),   // loop: $t0 += 1
        bne(8, 9, -2),   // until $t0 == $t1
    ]);
    ctx.run_to_halt();

    assert_eq!(ctx.get_reg(8), 10);

    let stats = ctx.sim.stats();
    assert_eq!(stats.branch_stats.total, 10);
    assert_eq!(stats.branch_stats.mispredicted, 1, "only the loop exit");
    assert_eq!(stats.branch_stats.correct, 9);
    assert_eq!(stats.hazard_stats.flushes, 1, "only the exit flushes");
}

/// The same loop under static not-taken mispredicts every taken iteration.
#[test]
fn static_not_taken_mispredicts_taken_loop() {
    let mut ctx = TestContext::new().load_program(&[
        addi(9, 0, 10),
        addi(8, 0, 0),
        addi(8, 8, 1),
        bne(8, 9, -2),
    ]);
    ctx.run_to_halt();

    assert_eq!(ctx.get_reg(8), 10);

    let stats = ctx.sim.stats();
    assert_eq!(stats.branch_stats.total, 10);
    assert_eq!(stats.branch_stats.mispredicted, 9, "every taken iteration");
    assert_eq!(stats.hazard_stats.flushes, 9);
}

/// A two-bit table warms up on a loop: after the first two iterations the
/// backward branch predicts taken, leaving two mispredicts total (entry
/// and exit).
#[test]
fn two_bit_warms_up_on_loop() {
    let mut ctx = TestContext::with_predictor(PredictorKind::Bimodal2Bit).load_program(&[
        addi(9, 0, 10),
        addi(8, 0, 0),
        addi(8, 8, 1),
        bne(8, 9, -2),
    ]);
    ctx.run_to_halt();

    let stats = ctx.sim.stats();
    assert_eq!(stats.branch_stats.total, 10);
    // WNT start: iteration 1 mispredicts (taken), flipping to WT; the
    // exit mispredicts once more from ST.
    assert_eq!(stats.branch_stats.mispredicted, 2);
}

/// JAL links past the squashed slot and JR returns to the linked address.
#[test]
fn jal_jr_round_trip() {
    let mut ctx = TestContext::new().load_program(&[
        addi(4, 0, 1),    // 0x00: $a0 = 1
        jal(0x14),        // 0x04: call leaf, $ra = 0x0c
        addi(4, 4, 10),   // 0x08: squashed slot, never executes
        addi(2, 4, 5),    // 0x0c: $v0 = $a0 + 5 (return lands here)
        brk(),            // 0x10: stop before falling into the leaf
        addi(4, 4, 2),    // 0x14: leaf: $a0 += 2
        jr(31),           // 0x18: return
    ]);
    let result = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(31), 0x0c, "$ra = jal address + 8");
    assert_eq!(ctx.get_reg(4), 3, "slot at 0x08 never executed");
    assert_eq!(ctx.get_reg(2), 8);
    assert_eq!(result.retired, 6);
}
