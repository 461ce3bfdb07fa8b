//! Instruction decode properties.
//!
//! Verifies field extraction, sign extension, capability flags, and the
//! encode-then-decode round trip for every format. The round trips run
//! under proptest so the whole field space is sampled, not just the
//! handwritten cases.

use proptest::prelude::*;

use mipsim_core::isa::decode::decode;
use mipsim_core::isa::instruction::{Format, Op};

use crate::common::builder::instruction::{
    add, addi, beq, bgez, bltz, brk, i_type, j_type, jal, jalr, jr, lui, lw, nop, r_type, sll, sw,
};

// ══════════════════════════════════════════════════════════
// 1. Fixed-point checks
// ══════════════════════════════════════════════════════════

/// The all-zero word is the canonical NOP.
#[test]
fn zero_word_is_nop() {
    let inst = decode(nop(), 0);
    assert_eq!(inst.op, Op::Nop);
    assert!(!inst.reads_rs && !inst.reads_rt);
    assert!(inst.dest_reg().is_none());
}

/// Unmapped opcodes decode as UNKNOWN, not as garbage.
#[test]
fn unmapped_opcode_is_unknown() {
    assert_eq!(decode(0xFC00_0000, 0).op, Op::Unknown);
    // SPECIAL with an unmapped funct.
    assert_eq!(decode(r_type(1, 2, 3, 0, 0x3F), 0).op, Op::Unknown);
    // REGIMM with an unmapped rt selector.
    assert_eq!(decode(i_type(0x01, 2, 0x1F, 0), 0).op, Op::Unknown);
}

/// R-type iff opcode is zero; J/JAL are the only J-type encodings.
#[test]
fn format_classification() {
    assert_eq!(decode(add(4, 3, 2), 0).format, Format::R);
    assert_eq!(decode(addi(2, 0, 5), 0).format, Format::I);
    assert_eq!(decode(jal(0x14), 0).format, Format::J);
    assert_eq!(decode(j_type(0x02, 1), 0).format, Format::J);
}

/// Loads write rt; stores write nothing; branches write nothing.
#[test]
fn capability_flags() {
    let load = decode(lw(8, 4, 9), 0);
    assert!(load.is_load && load.reads_rs && load.writes_rt);
    assert_eq!(load.dest_reg(), Some(8));

    let store = decode(sw(8, 4, 9), 0);
    assert!(store.is_store && store.reads_rs && store.reads_rt);
    assert_eq!(store.dest_reg(), None);

    let branch = decode(beq(8, 9, -1), 0);
    assert!(branch.is_branch && branch.reads_rs && branch.reads_rt);
    assert_eq!(branch.dest_reg(), None);

    let shift = decode(sll(10, 9, 3), 0);
    assert!(shift.reads_rt && !shift.reads_rs && shift.writes_rd);
}

/// JAL writes `$ra`; JALR defaults to `$ra` when rd is left at zero.
#[test]
fn link_destinations() {
    assert_eq!(decode(jal(0x40), 0).dest_reg(), Some(31));
    assert_eq!(decode(jalr(0, 8), 0).dest_reg(), Some(31));
    assert_eq!(decode(jalr(12, 8), 0).dest_reg(), Some(12));
    assert_eq!(decode(jr(31), 0).dest_reg(), None);
}

/// BREAK carries no register traffic.
#[test]
fn break_is_inert() {
    let inst = decode(brk(), 0);
    assert_eq!(inst.op, Op::Break);
    assert!(!inst.reads_rs && !inst.reads_rt);
    assert_eq!(inst.dest_reg(), None);
}

/// REGIMM selects the operation from the rt field.
#[test]
fn regimm_selectors() {
    assert_eq!(decode(bltz(3, -4), 0).op, Op::Bltz);
    assert_eq!(decode(bgez(3, -4), 0).op, Op::Bgez);
}

/// Branch targets are PC-relative word offsets.
#[test]
fn branch_target_arithmetic() {
    let inst = decode(beq(0, 0, -2), 0x10);
    assert_eq!(inst.branch_target(), 0x10 + 4 - 8);
    let fwd = decode(beq(0, 0, 3), 0x10);
    assert_eq!(fwd.branch_target(), 0x10 + 4 + 12);
}

/// J/JAL targets keep the region bits of PC + 4.
#[test]
fn jump_target_arithmetic() {
    let inst = decode(j_type(0x02, 0x5), 0x0040_0000);
    assert_eq!(inst.jump_target(), 0x0040_0000 & 0xF000_0000 | 0x14);
    assert_eq!(decode(jal(0x14), 4).link_value(), 12);
}

/// LUI shifts the immediate into the upper halfword.
#[test]
fn lui_flags() {
    let inst = decode(lui(8, 0x1234), 0);
    assert_eq!(inst.op, Op::Lui);
    assert!(inst.writes_rt && !inst.reads_rs);
    assert_eq!(inst.imm_zx(), 0x1234);
}

// ══════════════════════════════════════════════════════════
// 2. Round-trip properties
// ══════════════════════════════════════════════════════════

proptest! {
    /// R-type field round trip.
    #[test]
    fn rtype_round_trip(rs in 0u32..32, rt in 0u32..32, rd in 0u32..32, shamt in 0u32..32) {
        let inst = decode(r_type(rs, rt, rd, shamt, 0x20), 0);
        prop_assert_eq!(inst.op, Op::Add);
        prop_assert_eq!(inst.rs, rs as usize);
        prop_assert_eq!(inst.rt, rt as usize);
        prop_assert_eq!(inst.rd, rd as usize);
        prop_assert_eq!(inst.shamt, shamt);
        prop_assert_eq!(inst.funct, 0x20);
    }

    /// I-type immediate round trip with sign extension.
    #[test]
    fn itype_round_trip(rs in 0u32..32, rt in 0u32..32, imm in i16::MIN..=i16::MAX) {
        let inst = decode(addi(rt, rs, i32::from(imm)), 0);
        prop_assert_eq!(inst.op, Op::Addi);
        prop_assert_eq!(inst.rs, rs as usize);
        prop_assert_eq!(inst.rt, rt as usize);
        prop_assert_eq!(inst.imm_se(), i32::from(imm));
        prop_assert_eq!(inst.imm, imm as u16);
    }

    /// J-type target round trip.
    #[test]
    fn jtype_round_trip(target in 0u32..(1 << 26)) {
        let inst = decode(j_type(0x03, target), 0);
        prop_assert_eq!(inst.op, Op::Jal);
        prop_assert_eq!(inst.jtarget, target);
    }

    /// Decode never panics on arbitrary words and always classifies a format.
    #[test]
    fn decode_total(raw in any::<u32>(), addr in any::<u32>()) {
        let inst = decode(raw, addr & !3);
        prop_assert_eq!(inst.raw, raw);
        // A word that writes must name a destination register.
        if inst.writes_rd || inst.writes_rt {
            prop_assert!(inst.dest_reg().is_some());
        }
    }
}
