//! Instruction disassembler for the MIPS-I integer subset.
//!
//! Converts a 32-bit machine word into assembler text for debug tracing,
//! logging, and test diagnostics.
//!
//! # Format
//!
//! - Lower-case mnemonics, ABI register names (`$t0`, `$sp`, …).
//! - R-type: `op $rd, $rs, $rt`; shifts: `op $rd, $rt, shamt`.
//! - Immediate arithmetic: `op $rt, $rs, imm` with the immediate in decimal,
//!   signed where the operation sign-extends it.
//! - Loads/stores: `op $rt, imm($rs)`.
//! - Branches: `op $rs, $rt, offset` (`op $rs, offset` for the
//!   compare-with-zero family).
//! - Jumps: `op 0xHEX` with the 28-bit byte target.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x20020005), "addi $v0, $zero, 5");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, Op};

/// Disassembles a 32-bit machine word.
///
/// Returns text like `"add $a0, $v1, $v0"`, or `"unknown"` for
/// unrecognised encodings.
pub fn disassemble(raw: u32) -> String {
    let inst = decode(raw, 0);
    let rs = reg_name(inst.rs);
    let rt = reg_name(inst.rt);
    let rd = reg_name(inst.rd);

    match inst.op {
        Op::Nop => "nop".to_string(),
        Op::Break => "break".to_string(),
        Op::Unknown => "unknown".to_string(),

        Op::Add | Op::Addu | Op::Sub | Op::Subu | Op::And | Op::Or | Op::Nor | Op::Xor
        | Op::Slt | Op::Sltu => {
            format!("{} {rd}, {rs}, {rt}", mnemonic(&inst))
        }

        Op::Sll | Op::Srl | Op::Sra => {
            format!("{} {rd}, {rt}, {}", mnemonic(&inst), inst.shamt)
        }

        Op::Jr => format!("jr {rs}"),
        Op::Jalr => format!("jalr {rd}, {rs}"),

        Op::Addi | Op::Slti => {
            format!("{} {rt}, {rs}, {}", mnemonic(&inst), inst.imm_se())
        }
        Op::Addiu | Op::Sltiu => {
            format!("{} {rt}, {rs}, {}", mnemonic(&inst), inst.imm_se())
        }
        Op::Andi | Op::Ori | Op::Xori => {
            format!("{} {rt}, {rs}, {}", mnemonic(&inst), inst.imm_zx())
        }
        Op::Lui => format!("lui {rt}, {}", inst.imm_zx()),

        Op::Lw | Op::Lh | Op::Lb | Op::Lbu | Op::Lhu | Op::Sw | Op::Sh | Op::Sb => {
            format!("{} {rt}, {}({rs})", mnemonic(&inst), inst.imm_se())
        }

        Op::Beq | Op::Bne => {
            format!("{} {rs}, {rt}, {}", mnemonic(&inst), inst.imm_se())
        }
        Op::Blez | Op::Bgtz | Op::Bltz | Op::Bgez => {
            format!("{} {rs}, {}", mnemonic(&inst), inst.imm_se())
        }

        Op::J | Op::Jal => {
            format!("{} {:#010x}", mnemonic(&inst), inst.jtarget << 2)
        }
    }
}

/// Mnemonic text for an operation.
fn mnemonic(inst: &Instruction) -> &'static str {
    match inst.op {
        Op::Add => "add",
        Op::Addu => "addu",
        Op::Sub => "sub",
        Op::Subu => "subu",
        Op::And => "and",
        Op::Or => "or",
        Op::Nor => "nor",
        Op::Xor => "xor",
        Op::Slt => "slt",
        Op::Sltu => "sltu",
        Op::Sll => "sll",
        Op::Srl => "srl",
        Op::Sra => "sra",
        Op::Jr => "jr",
        Op::Jalr => "jalr",
        Op::Break => "break",
        Op::Addi => "addi",
        Op::Addiu => "addiu",
        Op::Andi => "andi",
        Op::Ori => "ori",
        Op::Xori => "xori",
        Op::Slti => "slti",
        Op::Sltiu => "sltiu",
        Op::Lui => "lui",
        Op::Lw => "lw",
        Op::Lh => "lh",
        Op::Lb => "lb",
        Op::Lbu => "lbu",
        Op::Lhu => "lhu",
        Op::Sw => "sw",
        Op::Sh => "sh",
        Op::Sb => "sb",
        Op::Beq => "beq",
        Op::Bne => "bne",
        Op::Blez => "blez",
        Op::Bgtz => "bgtz",
        Op::Bltz => "bltz",
        Op::Bgez => "bgez",
        Op::J => "j",
        Op::Jal => "jal",
        Op::Nop => "nop",
        Op::Unknown => "unknown",
    }
}
