//! MIPS-I instruction decoder.
//!
//! Turns a raw 32-bit machine word and its address into an [`Instruction`].
//! Selection is two-level: the primary opcode picks the operation directly,
//! except for opcode 0x00 (SPECIAL, selected by funct) and opcode 0x01
//! (REGIMM, selected by the `rt` field). The all-zero word decodes as NOP;
//! every unmapped opcode/funct pair decodes as [`Op::Unknown`], which the
//! engine executes as a NOP while counting a decode anomaly.

use crate::isa::instruction::{Format, Instruction, InstructionBits, Op};
use crate::isa::mips1::{funct, opcodes, regimm};

/// Decodes one machine word fetched from `addr`.
pub fn decode(raw: u32, addr: u32) -> Instruction {
    let opcode = raw.opcode();

    let (format, op) = if raw == 0 {
        (Format::R, Op::Nop)
    } else {
        match opcode {
            opcodes::OP_SPECIAL => (Format::R, decode_special(raw.funct())),
            opcodes::OP_REGIMM => (Format::I, decode_regimm(raw.rt() as u32)),
            opcodes::OP_J => (Format::J, Op::J),
            opcodes::OP_JAL => (Format::J, Op::Jal),
            _ => (Format::I, decode_primary(opcode)),
        }
    };

    let mut inst = Instruction {
        raw,
        addr,
        format,
        op,
        opcode,
        rs: raw.rs(),
        rt: raw.rt(),
        rd: raw.rd(),
        shamt: raw.shamt(),
        funct: raw.funct(),
        imm: raw.imm(),
        jtarget: raw.jtarget(),
        ..Instruction::default()
    };
    derive_flags(&mut inst);
    inst
}

/// Selects the operation for SPECIAL (R-type) encodings.
fn decode_special(funct: u32) -> Op {
    match funct {
        funct::SLL => Op::Sll,
        funct::SRL => Op::Srl,
        funct::SRA => Op::Sra,
        funct::JR => Op::Jr,
        funct::JALR => Op::Jalr,
        funct::BREAK => Op::Break,
        funct::ADD => Op::Add,
        funct::ADDU => Op::Addu,
        funct::SUB => Op::Sub,
        funct::SUBU => Op::Subu,
        funct::AND => Op::And,
        funct::OR => Op::Or,
        funct::XOR => Op::Xor,
        funct::NOR => Op::Nor,
        funct::SLT => Op::Slt,
        funct::SLTU => Op::Sltu,
        _ => Op::Unknown,
    }
}

/// Selects the operation for REGIMM encodings from the `rt` field.
fn decode_regimm(rt: u32) -> Op {
    match rt {
        regimm::BLTZ => Op::Bltz,
        regimm::BGEZ => Op::Bgez,
        _ => Op::Unknown,
    }
}

/// Selects the operation for the remaining primary opcodes.
fn decode_primary(opcode: u32) -> Op {
    match opcode {
        opcodes::OP_BEQ => Op::Beq,
        opcodes::OP_BNE => Op::Bne,
        opcodes::OP_BLEZ => Op::Blez,
        opcodes::OP_BGTZ => Op::Bgtz,
        opcodes::OP_ADDI => Op::Addi,
        opcodes::OP_ADDIU => Op::Addiu,
        opcodes::OP_SLTI => Op::Slti,
        opcodes::OP_SLTIU => Op::Sltiu,
        opcodes::OP_ANDI => Op::Andi,
        opcodes::OP_ORI => Op::Ori,
        opcodes::OP_XORI => Op::Xori,
        opcodes::OP_LUI => Op::Lui,
        opcodes::OP_LB => Op::Lb,
        opcodes::OP_LH => Op::Lh,
        opcodes::OP_LW => Op::Lw,
        opcodes::OP_LBU => Op::Lbu,
        opcodes::OP_LHU => Op::Lhu,
        opcodes::OP_SB => Op::Sb,
        opcodes::OP_SH => Op::Sh,
        opcodes::OP_SW => Op::Sw,
        _ => Op::Unknown,
    }
}

/// Derives the cached capability flags from the selected operation.
///
/// This runs once per decode; the pipeline and hazard unit read the flags
/// instead of re-classifying the word every cycle.
fn derive_flags(inst: &mut Instruction) {
    use Op::{
        Add, Addi, Addiu, Addu, And, Andi, Beq, Bgez, Bgtz, Blez, Bltz, Bne, Jal, Jalr, Jr, Lb,
        Lbu, Lh, Lhu, Lui, Lw, Nor, Or, Ori, Sb, Sh, Sll, Slt, Slti, Sltiu, Sltu, Sra, Srl, Sub,
        Subu, Sw, Xor, Xori,
    };

    match inst.op {
        Add | Addu | Sub | Subu | And | Or | Nor | Xor | Slt | Sltu => {
            inst.reads_rs = true;
            inst.reads_rt = true;
            inst.writes_rd = true;
        }
        Sll | Srl | Sra => {
            inst.reads_rt = true;
            inst.writes_rd = true;
        }
        Jr => {
            inst.reads_rs = true;
            inst.is_jump = true;
        }
        Jalr => {
            inst.reads_rs = true;
            inst.writes_rd = true;
            inst.is_jump = true;
        }
        Addi | Addiu | Andi | Ori | Xori | Slti | Sltiu => {
            inst.reads_rs = true;
            inst.writes_rt = true;
        }
        Lui => inst.writes_rt = true,
        Lw | Lh | Lb | Lbu | Lhu => {
            inst.reads_rs = true;
            inst.writes_rt = true;
            inst.is_load = true;
        }
        Sw | Sh | Sb => {
            inst.reads_rs = true;
            inst.reads_rt = true;
            inst.is_store = true;
        }
        Beq | Bne => {
            inst.reads_rs = true;
            inst.reads_rt = true;
            inst.is_branch = true;
        }
        Blez | Bgtz | Bltz | Bgez => {
            inst.reads_rs = true;
            inst.is_branch = true;
        }
        Op::J | Jal => inst.is_jump = true,
        Op::Break | Op::Nop | Op::Unknown => {}
    }
}
