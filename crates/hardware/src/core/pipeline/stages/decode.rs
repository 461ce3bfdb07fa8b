//! Instruction decode (ID) stage.
//!
//! This stage performs the following:
//! 1. **Decoding:** The raw IF/ID word into an [`Instruction`].
//! 2. **Register Read:** Source operands from the register file, observing
//!    the same-cycle writeback (the engine runs WB first).
//! 3. **Control Generation:** ALU, memory, and flow control signals plus
//!    the operative immediate.
//! 4. **Jump Resolution:** Direct jumps (J, JAL) redirect the PC here,
//!    squashing the single wrong-path word fetch.

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::{IdEx, IfId};
use crate::core::pipeline::signals::{AluOp, ControlSignals, MemWidth, OpASrc, OpBSrc};
use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, Op};

/// Result of the decode stage: the next ID/EX latch, plus a redirect
/// target when a direct jump resolved.
pub struct IdOutput {
    /// Next ID/EX latch contents.
    pub id_ex: IdEx,
    /// PC redirect from a J/JAL resolved this cycle.
    pub redirect: Option<u32>,
}

impl IdOutput {
    fn bubble() -> Self {
        Self {
            id_ex: IdEx::bubble(),
            redirect: None,
        }
    }
}

/// Executes the decode stage.
pub fn decode_stage(cpu: &mut Cpu, if_id: &IfId) -> IdOutput {
    if !if_id.valid {
        return IdOutput::bubble();
    }

    let inst = decode(if_id.raw, if_id.pc);
    if inst.op == Op::Unknown {
        cpu.stats.decode_anomalies += 1;
        tracing::debug!(pc = if_id.pc, raw = if_id.raw, "unknown encoding executed as nop");
    }

    let (ctrl, imm) = control_for(&inst);
    let rs_val = cpu.regs.read(inst.rs);
    let rt_val = cpu.regs.read(inst.rt);

    if cpu.trace {
        eprintln!("ID  pc={:#010x} {}", if_id.pc, crate::isa::disasm::disassemble(if_id.raw));
    }

    // J and JAL resolve here: the word fetched this same cycle is on the
    // wrong path and the engine squashes it (one bubble).
    let redirect = match inst.op {
        Op::J | Op::Jal => Some(inst.jump_target()),
        _ => None,
    };

    IdOutput {
        id_ex: IdEx {
            valid: true,
            pc: if_id.pc,
            inst,
            rs_val,
            rt_val,
            imm,
            dest: inst.dest_reg(),
            ctrl,
            pred_taken: if_id.pred_taken,
        },
        redirect,
    }
}

/// Derives the control signals and operative immediate for an instruction.
///
/// Shared with the single-cycle interpreter path so both execution modes
/// agree on semantics by construction.
pub fn control_for(inst: &Instruction) -> (ControlSignals, i32) {
    let mut c = ControlSignals::default();
    let mut imm = inst.imm_se();

    match inst.op {
        Op::Add | Op::Addu => rtype(&mut c, AluOp::Add),
        Op::Sub | Op::Subu => rtype(&mut c, AluOp::Sub),
        Op::And => rtype(&mut c, AluOp::And),
        Op::Or => rtype(&mut c, AluOp::Or),
        Op::Nor => rtype(&mut c, AluOp::Nor),
        Op::Xor => rtype(&mut c, AluOp::Xor),
        Op::Slt => rtype(&mut c, AluOp::Slt),
        Op::Sltu => rtype(&mut c, AluOp::Sltu),

        Op::Sll | Op::Srl | Op::Sra => {
            c.reg_write = true;
            c.alu = match inst.op {
                Op::Sll => AluOp::Sll,
                Op::Srl => AluOp::Srl,
                _ => AluOp::Sra,
            };
            c.a_src = OpASrc::Rt;
            c.b_src = OpBSrc::Shamt;
        }

        Op::Addi | Op::Addiu => itype(&mut c, AluOp::Add),
        Op::Slti => itype(&mut c, AluOp::Slt),
        Op::Sltiu => itype(&mut c, AluOp::Sltu),
        Op::Andi => {
            itype(&mut c, AluOp::And);
            imm = inst.imm_zx() as i32;
        }
        Op::Ori => {
            itype(&mut c, AluOp::Or);
            imm = inst.imm_zx() as i32;
        }
        Op::Xori => {
            itype(&mut c, AluOp::Xor);
            imm = inst.imm_zx() as i32;
        }

        Op::Lui => {
            c.reg_write = true;
            c.a_src = OpASrc::Zero;
            c.b_src = OpBSrc::Imm;
            imm = (inst.imm_zx() << 16) as i32;
        }

        Op::Lw | Op::Lh | Op::Lb | Op::Lbu | Op::Lhu => {
            c.reg_write = true;
            c.mem_read = true;
            c.b_src = OpBSrc::Imm;
            c.width = match inst.op {
                Op::Lw => MemWidth::Word,
                Op::Lh | Op::Lhu => MemWidth::Half,
                _ => MemWidth::Byte,
            };
            c.signed_load = matches!(inst.op, Op::Lw | Op::Lh | Op::Lb);
        }

        Op::Sw | Op::Sh | Op::Sb => {
            c.mem_write = true;
            c.b_src = OpBSrc::Imm;
            c.width = match inst.op {
                Op::Sw => MemWidth::Word,
                Op::Sh => MemWidth::Half,
                _ => MemWidth::Byte,
            };
        }

        Op::Beq | Op::Bne | Op::Blez | Op::Bgtz | Op::Bltz | Op::Bgez => {
            c.branch = true;
            c.alu = AluOp::Sub;
        }

        Op::Jr => c.jump = true,
        Op::Jalr => {
            c.jump = true;
            c.link = true;
            c.reg_write = true;
        }
        Op::J => c.jump = true,
        Op::Jal => {
            c.jump = true;
            c.link = true;
            c.reg_write = true;
        }

        Op::Break | Op::Nop | Op::Unknown => {}
    }

    (c, imm)
}

fn rtype(c: &mut ControlSignals, alu: AluOp) {
    c.reg_write = true;
    c.alu = alu;
    c.a_src = OpASrc::Rs;
    c.b_src = OpBSrc::Rt;
}

fn itype(c: &mut ControlSignals, alu: AluOp) {
    c.reg_write = true;
    c.alu = alu;
    c.a_src = OpASrc::Rs;
    c.b_src = OpBSrc::Imm;
}
