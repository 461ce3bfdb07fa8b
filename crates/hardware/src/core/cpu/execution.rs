//! Single-cycle interpreter path.
//!
//! When the pipeline is disabled the core executes one instruction per
//! cycle: ALU, branch resolution, and memory access all complete within the
//! tick and there is no hazard logic. Decode, ALU, branch, and memory
//! semantics are the same functions the pipeline stages use, so the two
//! paths agree on architectural results by construction.

use crate::core::cpu::Cpu;
use crate::core::pipeline::stages::decode::control_for;
use crate::core::pipeline::stages::execute::branch_taken;
use crate::core::pipeline::stages::memory::{load_value, store_value};
use crate::core::pipeline::signals::{OpASrc, OpBSrc};
use crate::core::units::alu::Alu;
use crate::isa::decode::decode;
use crate::isa::instruction::Op;

/// Executes exactly one instruction.
///
/// Sets `cpu.halted` when the instruction was BREAK or the next PC leaves
/// the program text.
pub fn step_direct(cpu: &mut Cpu) {
    if cpu.halted {
        return;
    }
    if !cpu.in_text(cpu.pc) {
        cpu.halted = true;
        return;
    }

    let pc = cpu.pc;
    let raw = cpu.mem.read_word(pc);
    let inst = decode(raw, pc);
    if inst.op == Op::Unknown {
        cpu.stats.decode_anomalies += 1;
        tracing::debug!(pc, raw, "unknown encoding executed as nop");
    }

    let (ctrl, imm) = control_for(&inst);
    let rs_val = cpu.regs.read(inst.rs);
    let rt_val = cpu.regs.read(inst.rt);
    let mut next_pc = pc.wrapping_add(4);

    if ctrl.branch {
        let target = inst.branch_target();
        let taken = branch_taken(inst.op, rs_val, rt_val);
        cpu.bp.update(pc, taken, target);
        if taken {
            next_pc = target;
        }
    } else if ctrl.jump {
        if ctrl.link {
            if let Some(dest) = inst.dest_reg() {
                cpu.regs.write(dest, inst.link_value());
            }
        }
        next_pc = match inst.op {
            Op::Jr | Op::Jalr => rs_val,
            _ => inst.jump_target(),
        };
    } else if ctrl.mem_read {
        let addr = rs_val.wrapping_add(imm as u32);
        let value = load_value(&mut cpu.mem, addr, ctrl.width, ctrl.signed_load);
        if let Some(dest) = inst.dest_reg() {
            cpu.regs.write(dest, value);
        }
    } else if ctrl.mem_write {
        let addr = rs_val.wrapping_add(imm as u32);
        store_value(&mut cpu.mem, addr, ctrl.width, rt_val);
    } else if ctrl.reg_write {
        let op_a = match ctrl.a_src {
            OpASrc::Rs => rs_val,
            OpASrc::Rt => rt_val,
            OpASrc::Zero => 0,
        };
        let op_b = match ctrl.b_src {
            OpBSrc::Rt => rt_val,
            OpBSrc::Imm => imm as u32,
            OpBSrc::Shamt => inst.shamt,
        };
        let result = Alu::execute(ctrl.alu, op_a, op_b);
        if let Some(dest) = inst.dest_reg() {
            cpu.regs.write(dest, result.value);
        }
    } else if inst.op == Op::Break {
        cpu.halted = true;
    }

    if cpu.trace {
        eprintln!(
            "XX  pc={pc:#010x} {}",
            crate::isa::disasm::disassemble(raw)
        );
    }

    cpu.stats.record_retired(&inst);
    cpu.pc = next_pc;
    if !cpu.in_text(cpu.pc) {
        cpu.halted = true;
    }
}
