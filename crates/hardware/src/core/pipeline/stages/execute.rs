//! Execute (EX) stage.
//!
//! This stage performs the following:
//! 1. **Operand Resolution:** Applies the hazard unit's forwarding
//!    decisions so the ALU never sees a stale register value.
//! 2. **Arithmetic:** Runs the ALU operation selected at decode.
//! 3. **Branch Resolution:** Compares the actual branch outcome against the
//!    fetch-time prediction, trains the predictor, and requests a redirect
//!    on a mispredict.
//! 4. **Register Jumps:** JR/JALR targets come from a register and only
//!    exist here, so they always redirect (two bubbles).

use crate::core::cpu::Cpu;
use crate::core::pipeline::hazards::{self, Forward};
use crate::core::pipeline::latches::{ExMem, IdEx, MemWb};
use crate::core::pipeline::signals::{OpASrc, OpBSrc};
use crate::core::units::alu::Alu;
use crate::isa::instruction::Op;

/// Result of the execute stage: the next EX/MEM latch, plus a redirect
/// target when control speculation failed.
pub struct ExOutput {
    /// Next EX/MEM latch contents.
    pub ex_mem: ExMem,
    /// Corrected PC from a mispredicted branch or a register jump.
    pub redirect: Option<u32>,
}

impl ExOutput {
    fn bubble() -> Self {
        Self {
            ex_mem: ExMem::bubble(),
            redirect: None,
        }
    }
}

/// Executes the execute stage against the previous cycle's downstream
/// latches (forwarding sources).
pub fn execute_stage(cpu: &mut Cpu, id_ex: &IdEx, ex_mem: &ExMem, mem_wb: &MemWb) -> ExOutput {
    if !id_ex.valid {
        return ExOutput::bubble();
    }

    let inst = id_ex.inst;

    let (fwd_rs, fwd_rt) = hazards::forwards(id_ex, ex_mem, mem_wb);
    let rs_val = forwarded(fwd_rs, id_ex.rs_val, ex_mem, mem_wb);
    let rt_val = forwarded(fwd_rt, id_ex.rt_val, ex_mem, mem_wb);

    let applied =
        u64::from(fwd_rs != Forward::None) + u64::from(fwd_rt != Forward::None);
    if applied != 0 {
        cpu.stats.hazards.forwards += applied;
        cpu.stats.hazards.data_hazards += 1;
    }

    let op_a = match id_ex.ctrl.a_src {
        OpASrc::Rs => rs_val,
        OpASrc::Rt => rt_val,
        OpASrc::Zero => 0,
    };
    let op_b = match id_ex.ctrl.b_src {
        OpBSrc::Rt => rt_val,
        OpBSrc::Imm => id_ex.imm as u32,
        OpBSrc::Shamt => inst.shamt,
    };

    let mut result = Alu::execute(id_ex.ctrl.alu, op_a, op_b);
    if id_ex.ctrl.link {
        // JAL/JALR write the second word after the jump.
        result.value = inst.link_value();
    }

    if cpu.trace {
        eprintln!(
            "EX  pc={:#010x} alu={:#010x}",
            id_ex.pc, result.value
        );
    }

    let mut redirect = None;
    if id_ex.ctrl.branch {
        let taken = branch_taken(inst.op, rs_val, rt_val);
        let target = inst.branch_target();
        cpu.bp.update(id_ex.pc, taken, target);

        if taken != id_ex.pred_taken {
            redirect = Some(if taken {
                target
            } else {
                id_ex.pc.wrapping_add(4)
            });
        }
    } else if matches!(inst.op, Op::Jr | Op::Jalr) {
        // Register targets are unpredicted; fetch speculated pc + 4.
        redirect = Some(rs_val);
    }

    ExOutput {
        ex_mem: ExMem {
            valid: true,
            pc: id_ex.pc,
            inst,
            alu: result.value,
            rt_val,
            dest: id_ex.dest,
            ctrl: id_ex.ctrl,
            zero: result.zero,
        },
        redirect,
    }
}

/// Materializes one forwarding decision into an operand value.
fn forwarded(fwd: Forward, reg_val: u32, ex_mem: &ExMem, mem_wb: &MemWb) -> u32 {
    match fwd {
        Forward::None => reg_val,
        Forward::FromExMem => ex_mem.alu,
        Forward::FromMemWb => {
            if mem_wb.ctrl.mem_read {
                mem_wb.mem_data
            } else {
                mem_wb.alu
            }
        }
    }
}

/// Evaluates a conditional branch.
///
/// Shared with the single-cycle interpreter path.
pub fn branch_taken(op: Op, rs_val: u32, rt_val: u32) -> bool {
    let rs = rs_val as i32;
    match op {
        Op::Beq => rs_val == rt_val,
        Op::Bne => rs_val != rt_val,
        Op::Blez => rs <= 0,
        Op::Bgtz => rs > 0,
        Op::Bltz => rs < 0,
        Op::Bgez => rs >= 0,
        _ => false,
    }
}
