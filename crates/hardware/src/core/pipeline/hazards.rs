//! Data hazard detection and forwarding.
//!
//! This module implements the decisions the hazard unit makes each cycle:
//! 1. **Forwarding:** For each ALU operand, pick the youngest in-flight
//!    result that targets the operand's register (EX/MEM beats MEM/WB beats
//!    the register file).
//! 2. **Load-use stall:** A load's value only exists after its memory
//!    stage; a dependent instruction one slot behind must wait one cycle.
//!
//! Control hazards are resolved by the decode and execute stages themselves
//! (jump redirect at ID, branch resolution at EX); the engine applies the
//! resulting flushes.

use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::isa::abi;
use crate::isa::decode::decode;

/// Where an ALU operand is sourced from this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Forward {
    /// The register value read at decode is current.
    #[default]
    None,
    /// Bypass from the EX/MEM latch (result computed last cycle).
    FromExMem,
    /// Bypass from the MEM/WB latch (result computed two cycles ago, or a
    /// load's memory data).
    FromMemWb,
}

/// Picks the forwarding source for one source register.
///
/// Forwarding applies only when the producer actually writes the register,
/// the register numbers match, and the register is not `$zero`. Loads
/// cannot forward from EX/MEM (their value does not exist until after the
/// memory stage); that is exactly the case the load-use stall covers.
fn forward_for(reg: usize, reads: bool, ex_mem: &ExMem, mem_wb: &MemWb) -> Forward {
    if !reads || reg == abi::REG_ZERO {
        return Forward::None;
    }
    if ex_mem.valid && ex_mem.ctrl.reg_write && !ex_mem.ctrl.mem_read && ex_mem.dest == Some(reg) {
        return Forward::FromExMem;
    }
    if mem_wb.valid && mem_wb.ctrl.reg_write && mem_wb.dest == Some(reg) {
        return Forward::FromMemWb;
    }
    Forward::None
}

/// Forwarding decisions for the instruction entering execute: one source
/// per operand register (`rs`, `rt`).
pub fn forwards(id_ex: &IdEx, ex_mem: &ExMem, mem_wb: &MemWb) -> (Forward, Forward) {
    (
        forward_for(id_ex.inst.rs, id_ex.inst.reads_rs, ex_mem, mem_wb),
        forward_for(id_ex.inst.rt, id_ex.inst.reads_rt, ex_mem, mem_wb),
    )
}

/// Checks whether a load-use stall is required this cycle.
///
/// True when the instruction about to execute is a load and the instruction
/// about to decode reads the load's destination. The engine then freezes
/// the PC and the IF/ID latch and injects one bubble into ID/EX.
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    if !id_ex.valid || !id_ex.inst.is_load || !if_id.valid {
        return false;
    }
    let Some(dest) = id_ex.dest else {
        return false;
    };
    if dest == abi::REG_ZERO {
        return false;
    }

    let next = decode(if_id.raw, if_id.pc);
    (next.reads_rs && next.rs == dest) || (next.reads_rt && next.rt == dest)
}
