//! Instruction fetch (IF) stage.
//!
//! Fetches the word at the current PC and selects the speculative next PC.
//! Conditional branches consult the branch predictor: a predicted-taken
//! branch redirects fetch to its target immediately, so a correctly
//! predicted taken branch costs nothing. Unconditional jumps are resolved
//! one stage later, at decode.
//!
//! Fetch stops (producing bubbles) once the PC leaves the program text,
//! which lets the pipeline drain and the engine detect completion.

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::IfId;
use crate::isa::decode::decode;

/// Executes the fetch stage, returning the next IF/ID latch.
///
/// Advances `cpu.pc` to the speculative next PC. The engine overrides that
/// speculation when decode or execute report a redirect for this cycle.
pub fn fetch_stage(cpu: &mut Cpu) -> IfId {
    let pc = cpu.pc;
    if !cpu.in_text(pc) {
        return IfId::bubble();
    }

    let raw = cpu.mem.read_word(pc);
    let inst = decode(raw, pc);

    let mut pred_taken = false;
    let mut next_pc = pc.wrapping_add(4);
    if inst.is_branch {
        let target = inst.branch_target();
        pred_taken = cpu.bp.predict(pc, target);
        if pred_taken {
            next_pc = target;
        }
    }

    if cpu.trace {
        eprintln!("IF  pc={pc:#010x} inst={raw:#010x}");
    }

    cpu.pc = next_pc;
    IfId {
        valid: true,
        pc,
        raw,
        pred_taken,
    }
}
