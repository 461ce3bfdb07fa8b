//! The five-stage pipeline state machine.
//!
//! Owns the four inter-stage latches and advances them one cycle at a time.
//! Within a tick the stages run in reverse order (WB, MEM, EX, ID, IF) so
//! each reads the previous cycle's latches, and the register-file write in
//! WB lands before the read in ID — the write-before-read convention.
//!
//! Redirect policy, applied after the stages have produced the next-cycle
//! latches:
//! - Execute redirects (mispredicted branch, JR/JALR) squash both IF/ID
//!   and ID/EX: exactly two bubbles.
//! - Decode redirects (J, JAL) squash only IF/ID: exactly one bubble.
//! - An execute redirect wins over a decode redirect in the same cycle;
//!   the decoded jump was on the wrong path and is squashed with it.

use crate::core::cpu::Cpu;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::stages::decode::decode_stage;
use crate::core::pipeline::stages::execute::execute_stage;
use crate::core::pipeline::stages::fetch::fetch_stage;
use crate::core::pipeline::stages::memory::mem_stage;
use crate::core::pipeline::stages::writeback::writeback_stage;

/// The pipeline: four latches between five stages.
#[derive(Default)]
pub struct Pipeline {
    /// Fetch to decode.
    pub if_id: IfId,
    /// Decode to execute.
    pub id_ex: IdEx,
    /// Execute to memory.
    pub ex_mem: ExMem,
    /// Memory to writeback.
    pub mem_wb: MemWb,
}

impl Pipeline {
    /// Creates an empty (fully drained) pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every latch to a bubble.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when every latch is a bubble.
    pub fn is_drained(&self) -> bool {
        !self.if_id.valid && !self.id_ex.valid && !self.ex_mem.valid && !self.mem_wb.valid
    }

    /// Advances the pipeline by one cycle.
    pub fn tick(&mut self, cpu: &mut Cpu) {
        // Load-use stall decision is made against the latches as they stand
        // at the start of the cycle: the load about to execute versus the
        // consumer about to decode.
        let stall = hazards::need_stall_load_use(&self.id_ex, &self.if_id);

        let wb = writeback_stage(cpu, &self.mem_wb);
        if wb.halt {
            // BREAK retires: stop before any younger instruction has
            // architectural effect. The PC rolls back from speculative
            // fetch to the word after the break.
            cpu.pc = self.mem_wb.pc.wrapping_add(4);
            self.reset();
            cpu.halted = true;
            tracing::debug!(cycles = cpu.stats.cycles, "break retired, halting");
            return;
        }

        let new_mem_wb = mem_stage(cpu, &self.ex_mem);
        let ex_out = execute_stage(cpu, &self.id_ex, &self.ex_mem, &self.mem_wb);

        let (id_out, new_if_id) = if stall {
            cpu.stats.hazards.stalls += 1;
            cpu.stats.hazards.data_hazards += 1;
            // Freeze the PC and IF/ID; the bubble goes into ID/EX.
            (
                crate::core::pipeline::stages::decode::IdOutput {
                    id_ex: IdEx::bubble(),
                    redirect: None,
                },
                self.if_id,
            )
        } else {
            let id_out = decode_stage(cpu, &self.if_id);
            let new_if_id = fetch_stage(cpu);
            (id_out, new_if_id)
        };

        self.mem_wb = new_mem_wb;
        self.ex_mem = ex_out.ex_mem;
        self.id_ex = id_out.id_ex;
        self.if_id = new_if_id;

        if let Some(target) = ex_out.redirect {
            // Branch mispredict or register jump: two bubbles.
            self.if_id = IfId::bubble();
            self.id_ex = IdEx::bubble();
            cpu.pc = target;
            cpu.stats.hazards.control_hazards += 1;
            cpu.stats.hazards.flushes += 1;
        } else if let Some(target) = id_out.redirect {
            // Direct jump: one bubble.
            self.if_id = IfId::bubble();
            cpu.pc = target;
            cpu.stats.hazards.control_hazards += 1;
            cpu.stats.hazards.flushes += 1;
        }

        // Normal completion: the PC has run off the program text and the
        // last in-flight instruction has retired.
        if !cpu.in_text(cpu.pc) && self.is_drained() {
            cpu.halted = true;
        }
    }
}
