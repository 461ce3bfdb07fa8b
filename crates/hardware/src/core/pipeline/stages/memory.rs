//! Memory access (MEM) stage.
//!
//! Performs the load or store an instruction carries, one cycle per access.
//! The ALU result is the effective address; loads extend the value to 32
//! bits according to the access width and signedness, stores truncate the
//! forwarded `rt` value to the access width.

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::core::pipeline::signals::MemWidth;
use crate::mem::Memory;

/// Executes the memory stage, returning the next MEM/WB latch.
pub fn mem_stage(cpu: &mut Cpu, ex_mem: &ExMem) -> MemWb {
    if !ex_mem.valid {
        return MemWb::bubble();
    }

    let mut mem_data = 0;
    if ex_mem.ctrl.mem_read {
        mem_data = load_value(
            &mut cpu.mem,
            ex_mem.alu,
            ex_mem.ctrl.width,
            ex_mem.ctrl.signed_load,
        );
        if cpu.trace {
            eprintln!(
                "MEM pc={:#010x} load [{:#010x}] -> {:#010x}",
                ex_mem.pc, ex_mem.alu, mem_data
            );
        }
    }
    if ex_mem.ctrl.mem_write {
        store_value(&mut cpu.mem, ex_mem.alu, ex_mem.ctrl.width, ex_mem.rt_val);
        if cpu.trace {
            eprintln!(
                "MEM pc={:#010x} store [{:#010x}] <- {:#010x}",
                ex_mem.pc, ex_mem.alu, ex_mem.rt_val
            );
        }
    }

    MemWb {
        valid: true,
        pc: ex_mem.pc,
        inst: ex_mem.inst,
        alu: ex_mem.alu,
        mem_data,
        dest: ex_mem.dest,
        ctrl: ex_mem.ctrl,
    }
}

/// Reads a value of the given width, extending it to 32 bits.
///
/// Shared with the single-cycle interpreter path.
pub fn load_value(mem: &mut Memory, addr: u32, width: MemWidth, signed: bool) -> u32 {
    match (width, signed) {
        (MemWidth::Word, _) => mem.read_word(addr),
        (MemWidth::Half, true) => i32::from(mem.read_half(addr) as i16) as u32,
        (MemWidth::Half, false) => u32::from(mem.read_half(addr)),
        (MemWidth::Byte, true) => i32::from(mem.read_byte(addr) as i8) as u32,
        (MemWidth::Byte, false) => u32::from(mem.read_byte(addr)),
    }
}

/// Writes the low bits of `val` at the given width.
///
/// Shared with the single-cycle interpreter path.
pub fn store_value(mem: &mut Memory, addr: u32, width: MemWidth, val: u32) {
    match width {
        MemWidth::Word => mem.write_word(addr, val),
        MemWidth::Half => mem.write_half(addr, val as u16),
        MemWidth::Byte => mem.write_byte(addr, val as u8),
    }
}
