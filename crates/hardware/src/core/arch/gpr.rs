//! General-purpose register file.
//!
//! This module implements the 32-entry architectural register file:
//! 1. **Storage:** 32 registers of 32 bits (`$0`–`$31`).
//! 2. **Invariant Enforcement:** Register `$zero` is hardwired to zero.
//! 3. **Observability:** Whole-state snapshots and a debug dump.

use crate::common::constants::REG_COUNT;
use crate::isa::abi;

/// The architectural register file.
///
/// Register `$zero` always reads as zero and silently discards writes.
/// Within one pipeline cycle the writeback stage runs before decode reads
/// the file, which yields the conventional write-before-read forwarding.
#[derive(Clone, Debug)]
pub struct Gpr {
    regs: [u32; REG_COUNT],
}

impl Gpr {
    /// Creates a register file with every register zeroed.
    pub fn new() -> Self {
        Self {
            regs: [0; REG_COUNT],
        }
    }

    /// Reads a register. Register `$zero` always returns 0.
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        if idx == abi::REG_ZERO { 0 } else { self.regs[idx] }
    }

    /// Writes a register. Writes to `$zero` are discarded.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != abi::REG_ZERO {
            self.regs[idx] = val;
        }
    }

    /// Zeroes every register.
    pub fn clear(&mut self) {
        self.regs = [0; REG_COUNT];
    }

    /// Snapshot of the whole register file for inspection.
    pub fn snapshot(&self) -> [u32; REG_COUNT] {
        self.regs
    }

    /// Dumps all registers to stderr, four per line.
    pub fn dump(&self) {
        for row in 0..8 {
            let i = row * 4;
            eprintln!(
                "{:>5}={:#010x} {:>5}={:#010x} {:>5}={:#010x} {:>5}={:#010x}",
                abi::reg_name(i),
                self.regs[i],
                abi::reg_name(i + 1),
                self.regs[i + 1],
                abi::reg_name(i + 2),
                self.regs[i + 2],
                abi::reg_name(i + 3),
                self.regs[i + 3],
            );
        }
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
