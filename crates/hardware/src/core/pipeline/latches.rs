//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the four buffers connecting the five stages. Each
//! latch carries a `valid` flag: an invalid latch is a bubble, occupying a
//! stage slot without retiring. Latches are plain `Copy` records; every
//! cycle reads the previous cycle's latches and produces the next cycle's.

use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::Instruction;

/// IF/ID latch (fetch to decode).
#[derive(Clone, Copy, Debug, Default)]
pub struct IfId {
    /// Latch holds a real instruction (false = bubble).
    pub valid: bool,
    /// Address the word was fetched from.
    pub pc: u32,
    /// Raw instruction word.
    pub raw: u32,
    /// Direction the predictor chose for this word at fetch time.
    pub pred_taken: bool,
}

/// ID/EX latch (decode to execute).
#[derive(Clone, Copy, Debug, Default)]
pub struct IdEx {
    /// Latch holds a real instruction (false = bubble).
    pub valid: bool,
    /// Instruction address.
    pub pc: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// `rs` register value read at decode.
    pub rs_val: u32,
    /// `rt` register value read at decode.
    pub rt_val: u32,
    /// Operative immediate prepared by decode (sign-extended,
    /// zero-extended, or LUI-shifted as the operation requires).
    pub imm: i32,
    /// Destination register, if the instruction writes one.
    pub dest: Option<usize>,
    /// Control signals for the downstream stages.
    pub ctrl: ControlSignals,
    /// Fetch-time predicted direction, compared at branch resolution.
    pub pred_taken: bool,
}

/// EX/MEM latch (execute to memory).
#[derive(Clone, Copy, Debug, Default)]
pub struct ExMem {
    /// Latch holds a real instruction (false = bubble).
    pub valid: bool,
    /// Instruction address.
    pub pc: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// ALU result (memory address for loads and stores, link value for
    /// linking jumps).
    pub alu: u32,
    /// Forwarded `rt` value carried for stores.
    pub rt_val: u32,
    /// Destination register, if any.
    pub dest: Option<usize>,
    /// Control signals for memory and writeback.
    pub ctrl: ControlSignals,
    /// ALU zero flag.
    pub zero: bool,
}

/// MEM/WB latch (memory to writeback).
#[derive(Clone, Copy, Debug, Default)]
pub struct MemWb {
    /// Latch holds a real instruction (false = bubble).
    pub valid: bool,
    /// Instruction address.
    pub pc: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// ALU result.
    pub alu: u32,
    /// Value loaded from memory, when the instruction was a load.
    pub mem_data: u32,
    /// Destination register, if any.
    pub dest: Option<usize>,
    /// Control signals for writeback.
    pub ctrl: ControlSignals,
}

impl IfId {
    /// An empty latch slot.
    pub fn bubble() -> Self {
        Self::default()
    }
}

impl IdEx {
    /// An empty latch slot.
    pub fn bubble() -> Self {
        Self::default()
    }
}

impl ExMem {
    /// An empty latch slot.
    pub fn bubble() -> Self {
        Self::default()
    }
}

impl MemWb {
    /// An empty latch slot.
    pub fn bubble() -> Self {
        Self::default()
    }
}
