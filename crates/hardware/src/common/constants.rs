//! Global system constants.
//!
//! This module defines system-wide constants used across the simulator:
//! 1. **Instruction Fields:** Shifts and masks for MIPS-I field extraction.
//! 2. **Memory Geometry:** Word size and the jump-region mask.

/// Size of one instruction word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Number of architectural general-purpose registers.
pub const REG_COUNT: usize = 32;

/// Bit position of the opcode field (bits 31:26).
pub const OPCODE_SHIFT: u32 = 26;

/// Bit position of the `rs` register field (bits 25:21).
pub const RS_SHIFT: u32 = 21;

/// Bit position of the `rt` register field (bits 20:16).
pub const RT_SHIFT: u32 = 16;

/// Bit position of the `rd` register field (bits 15:11).
pub const RD_SHIFT: u32 = 11;

/// Bit position of the shift-amount field (bits 10:6).
pub const SHAMT_SHIFT: u32 = 6;

/// Mask for the 6-bit opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;

/// Mask for a 5-bit register index field after shifting.
pub const REG_MASK: u32 = 0x1F;

/// Mask for the 6-bit funct field (bits 5:0).
pub const FUNCT_MASK: u32 = 0x3F;

/// Mask for the 16-bit immediate field (bits 15:0).
pub const IMM_MASK: u32 = 0xFFFF;

/// Mask for the 26-bit jump-target field (bits 25:0).
pub const JTARGET_MASK: u32 = 0x03FF_FFFF;

/// Upper-nibble region bits kept from PC+4 when forming a J/JAL target.
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Left shift applied to branch offsets and jump targets (word alignment).
pub const TARGET_SHIFT: u32 = 2;
