//! MIPS-I integer instruction encodings.
//!
//! Constants for the three encoding selectors of the base integer set:
//! primary opcodes (bits 31:26), SPECIAL funct codes (bits 5:0, used when the
//! opcode is zero), and REGIMM `rt` selectors (used when the opcode is one).

/// SPECIAL funct codes (opcode 0x00).
pub mod funct;
/// Primary opcodes.
pub mod opcodes;
/// REGIMM `rt` selectors (opcode 0x01).
pub mod regimm;
