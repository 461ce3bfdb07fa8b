//! REGIMM `rt` selectors (valid when the primary opcode is 0x01).

/// Branch if less than zero.
pub const BLTZ: u32 = 0x00;
/// Branch if greater than or equal to zero.
pub const BGEZ: u32 = 0x01;
