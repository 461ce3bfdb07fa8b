//! MIPS o32 ABI register name constants.
//!
//! Defines the conventional register names and the well-known indices the
//! simulator itself needs (link register, stack and global pointers).

/// Register $0 (`$zero`, hardwired to zero).
pub const REG_ZERO: usize = 0;
/// Register $2 (`$v0`, first return value).
pub const REG_V0: usize = 2;
/// Register $4 (`$a0`, first argument).
pub const REG_A0: usize = 4;
/// Register $28 (`$gp`, global pointer).
pub const REG_GP: usize = 28;
/// Register $29 (`$sp`, stack pointer).
pub const REG_SP: usize = 29;
/// Register $31 (`$ra`, return address, written by JAL).
pub const REG_RA: usize = 31;

/// ABI register names for $0–$31.
pub const REG_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Returns the ABI name for a register index.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}
