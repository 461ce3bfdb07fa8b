//! MIPS-I instruction set: encodings, decode, disassembly, ABI names.
//!
//! This module owns everything that is a property of the architecture rather
//! than of the machine executing it:
//! 1. **Encodings:** Opcode, funct, and REGIMM constants (`mips1`).
//! 2. **Decode:** Raw 32-bit words into [`instruction::Instruction`] values.
//! 3. **Disassembly:** Words back into assembler text for traces and tests.
//! 4. **ABI:** Conventional register names and indices.

/// Conventional register names and well-known register indices.
pub mod abi;
/// Instruction decoder.
pub mod decode;
/// Instruction disassembler.
pub mod disasm;
/// Decoded instruction representation and raw-field extraction.
pub mod instruction;
/// MIPS-I opcode and funct encodings.
pub mod mips1;
