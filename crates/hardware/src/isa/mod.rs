//! MIPS32 instruction set definitions.
//!
//! This module gathers everything the simulator knows about instruction
//! encodings. It includes:
//! 1. **Opcodes:** Named constants for major opcodes, function codes, and the
//!    op 0x01 `rt`-field selectors.
//! 2. **Instruction record:** The tagged R/I/J record produced by decode.
//! 3. **Decode:** Field extraction from raw 32-bit instruction words.
//! 4. **Classification:** Execution groups, operand masks, and the opcode
//!    sets consumed by the hazard and dual-issue analytics.

/// Raw instruction word decoding.
pub mod decode;
/// Execution groups, operand masks, and opcode sets.
pub mod groups;
/// The tagged instruction record.
pub mod instruction;
/// Opcode and function-code constants.
pub mod opcodes;

pub use decode::decode;
pub use groups::ExecGroup;
pub use instruction::Instruction;
