//! MIPS32 instruction decoder.
//!
//! This module extracts the fields of a raw 32-bit instruction word into an
//! [`Instruction`] record. The encoding form follows from the major opcode:
//! 0x00 is the R form, 0x02/0x03 (j/jal) the J form, everything else the
//! I form. The 16-bit immediate is sign-extended during decode.

use crate::isa::instruction::Instruction;
use crate::isa::opcodes::{OP_J, OP_JAL, OP_SPECIAL};

/// Bit shift of the major opcode field (bits 31-26).
const OP_SHIFT: u32 = 26;
/// Bit shift of the `rs` field (bits 25-21).
const RS_SHIFT: u32 = 21;
/// Bit shift of the `rt` field (bits 20-16).
const RT_SHIFT: u32 = 16;
/// Bit shift of the `rd` field (bits 15-11).
const RD_SHIFT: u32 = 11;
/// Bit shift of the `shamt` field (bits 10-6).
const SHAMT_SHIFT: u32 = 6;
/// Mask of every 5-bit register/shamt field.
const FIELD_MASK: u32 = 0x1F;
/// Mask of the 6-bit function field.
const FUNC_MASK: u32 = 0x3F;
/// Mask of the 26-bit J-form target field.
const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Decodes a raw instruction word into an [`Instruction`] record.
///
/// Decoding never fails: unknown opcodes still have a well-defined form and
/// are rejected later by execution as reserved instructions.
pub fn decode(raw: u32) -> Instruction {
    let op = raw >> OP_SHIFT;
    match op {
        OP_SPECIAL => Instruction::R {
            op,
            rs: (raw >> RS_SHIFT) & FIELD_MASK,
            rt: (raw >> RT_SHIFT) & FIELD_MASK,
            rd: (raw >> RD_SHIFT) & FIELD_MASK,
            shamt: (raw >> SHAMT_SHIFT) & FIELD_MASK,
            func: raw & FUNC_MASK,
        },
        OP_J | OP_JAL => Instruction::J {
            op,
            addr: raw & TARGET_MASK,
        },
        _ => Instruction::I {
            op,
            rs: (raw >> RS_SHIFT) & FIELD_MASK,
            rt: (raw >> RT_SHIFT) & FIELD_MASK,
            imm: (raw & 0xFFFF) as u16 as i16 as i32,
        },
    }
}
