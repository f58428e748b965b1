//! The retired-instruction record.
//!
//! One record describes one retired instruction in whichever of the three
//! MIPS32 encoding forms it uses. The analytics layer consumes records; the
//! execution layer pattern-matches them directly.

use std::fmt;

/// A decoded MIPS32 instruction in one of the three encoding forms.
///
/// The immediate of the I form is the 16-bit field sign-extended to 32 bits;
/// the J-form address is the raw 26-bit field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Register form: `op` 0x00, operation selected by `func`.
    R {
        /// Major opcode (always 0x00 for this form).
        op: u32,
        /// First source register.
        rs: u32,
        /// Second source register.
        rt: u32,
        /// Destination register.
        rd: u32,
        /// Shift amount.
        shamt: u32,
        /// Function code.
        func: u32,
    },
    /// Immediate form.
    I {
        /// Major opcode.
        op: u32,
        /// Source register.
        rs: u32,
        /// Target register (destination, store source, or branch operand).
        rt: u32,
        /// Sign-extended 16-bit immediate.
        imm: i32,
    },
    /// Jump form.
    J {
        /// Major opcode.
        op: u32,
        /// 26-bit pseudo-absolute target field.
        addr: u32,
    },
}

impl Instruction {
    /// Returns the major opcode.
    pub fn op(&self) -> u32 {
        match *self {
            Instruction::R { op, .. } | Instruction::I { op, .. } | Instruction::J { op, .. } => op,
        }
    }

    /// Returns the `rs` field, or 0 for the J form.
    pub fn rs(&self) -> u32 {
        match *self {
            Instruction::R { rs, .. } | Instruction::I { rs, .. } => rs,
            Instruction::J { .. } => 0,
        }
    }

    /// Returns the `rt` field, or 0 for the J form.
    pub fn rt(&self) -> u32 {
        match *self {
            Instruction::R { rt, .. } | Instruction::I { rt, .. } => rt,
            Instruction::J { .. } => 0,
        }
    }

    /// Returns the function code, or 0 for the I and J forms.
    ///
    /// Together with [`Self::op`] this forms the key used by every opcode
    /// set: R-form instructions are `(0x00, func)`, everything else is
    /// `(op, 0)`.
    pub fn func(&self) -> u32 {
        match *self {
            Instruction::R { func, .. } => func,
            _ => 0,
        }
    }

    /// Returns the `(op, func)` lookup key for this record.
    pub fn key(&self) -> (u32, u32) {
        (self.op(), self.func())
    }

    /// Returns true for the canonical NOP encoding (`sll r0, r0, 0`, an
    /// all-zero word).
    pub fn is_nop(&self) -> bool {
        matches!(
            *self,
            Instruction::R {
                op: 0,
                rs: 0,
                rt: 0,
                rd: 0,
                shamt: 0,
                func: 0,
            }
        )
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::R {
                op,
                rs,
                rt,
                rd,
                shamt,
                func,
            } => write!(
                f,
                "R op={:#04x} rs=r{} rt=r{} rd=r{} shamt={} func={:#04x}",
                op, rs, rt, rd, shamt, func
            ),
            Instruction::I { op, rs, rt, imm } => {
                write!(f, "I op={:#04x} rs=r{} rt=r{} imm={}", op, rs, rt, imm)
            }
            Instruction::J { op, addr } => write!(f, "J op={:#04x} addr={:#09x}", op, addr),
        }
    }
}
