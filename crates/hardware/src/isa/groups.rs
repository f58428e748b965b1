//! Instruction classification for the analytics layer.
//!
//! Every implemented `(op, func)` pair belongs to exactly one execution
//! group, and each group declares which operand fields it reads and writes.
//! The dual-issue checker works entirely on these masks; the hazard rules use
//! the narrower opcode sets below. All tables are total `match` functions, so
//! there is no runtime table construction.

use crate::isa::instruction::Instruction;
use crate::isa::opcodes::*;

/// Operand capability bits used by group masks.
///
/// `ACC` stands for the HI/LO pair treated as a single structural resource.
pub mod mask {
    /// The `rs` field.
    pub const RS: u8 = 1 << 0;
    /// The `rt` field.
    pub const RT: u8 = 1 << 1;
    /// The `rd` field.
    pub const RD: u8 = 1 << 2;
    /// The HI/LO accumulator pair.
    pub const ACC: u8 = 1 << 3;
    /// No operands.
    pub const NONE: u8 = 0;
}

/// Execution groups over the implemented MIPS32 subset.
///
/// Two instructions of the same group contend for the same function unit and
/// cannot dual-issue, with the exception of the two ALU groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecGroup {
    /// Three-register ALU operations (add, sub, logic, set-on-less-than).
    ArithLog,
    /// Multiply/divide writing the HI/LO pair.
    DivMult,
    /// Shifts by immediate amount.
    Shift,
    /// Shifts by register amount.
    ShiftV,
    /// Register-indirect jumps (jr, jalr).
    JumpR,
    /// Moves out of HI/LO (mfhi, mflo).
    MoveFrom,
    /// Moves into HI/LO (mthi, mtlo).
    MoveTo,
    /// ALU operations with immediate operand.
    ArithLogI,
    /// Pure immediate loads (lui).
    LoadI,
    /// Two-operand conditional branches (beq, bne).
    Branch,
    /// Compare-against-zero branches (blez, bgtz, and the op 0x01 family).
    BranchZ,
    /// Memory loads and stores.
    LoadStore,
    /// Pseudo-absolute jumps (j, jal).
    Jump,
    /// syscall and break.
    Trap,
}

impl ExecGroup {
    /// Returns the operand-capability mask this group reads.
    pub fn reads(self) -> u8 {
        match self {
            ExecGroup::ArithLog
            | ExecGroup::DivMult
            | ExecGroup::ShiftV
            | ExecGroup::Branch
            | ExecGroup::LoadStore => mask::RS | mask::RT,
            ExecGroup::Shift => mask::RT,
            ExecGroup::JumpR | ExecGroup::MoveTo | ExecGroup::ArithLogI | ExecGroup::BranchZ => {
                mask::RS
            }
            ExecGroup::MoveFrom => mask::ACC,
            ExecGroup::LoadI | ExecGroup::Jump | ExecGroup::Trap => mask::NONE,
        }
    }

    /// Returns the operand-capability mask this group writes.
    pub fn writes(self) -> u8 {
        match self {
            ExecGroup::ArithLog
            | ExecGroup::Shift
            | ExecGroup::ShiftV
            | ExecGroup::MoveFrom
            | ExecGroup::JumpR => mask::RD,
            ExecGroup::DivMult | ExecGroup::MoveTo => mask::ACC,
            ExecGroup::ArithLogI | ExecGroup::LoadI | ExecGroup::LoadStore => mask::RT,
            ExecGroup::Branch | ExecGroup::BranchZ | ExecGroup::Jump | ExecGroup::Trap => {
                mask::NONE
            }
        }
    }
}

/// Classifies a record into its execution group.
///
/// Returns `None` for encodings outside the implemented subset; the
/// dual-issue checker refuses to pair unknown instructions.
pub fn classify(inst: &Instruction) -> Option<ExecGroup> {
    match *inst {
        Instruction::R { func, .. } => match func {
            FUNC_ADD | FUNC_ADDU | FUNC_SUB | FUNC_SUBU | FUNC_AND | FUNC_OR | FUNC_XOR
            | FUNC_NOR | FUNC_SLT | FUNC_SLTU => Some(ExecGroup::ArithLog),
            FUNC_MULT | FUNC_MULTU | FUNC_DIV | FUNC_DIVU => Some(ExecGroup::DivMult),
            FUNC_SLL | FUNC_SRL | FUNC_SRA => Some(ExecGroup::Shift),
            FUNC_SLLV | FUNC_SRLV | FUNC_SRAV => Some(ExecGroup::ShiftV),
            FUNC_JR | FUNC_JALR => Some(ExecGroup::JumpR),
            FUNC_MFHI | FUNC_MFLO => Some(ExecGroup::MoveFrom),
            FUNC_MTHI | FUNC_MTLO => Some(ExecGroup::MoveTo),
            FUNC_SYSCALL | FUNC_BREAK => Some(ExecGroup::Trap),
            _ => None,
        },
        Instruction::I { op, .. } => match op {
            OP_ADDI | OP_ADDIU | OP_SLTI | OP_SLTIU | OP_ANDI | OP_ORI | OP_XORI => {
                Some(ExecGroup::ArithLogI)
            }
            OP_LUI => Some(ExecGroup::LoadI),
            OP_BEQ | OP_BNE => Some(ExecGroup::Branch),
            OP_REGIMM | OP_BLEZ | OP_BGTZ => Some(ExecGroup::BranchZ),
            OP_LB | OP_LH | OP_LWL | OP_LW | OP_LBU | OP_LHU | OP_LWR | OP_SB | OP_SH | OP_SWL
            | OP_SW | OP_SWR => Some(ExecGroup::LoadStore),
            _ => None,
        },
        Instruction::J { op, .. } => match op {
            OP_J | OP_JAL => Some(ExecGroup::Jump),
            _ => None,
        },
    }
}

/// Returns true for `(op, func)` pairs that commit no register update.
///
/// Stores, conditional branches, `jr`, `syscall`, and `break` produce no
/// architectural register result, so the write-timestamp table ignores them.
/// The op 0x01 family is listed wholesale; its link variants write `$ra`
/// outside the record's fields and are not timestamp-tracked.
pub fn commits_no_write(op: u32, func: u32) -> bool {
    matches!(
        (op, func),
        (OP_SPECIAL, FUNC_JR)
            | (OP_SPECIAL, FUNC_SYSCALL)
            | (OP_SPECIAL, FUNC_BREAK)
            | (OP_REGIMM, 0)
            | (OP_BEQ, 0)
            | (OP_BNE, 0)
            | (OP_BLEZ, 0)
            | (OP_BGTZ, 0)
            | (OP_SB, 0)
            | (OP_SH, 0)
            | (OP_SWL, 0)
            | (OP_SW, 0)
            | (OP_SWR, 0)
    )
}

/// Returns true for the conditional-branch major opcodes.
pub fn is_conditional_branch(op: u32) -> bool {
    matches!(op, OP_REGIMM | OP_BEQ | OP_BNE | OP_BLEZ | OP_BGTZ)
}

/// Returns true for the plain load opcodes whose results feed the load-use
/// hazard rule.
pub fn is_load(op: u32) -> bool {
    matches!(op, OP_LB | OP_LH | OP_LW | OP_LBU | OP_LHU)
}

/// Returns true for the store opcodes.
pub fn is_store(op: u32) -> bool {
    matches!(op, OP_SB | OP_SH | OP_SWL | OP_SW | OP_SWR)
}
