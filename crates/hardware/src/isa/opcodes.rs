//! MIPS32 opcode and function-code constants.
//!
//! Major opcodes live in bits 31-26 of the instruction word. R-form
//! instructions share major opcode 0x00 and are distinguished by the
//! function field in bits 5-0. The op 0x01 (`REGIMM`) encodings are
//! distinguished by the `rt` field instead.

/// Major opcode of every R-form instruction.
pub const OP_SPECIAL: u32 = 0x00;
/// Major opcode of the `rt`-selected branch family (bltz/bgez/bltzal/bgezal).
pub const OP_REGIMM: u32 = 0x01;
/// Unconditional jump.
pub const OP_J: u32 = 0x02;
/// Jump and link.
pub const OP_JAL: u32 = 0x03;
/// Branch if equal.
pub const OP_BEQ: u32 = 0x04;
/// Branch if not equal.
pub const OP_BNE: u32 = 0x05;
/// Branch if less than or equal to zero.
pub const OP_BLEZ: u32 = 0x06;
/// Branch if greater than zero.
pub const OP_BGTZ: u32 = 0x07;
/// Add immediate (traps on signed overflow).
pub const OP_ADDI: u32 = 0x08;
/// Add immediate unsigned (no trap).
pub const OP_ADDIU: u32 = 0x09;
/// Set on less than immediate (signed).
pub const OP_SLTI: u32 = 0x0A;
/// Set on less than immediate (unsigned).
pub const OP_SLTIU: u32 = 0x0B;
/// AND with zero-extended immediate.
pub const OP_ANDI: u32 = 0x0C;
/// OR with zero-extended immediate.
pub const OP_ORI: u32 = 0x0D;
/// XOR with zero-extended immediate.
pub const OP_XORI: u32 = 0x0E;
/// Load upper immediate.
pub const OP_LUI: u32 = 0x0F;
/// Load byte (sign-extended).
pub const OP_LB: u32 = 0x20;
/// Load half-word (sign-extended).
pub const OP_LH: u32 = 0x21;
/// Load word left (unaligned merge).
pub const OP_LWL: u32 = 0x22;
/// Load word.
pub const OP_LW: u32 = 0x23;
/// Load byte unsigned.
pub const OP_LBU: u32 = 0x24;
/// Load half-word unsigned.
pub const OP_LHU: u32 = 0x25;
/// Load word right (unaligned merge).
pub const OP_LWR: u32 = 0x26;
/// Store byte.
pub const OP_SB: u32 = 0x28;
/// Store half-word.
pub const OP_SH: u32 = 0x29;
/// Store word left (unaligned merge).
pub const OP_SWL: u32 = 0x2A;
/// Store word.
pub const OP_SW: u32 = 0x2B;
/// Store word right (unaligned merge).
pub const OP_SWR: u32 = 0x2E;

/// Shift left logical (by `shamt`).
pub const FUNC_SLL: u32 = 0x00;
/// Shift right logical (by `shamt`).
pub const FUNC_SRL: u32 = 0x02;
/// Shift right arithmetic (by `shamt`).
pub const FUNC_SRA: u32 = 0x03;
/// Shift left logical variable (by `rs`).
pub const FUNC_SLLV: u32 = 0x04;
/// Shift right logical variable (by `rs`).
pub const FUNC_SRLV: u32 = 0x06;
/// Shift right arithmetic variable (by `rs`).
pub const FUNC_SRAV: u32 = 0x07;
/// Jump register.
pub const FUNC_JR: u32 = 0x08;
/// Jump and link register.
pub const FUNC_JALR: u32 = 0x09;
/// System call (requests a clean stop).
pub const FUNC_SYSCALL: u32 = 0x0C;
/// Breakpoint (fatal).
pub const FUNC_BREAK: u32 = 0x0D;
/// Move from HI.
pub const FUNC_MFHI: u32 = 0x10;
/// Move to HI.
pub const FUNC_MTHI: u32 = 0x11;
/// Move from LO.
pub const FUNC_MFLO: u32 = 0x12;
/// Move to LO.
pub const FUNC_MTLO: u32 = 0x13;
/// Multiply (signed).
pub const FUNC_MULT: u32 = 0x18;
/// Multiply unsigned.
pub const FUNC_MULTU: u32 = 0x19;
/// Divide (signed).
pub const FUNC_DIV: u32 = 0x1A;
/// Divide unsigned.
pub const FUNC_DIVU: u32 = 0x1B;
/// Add (traps on signed overflow).
pub const FUNC_ADD: u32 = 0x20;
/// Add unsigned (no trap).
pub const FUNC_ADDU: u32 = 0x21;
/// Subtract.
pub const FUNC_SUB: u32 = 0x22;
/// Subtract unsigned.
pub const FUNC_SUBU: u32 = 0x23;
/// Bitwise AND.
pub const FUNC_AND: u32 = 0x24;
/// Bitwise OR.
pub const FUNC_OR: u32 = 0x25;
/// Bitwise XOR.
pub const FUNC_XOR: u32 = 0x26;
/// Bitwise NOR.
pub const FUNC_NOR: u32 = 0x27;
/// Set on less than (signed).
pub const FUNC_SLT: u32 = 0x2A;
/// Set on less than unsigned.
pub const FUNC_SLTU: u32 = 0x2B;

/// `rt` selector for bltz under op 0x01.
pub const RT_BLTZ: u32 = 0x00;
/// `rt` selector for bgez under op 0x01.
pub const RT_BGEZ: u32 = 0x01;
/// `rt` selector for bltzal under op 0x01.
pub const RT_BLTZAL: u32 = 0x10;
/// `rt` selector for bgezal under op 0x01.
pub const RT_BGEZAL: u32 = 0x11;
