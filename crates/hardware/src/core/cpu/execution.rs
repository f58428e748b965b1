//! ALU, shift, and HI/LO behaviors.
//!
//! One arm per R-form function code plus the immediate ALU family. Signed
//! overflow is architectural only for `add` and `addi`; every other
//! arithmetic op wraps. Division by zero leaves the accumulator untouched,
//! and `i32::MIN / -1` wraps rather than trapping.

use super::Cpu;
use crate::common::constants::RA;
use crate::common::error::Fault;
use crate::isa::opcodes::*;

/// Mask limiting variable shift amounts to the register width.
const SHIFT_MASK: u32 = 0x1F;
/// Mask of the zero-extended logical immediate.
const IMM16_MASK: u32 = 0xFFFF;

impl Cpu {
    /// Executes an R-form instruction selected by its function code.
    pub(crate) fn exec_special(
        &mut self,
        rs: u32,
        rt: u32,
        rd: u32,
        shamt: u32,
        func: u32,
    ) -> Result<(), Fault> {
        let a = self.regs.read(rs);
        let b = self.regs.read(rt);

        match func {
            FUNC_SLL => self.regs.write(rd, b << shamt),
            FUNC_SRL => self.regs.write(rd, b >> shamt),
            FUNC_SRA => self.regs.write(rd, ((b as i32) >> shamt) as u32),
            FUNC_SLLV => self.regs.write(rd, b << (a & SHIFT_MASK)),
            FUNC_SRLV => self.regs.write(rd, b >> (a & SHIFT_MASK)),
            FUNC_SRAV => self.regs.write(rd, ((b as i32) >> (a & SHIFT_MASK)) as u32),

            FUNC_JR => self.npc = a,
            FUNC_JALR => {
                self.npc = a;
                // rd = 0 means the assembler omitted it; link to $ra.
                let link = if rd == 0 { RA } else { rd };
                self.regs.write(link, self.pc.wrapping_add(4));
            }

            FUNC_SYSCALL => self.stop(),
            FUNC_BREAK => {
                return Err(Fault::Breakpoint { pc: self.pc_addr });
            }

            FUNC_MFHI => self.regs.write(rd, self.acc.hi()),
            FUNC_MTHI => self.acc.set_hi(a),
            FUNC_MFLO => self.regs.write(rd, self.acc.lo()),
            FUNC_MTLO => self.acc.set_lo(a),

            FUNC_MULT => {
                let product = (a as i32 as i64).wrapping_mul(b as i32 as i64);
                self.acc.set_product(product as u64);
            }
            FUNC_MULTU => self.acc.set_product((a as u64) * (b as u64)),
            FUNC_DIV => {
                if b != 0 {
                    self.acc.set_lo((a as i32).wrapping_div(b as i32) as u32);
                    self.acc.set_hi((a as i32).wrapping_rem(b as i32) as u32);
                }
            }
            FUNC_DIVU => {
                if b != 0 {
                    self.acc.set_lo(a / b);
                    self.acc.set_hi(a % b);
                }
            }

            FUNC_ADD => {
                let sum = (a as i32).checked_add(b as i32).ok_or(Fault::IntegerOverflow {
                    mnemonic: "add",
                    pc: self.pc_addr,
                })?;
                self.regs.write(rd, sum as u32);
            }
            FUNC_ADDU => self.regs.write(rd, a.wrapping_add(b)),
            FUNC_SUB | FUNC_SUBU => self.regs.write(rd, a.wrapping_sub(b)),
            FUNC_AND => self.regs.write(rd, a & b),
            FUNC_OR => self.regs.write(rd, a | b),
            FUNC_XOR => self.regs.write(rd, a ^ b),
            FUNC_NOR => self.regs.write(rd, !(a | b)),
            FUNC_SLT => self.regs.write(rd, ((a as i32) < (b as i32)) as u32),
            FUNC_SLTU => self.regs.write(rd, (a < b) as u32),

            _ => {
                return Err(Fault::ReservedInstruction {
                    op: OP_SPECIAL,
                    func,
                    pc: self.pc_addr,
                });
            }
        }
        Ok(())
    }

    /// Executes an immediate ALU instruction.
    ///
    /// The arithmetic and comparison forms use the sign-extended immediate;
    /// the logical forms use its low 16 bits zero-extended.
    pub(crate) fn exec_alu_imm(&mut self, op: u32, rs: u32, rt: u32, imm: i32) -> Result<(), Fault> {
        let a = self.regs.read(rs);

        let val = match op {
            OP_ADDI => (a as i32).checked_add(imm).ok_or(Fault::IntegerOverflow {
                mnemonic: "addi",
                pc: self.pc_addr,
            })? as u32,
            OP_ADDIU => a.wrapping_add(imm as u32),
            OP_SLTI => ((a as i32) < imm) as u32,
            OP_SLTIU => (a < imm as u32) as u32,
            OP_ANDI => a & (imm as u32 & IMM16_MASK),
            OP_ORI => a | (imm as u32 & IMM16_MASK),
            OP_XORI => a ^ (imm as u32 & IMM16_MASK),
            OP_LUI => (imm as u32) << 16,
            _ => {
                return Err(Fault::ReservedInstruction {
                    op,
                    func: 0,
                    pc: self.pc_addr,
                });
            }
        };
        self.regs.write(rt, val);
        Ok(())
    }
}
