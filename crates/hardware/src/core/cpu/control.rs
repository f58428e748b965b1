//! Branch and jump behaviors.
//!
//! At behavior time `pc` already points past the delay slot's fetch address
//! (`fetch + 4`), so the branch target is `pc + (imm << 2)` and the link
//! value `pc + 4` skips the delay slot. A taken branch only redirects `npc`;
//! the instruction at the old `npc` still executes first.

use super::Cpu;
use crate::common::constants::RA;
use crate::common::error::Fault;
use crate::isa::opcodes::*;

impl Cpu {
    /// Computes a PC-relative branch target from a word displacement.
    fn branch_target(&self, imm: i32) -> u32 {
        self.pc.wrapping_add((imm << 2) as u32)
    }

    /// Executes beq/bne/blez/bgtz.
    pub(crate) fn exec_branch(&mut self, op: u32, rs: u32, rt: u32, imm: i32) {
        let a = self.regs.read(rs);
        let taken = match op {
            OP_BEQ => a == self.regs.read(rt),
            OP_BNE => a != self.regs.read(rt),
            OP_BLEZ => (a as i32) <= 0,
            OP_BGTZ => (a as i32) > 0,
            _ => false,
        };
        if taken {
            self.npc = self.branch_target(imm);
        }
    }

    /// Executes the op 0x01 family, selected by the `rt` field.
    ///
    /// The link variants write `$ra` whether or not the branch is taken.
    pub(crate) fn exec_regimm(&mut self, rs: u32, rt_sel: u32, imm: i32) -> Result<(), Fault> {
        let val = self.regs.read(rs) as i32;

        let taken = match rt_sel {
            RT_BLTZ => val < 0,
            RT_BGEZ => val >= 0,
            RT_BLTZAL => {
                self.regs.write(RA, self.pc.wrapping_add(4));
                val < 0
            }
            RT_BGEZAL => {
                self.regs.write(RA, self.pc.wrapping_add(4));
                val >= 0
            }
            _ => {
                return Err(Fault::ReservedInstruction {
                    op: OP_REGIMM,
                    func: 0,
                    pc: self.pc_addr,
                });
            }
        };
        if taken {
            self.npc = self.branch_target(imm);
        }
        Ok(())
    }

    /// Executes j/jal: pseudo-absolute target within the current 256 MiB
    /// segment.
    pub(crate) fn exec_jump(&mut self, op: u32, addr: u32) {
        if op == OP_JAL {
            self.regs.write(RA, self.pc.wrapping_add(4));
        }
        self.npc = (self.pc & 0xF000_0000) | (addr << 2);
    }
}
