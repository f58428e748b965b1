//! Load and store behaviors.
//!
//! Memory is word-addressable; sub-word accesses read or read-modify-write
//! the containing word. Lane order inside the word is big-endian: byte `i`
//! sits at bit offset `(3 - i) * 8` and half-word `i` at `(1 - i) * 16`.
//! The unaligned word forms (lwl/lwr/swl/swr) merge the memory word with
//! `rt` using shifts derived from the byte offset; every shift amount is a
//! multiple of 8 in `[0, 24]`.

use super::Cpu;
use crate::common::constants::WORD_ALIGN;
use crate::isa::opcodes::*;
use crate::soc::memory::WordMemory;

/// Bit offset of the addressed byte within its word (big-endian lanes).
fn byte_shift(ea: u32) -> u32 {
    (3 - (ea & 3)) * 8
}

/// Bit offset of the addressed half-word within its word.
fn half_shift(ea: u32) -> u32 {
    (1 - ((ea & 3) >> 1)) * 16
}

impl Cpu {
    /// Executes a load, writing the selected lanes into `rt`.
    pub(crate) fn exec_load(
        &mut self,
        bus: &mut dyn WordMemory,
        op: u32,
        rs: u32,
        rt: u32,
        imm: i32,
    ) {
        let ea = self.regs.read(rs).wrapping_add(imm as u32);
        let word = bus.read(ea & WORD_ALIGN);

        let val = match op {
            OP_LW => word,
            OP_LB => ((word >> byte_shift(ea)) & 0xFF) as u8 as i8 as i32 as u32,
            OP_LBU => (word >> byte_shift(ea)) & 0xFF,
            OP_LH => ((word >> half_shift(ea)) & 0xFFFF) as u16 as i16 as i32 as u32,
            OP_LHU => (word >> half_shift(ea)) & 0xFFFF,
            OP_LWL => {
                let s = (ea & 3) * 8;
                (word << s) | (self.regs.read(rt) & ((1u32 << s) - 1))
            }
            OP_LWR => {
                let s = (3 - (ea & 3)) * 8;
                (word >> s) | (self.regs.read(rt) & !(u32::MAX >> s))
            }
            _ => word,
        };
        self.regs.write(rt, val);
    }

    /// Executes a store, merging `rt` into the selected lanes of the word.
    pub(crate) fn exec_store(
        &mut self,
        bus: &mut dyn WordMemory,
        op: u32,
        rs: u32,
        rt: u32,
        imm: i32,
    ) {
        let ea = self.regs.read(rs).wrapping_add(imm as u32);
        let aligned = ea & WORD_ALIGN;
        let value = self.regs.read(rt);

        let word = match op {
            OP_SW => value,
            OP_SB => {
                let s = byte_shift(ea);
                (bus.read(aligned) & !(0xFF << s)) | ((value & 0xFF) << s)
            }
            OP_SH => {
                let s = half_shift(ea);
                (bus.read(aligned) & !(0xFFFF << s)) | ((value & 0xFFFF) << s)
            }
            OP_SWL => {
                let s = (ea & 3) * 8;
                (value >> s) | (bus.read(aligned) & !(u32::MAX >> s))
            }
            OP_SWR => {
                let s = (3 - (ea & 3)) * 8;
                (value << s) | (bus.read(aligned) & ((1u32 << s) - 1))
            }
            _ => value,
        };
        bus.write(aligned, word);
    }
}
