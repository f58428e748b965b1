//! MIPS32 general-purpose register file.
//!
//! This module implements the general-purpose register file. It performs the
//! following:
//! 1. **Storage:** Maintains 32 integer registers (`r0`-`r31`).
//! 2. **Invariant enforcement:** Ensures that register `r0` is wired to zero.
//! 3. **Debugging:** Provides a utility for dumping the register state.

use crate::common::constants::GPR_COUNT;

/// General-purpose register file.
///
/// Contains 32 registers of 32 bits. Register `r0` always reads as zero and
/// silently ignores writes.
pub struct Gpr {
    regs: [u32; GPR_COUNT],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; GPR_COUNT],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `r0` always returns 0.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register.
    pub fn read(&self, idx: u32) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs[idx as usize]
        }
    }

    /// Writes a value to a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `r0` are ignored.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: u32, val: u32) {
        if idx != 0 {
            self.regs[idx as usize] = val;
        }
    }

    /// Dumps the contents of all registers to stderr.
    ///
    /// Displays registers in pairs with hexadecimal formatting for debugging.
    pub fn dump(&self) {
        for i in (0..GPR_COUNT).step_by(2) {
            eprintln!(
                "r{:<2}={:#010x} r{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}

impl Default for Gpr {
    /// Returns the default value.
    fn default() -> Self {
        Self::new()
    }
}
