//! Fault definitions.
//!
//! This module defines the error handling for the simulator core. The MIPS32
//! subset modeled here has exactly three fatal conditions: signed-overflow on
//! `add`/`addi`, execution of `break`, and a reserved instruction encoding.
//! Everything else the analytics layer observes (hazards, mispredictions,
//! failed pair attempts) is counted, never raised.

use std::fmt;

/// Fatal faults raised by instruction execution.
///
/// A fault aborts the simulation: the driver reports it on stderr and exits
/// with a failure status. A clean stop (`syscall`) is not a fault; it is
/// signalled through [`crate::core::Cpu::take_exit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fault {
    /// Signed integer overflow in `add` or `addi`.
    ///
    /// Carries the mnemonic and the recorded next-PC for diagnostics.
    IntegerOverflow {
        /// Mnemonic of the overflowing instruction.
        mnemonic: &'static str,
        /// Next-PC recorded when the instruction retired.
        pc: u32,
    },

    /// Execution of the `break` instruction.
    Breakpoint {
        /// Next-PC recorded when the instruction retired.
        pc: u32,
    },

    /// An `(op, func)` pair outside the implemented subset.
    ReservedInstruction {
        /// Major opcode field.
        op: u32,
        /// Function field (zero for I- and J-form encodings).
        func: u32,
        /// Next-PC recorded when the instruction retired.
        pc: u32,
    },
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::IntegerOverflow { mnemonic, pc } => {
                write!(f, "EXCEPTION({}): integer overflow near {:#010x}", mnemonic, pc)
            }
            Fault::Breakpoint { pc } => write!(f, "break executed near {:#010x}", pc),
            Fault::ReservedInstruction { op, func, pc } => write!(
                f,
                "reserved instruction op={:#04x} func={:#04x} near {:#010x}",
                op, func, pc
            ),
        }
    }
}

impl std::error::Error for Fault {}
