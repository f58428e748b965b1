//! Whole-system invariants over a mixed program.
//!
//! These checks hold for every program; the mixed stream below exercises
//! loads, stores, branches, HI/LO traffic, jumps, and NOP padding in one
//! run.

use crate::common::{encode_i, encode_j, encode_r, run_program, NOP_WORD, SYSCALL_WORD};
use mips_core::core::pipeline::WINDOW_CAPACITY;
use mips_core::isa::opcodes::*;

/// A program touching every analytics path.
fn mixed_program() -> Vec<u32> {
    vec![
        encode_i(OP_ADDIU, 0, 1, 0x40),        // r1 = 0x40
        encode_i(OP_ADDIU, 0, 2, 0x7F),        // r2 = 0x7F
        encode_i(OP_SW, 1, 2, 0),              // sw r2, 0(r1)
        NOP_WORD,
        encode_i(OP_LW, 1, 3, 0),              // r3 = mem[r1]
        encode_r(3, 3, 0, 0, FUNC_MULT),       // mult r3, r3
        encode_r(0, 0, 4, 0, FUNC_MFLO),       // r4 = lo
        encode_i(OP_BNE, 3, 4, 2),             // taken: r3 != r4
        NOP_WORD,                              // delay slot
        NOP_WORD,                              // skipped target filler
        encode_i(OP_ADDI, 3, 5, 1),            // r5 = r3 + 1
        encode_r(5, 3, 6, 0, FUNC_SLT),        // r6 = r5 < r3
        encode_j(OP_J, 0xE),                   // j 0x38 (the syscall word)
        NOP_WORD,                              // delay slot
        SYSCALL_WORD,
    ]
}

/// The §-style global invariants hold at end of run.
#[test]
fn global_invariants_hold() {
    let mut sim = run_program(&mixed_program());
    let stats = &sim.cpu.stats;
    let monitor = &sim.cpu.monitor;

    assert!(stats.instructions >= stats.nops);
    assert!(stats.instructions >= monitor.window().len() as u64);

    assert!(monitor.window().len() <= WINDOW_CAPACITY);
    assert!(monitor.window().iter().all(|r| !r.inst.is_nop()));

    for (reg, &stamp) in monitor.last_write().iter().enumerate() {
        assert!(
            stamp <= stats.instructions,
            "last_write[{}] = {} exceeds the retired count {}",
            reg,
            stamp,
            stats.instructions
        );
    }

    assert!(monitor.saturating().stage() <= 3);
    assert!(monitor.two_level().history() <= 3);
    for pattern in 0..4 {
        assert!(monitor.two_level().pattern_stage(pattern) <= 3);
    }

    assert!(stats.static_wrong <= stats.branches);
    assert!(stats.saturating_wrong <= stats.branches);
    assert!(stats.two_level_wrong <= stats.branches);

    // At most two register reads per instruction bound the hazard sums.
    for depth in 0..3 {
        assert!(
            stats.data_hazards[depth] + stats.control_hazards[depth] <= stats.instructions * 2
        );
    }

    // The report never panics, whatever the counters hold.
    sim.cpu.stats.print();

    // Exit is delivered exactly once (run consumed it).
    assert_eq!(sim.cpu.take_exit(), None);
}

/// The program's jump lands where the word index says: execution reaches the
/// syscall rather than running off the image.
#[test]
fn mixed_program_terminates_cleanly() {
    let sim = run_program(&mixed_program());
    // The loop in mixed_program is straight-line; every non-skipped word
    // retires exactly once.
    assert!(sim.cpu.stats.instructions >= 12);
    assert_eq!(sim.cpu.stats.branches, 1);
}
