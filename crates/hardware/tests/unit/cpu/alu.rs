//! ALU, shift, and HI/LO behavior tests.

use crate::common::{i_inst, r_inst, shift_inst, ExecBench};
use mips_core::common::error::Fault;
use mips_core::isa::opcodes::*;

// ══════════════════════════════════════════════════════════
// 1. Overflow trapping
// ══════════════════════════════════════════════════════════

/// `addi` traps at the signed boundary.
#[test]
fn addi_overflow_traps() {
    let mut bench = ExecBench::new();
    bench.cpu.regs.write(1, 0x7FFF_FFFF);

    let fault = bench.exec(&i_inst(OP_ADDI, 1, 2, 1));
    assert!(
        matches!(fault, Err(Fault::IntegerOverflow { mnemonic: "addi", .. })),
        "0x7FFFFFFF + 1 must overflow: {:?}",
        fault
    );
}

/// `addiu` wraps silently on the same operands.
#[test]
fn addiu_wraps_without_trap() {
    let mut bench = ExecBench::new();
    bench.cpu.regs.write(1, 0x7FFF_FFFF);
    bench.exec_ok(&i_inst(OP_ADDIU, 1, 2, 1));
    assert_eq!(bench.cpu.regs.read(2), 0x8000_0000);
}

/// `add` traps where `addu` wraps.
#[test]
fn add_traps_addu_wraps() {
    let mut bench = ExecBench::new();
    bench.cpu.regs.write(1, i32::MIN as u32);
    bench.cpu.regs.write(2, 0xFFFF_FFFF); // -1

    let fault = bench.exec(&r_inst(FUNC_ADD, 1, 2, 3));
    assert!(matches!(
        fault,
        Err(Fault::IntegerOverflow { mnemonic: "add", .. })
    ));

    bench.exec_ok(&r_inst(FUNC_ADDU, 1, 2, 3));
    assert_eq!(bench.cpu.regs.read(3), 0x7FFF_FFFF);
}

// ══════════════════════════════════════════════════════════
// 2. Comparisons and logic
// ══════════════════════════════════════════════════════════

/// slt is signed, sltu unsigned.
#[test]
fn slt_vs_sltu() {
    let mut bench = ExecBench::new();
    bench.cpu.regs.write(1, 0xFFFF_FFFF); // -1 signed, max unsigned
    bench.cpu.regs.write(2, 1);

    bench.exec_ok(&r_inst(FUNC_SLT, 1, 2, 3));
    assert_eq!(bench.cpu.regs.read(3), 1, "-1 < 1 signed");

    bench.exec_ok(&r_inst(FUNC_SLTU, 1, 2, 4));
    assert_eq!(bench.cpu.regs.read(4), 0, "0xFFFFFFFF > 1 unsigned");
}

/// slti sign-extends its immediate; sltiu then compares unsigned.
#[test]
fn slti_vs_sltiu_immediate_extension() {
    let mut bench = ExecBench::new();
    bench.cpu.regs.write(1, 0);

    bench.exec_ok(&i_inst(OP_SLTI, 1, 2, -1));
    assert_eq!(bench.cpu.regs.read(2), 0, "0 < -1 is false signed");

    bench.exec_ok(&i_inst(OP_SLTIU, 1, 3, -1));
    assert_eq!(
        bench.cpu.regs.read(3),
        1,
        "sign-extended -1 compares as 0xFFFFFFFF unsigned"
    );
}

/// The logical immediates are zero-extended.
#[test]
fn logical_immediates_zero_extend() {
    let mut bench = ExecBench::new();
    bench.exec_ok(&i_inst(OP_ORI, 0, 1, -1)); // ori r1, r0, 0xFFFF
    assert_eq!(bench.cpu.regs.read(1), 0x0000_FFFF);

    bench.cpu.regs.write(2, 0xFFFF_0000);
    bench.exec_ok(&i_inst(OP_ANDI, 2, 3, -1));
    assert_eq!(bench.cpu.regs.read(3), 0, "andi masks to the low half");

    bench.exec_ok(&i_inst(OP_XORI, 1, 4, 0x00FF));
    assert_eq!(bench.cpu.regs.read(4), 0x0000_FF00);
}

/// nor inverts the or.
#[test]
fn nor_complements() {
    let mut bench = ExecBench::new();
    bench.cpu.regs.write(1, 0xF0F0_0000);
    bench.cpu.regs.write(2, 0x0000_0F0F);
    bench.exec_ok(&r_inst(FUNC_NOR, 1, 2, 3));
    assert_eq!(bench.cpu.regs.read(3), !(0xF0F0_0000u32 | 0x0000_0F0F));
}

/// lui places the immediate in the upper half, including the sign bit.
#[test]
fn lui_places_upper_half() {
    let mut bench = ExecBench::new();
    bench.exec_ok(&i_inst(OP_LUI, 0, 1, 0x8000u16 as i16 as i32));
    assert_eq!(bench.cpu.regs.read(1), 0x8000_0000);
}

// ══════════════════════════════════════════════════════════
// 3. Shifts
// ══════════════════════════════════════════════════════════

/// sra keeps the sign; srl does not.
#[test]
fn arithmetic_vs_logical_right_shift() {
    let mut bench = ExecBench::new();
    bench.cpu.regs.write(1, 0x8000_0000);

    bench.exec_ok(&shift_inst(FUNC_SRA, 1, 2, 4));
    assert_eq!(bench.cpu.regs.read(2), 0xF800_0000);

    bench.exec_ok(&shift_inst(FUNC_SRL, 1, 3, 4));
    assert_eq!(bench.cpu.regs.read(3), 0x0800_0000);
}

/// Variable shifts use the low five bits of rs; sllv then srlv by the same
/// amount reconstructs the surviving low bits.
#[test]
fn sllv_srlv_round_trip() {
    let mut bench = ExecBench::new();
    let value = 0xABCD_1234;
    bench.cpu.regs.write(1, value);
    bench.cpu.regs.write(2, 40); // 40 & 0x1F = 8

    bench.exec_ok(&r_inst(FUNC_SLLV, 2, 1, 3)); // r3 = r1 << 8
    bench.exec_ok(&r_inst(FUNC_SRLV, 2, 3, 4)); // r4 = r3 >> 8
    assert_eq!(bench.cpu.regs.read(4), value & 0x00FF_FFFF);
}

// ══════════════════════════════════════════════════════════
// 4. HI/LO
// ══════════════════════════════════════════════════════════

/// Signed multiply splits its 64-bit product across HI:LO.
#[test]
fn mult_splits_product() {
    let mut bench = ExecBench::new();
    bench.cpu.regs.write(1, (-3i32) as u32);
    bench.cpu.regs.write(2, 5);
    bench.exec_ok(&r_inst(FUNC_MULT, 1, 2, 0));

    assert_eq!(bench.cpu.acc.lo(), (-15i32) as u32);
    assert_eq!(bench.cpu.acc.hi(), 0xFFFF_FFFF, "sign extends into HI");
}

/// Unsigned multiply treats the operands as magnitudes.
#[test]
fn multu_is_unsigned() {
    let mut bench = ExecBench::new();
    bench.cpu.regs.write(1, 0xFFFF_FFFF);
    bench.cpu.regs.write(2, 2);
    bench.exec_ok(&r_inst(FUNC_MULTU, 1, 2, 0));

    assert_eq!(bench.cpu.acc.lo(), 0xFFFF_FFFE);
    assert_eq!(bench.cpu.acc.hi(), 1);
}

/// div puts the truncated quotient in LO and the remainder in HI.
#[test]
fn div_quotient_and_remainder() {
    let mut bench = ExecBench::new();
    bench.cpu.regs.write(1, 7);
    bench.cpu.regs.write(2, (-2i32) as u32);
    bench.exec_ok(&r_inst(FUNC_DIV, 1, 2, 0));

    assert_eq!(bench.cpu.acc.lo(), (-3i32) as u32);
    assert_eq!(bench.cpu.acc.hi(), 1);
}

/// Division by zero leaves the accumulator untouched.
#[test]
fn div_by_zero_preserves_accumulator() {
    let mut bench = ExecBench::new();
    bench.cpu.regs.write(1, 0x1234);
    bench.exec_ok(&r_inst(FUNC_MTHI, 1, 0, 0));
    bench.exec_ok(&r_inst(FUNC_MTLO, 1, 0, 0));

    bench.cpu.regs.write(2, 99);
    bench.exec_ok(&r_inst(FUNC_DIV, 2, 0, 0)); // divide by r0
    bench.exec_ok(&r_inst(FUNC_DIVU, 2, 0, 0));

    assert_eq!(bench.cpu.acc.hi(), 0x1234);
    assert_eq!(bench.cpu.acc.lo(), 0x1234);
}

/// The moves shuttle values through the accumulator.
#[test]
fn hi_lo_moves_round_trip() {
    let mut bench = ExecBench::new();
    bench.cpu.regs.write(1, 0xDEAD_0001);
    bench.cpu.regs.write(2, 0xDEAD_0002);

    bench.exec_ok(&r_inst(FUNC_MTHI, 1, 0, 0));
    bench.exec_ok(&r_inst(FUNC_MTLO, 2, 0, 0));
    bench.exec_ok(&r_inst(FUNC_MFHI, 0, 0, 3));
    bench.exec_ok(&r_inst(FUNC_MFLO, 0, 0, 4));

    assert_eq!(bench.cpu.regs.read(3), 0xDEAD_0001);
    assert_eq!(bench.cpu.regs.read(4), 0xDEAD_0002);
}

// ══════════════════════════════════════════════════════════
// 5. Register zero and reserved encodings
// ══════════════════════════════════════════════════════════

/// Writes aimed at r0 vanish.
#[test]
fn r0_write_is_ignored() {
    let mut bench = ExecBench::new();
    bench.cpu.regs.write(1, 42);
    bench.exec_ok(&r_inst(FUNC_ADDU, 1, 1, 0)); // addu r0, r1, r1
    assert_eq!(bench.cpu.regs.read(0), 0);
}

/// Unknown function codes fault as reserved instructions.
#[test]
fn reserved_function_faults() {
    let mut bench = ExecBench::new();
    let fault = bench.exec(&r_inst(0x3F, 0, 0, 0));
    assert!(matches!(
        fault,
        Err(Fault::ReservedInstruction { func: 0x3F, .. })
    ));
}
