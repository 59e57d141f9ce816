//! # ALU Tests
//!
//! The ALU takes register indices for every operation, including `CMP`.

use ls8_core::common::{CpuError, RegisterFile};
use ls8_core::core::arch::flags::Flags;
use ls8_core::core::units::alu::{Alu, arithmetic};
use ls8_core::isa::Opcode;
use proptest::prelude::*;
use rstest::rstest;

fn regs_with(a: u8, b: u8) -> RegisterFile {
    let mut regs = RegisterFile::default();
    regs.write(0, a);
    regs.write(1, b);
    regs
}

#[rstest]
#[case(Opcode::Add, 5, 3, 8)]
#[case(Opcode::Add, 200, 100, 44)]
#[case(Opcode::Add, 255, 1, 0)]
#[case(Opcode::Mul, 8, 9, 72)]
#[case(Opcode::Mul, 16, 16, 0)]
#[case(Opcode::Mul, 0x7F, 3, 0x7D)]
fn test_arithmetic_writes_first_register(
    #[case] op: Opcode,
    #[case] a: u8,
    #[case] b: u8,
    #[case] expected: u8,
) {
    let mut regs = regs_with(a, b);
    let mut flags = Flags::new();
    Alu::apply(op, 0, 1, &mut regs, &mut flags).unwrap();
    assert_eq!(regs.read(0), expected);
    assert_eq!(regs.read(1), b);
    assert_eq!(flags, Flags::new());
}

#[test]
fn test_add_same_register_doubles() {
    let mut regs = regs_with(21, 0);
    let mut flags = Flags::new();
    Alu::apply(Opcode::Add, 0, 0, &mut regs, &mut flags).unwrap();
    assert_eq!(regs.read(0), 42);
}

#[test]
fn test_compare_reads_registers_not_indices() {
    // Indices 0 < 1, but the values say greater.
    let mut regs = regs_with(9, 3);
    let mut flags = Flags::new();
    Alu::apply(Opcode::Cmp, 0, 1, &mut regs, &mut flags).unwrap();
    assert!(flags.is_greater());
    assert_eq!(regs.read(0), 9);
    assert_eq!(regs.read(1), 3);
}

#[rstest]
#[case(Opcode::Hlt)]
#[case(Opcode::Ldi)]
#[case(Opcode::Prn)]
#[case(Opcode::Jmp)]
#[case(Opcode::Jeq)]
#[case(Opcode::Jne)]
#[case(Opcode::Push)]
#[case(Opcode::Pop)]
fn test_non_alu_opcode_is_rejected(#[case] op: Opcode) {
    let mut regs = regs_with(1, 2);
    let mut flags = Flags::new();
    assert_eq!(
        Alu::apply(op, 0, 1, &mut regs, &mut flags),
        Err(CpuError::UnsupportedAluOperation(op))
    );
    assert_eq!(regs, regs_with(1, 2));
}

#[test]
fn test_arithmetic_execute_rejects_cmp() {
    assert_eq!(arithmetic::execute(Opcode::Cmp, 1, 2), None);
}

proptest! {
    #[test]
    fn prop_add_wraps(a in any::<u8>(), b in any::<u8>()) {
        let mut regs = regs_with(a, b);
        let mut flags = Flags::new();
        Alu::apply(Opcode::Add, 0, 1, &mut regs, &mut flags).unwrap();
        prop_assert_eq!(regs.read(0) as u32, (a as u32 + b as u32) % 256);
    }

    #[test]
    fn prop_mul_wraps(a in any::<u8>(), b in any::<u8>()) {
        let mut regs = regs_with(a, b);
        let mut flags = Flags::new();
        Alu::apply(Opcode::Mul, 0, 1, &mut regs, &mut flags).unwrap();
        prop_assert_eq!(regs.read(0) as u32, (a as u32 * b as u32) % 256);
    }

    #[test]
    fn prop_mul_by_zero_register_zeroes(a in any::<u8>(), repeats in 1usize..4) {
        let mut regs = regs_with(a, 0);
        let mut flags = Flags::new();
        for _ in 0..repeats {
            Alu::apply(Opcode::Mul, 0, 1, &mut regs, &mut flags).unwrap();
            prop_assert_eq!(regs.read(0), 0);
        }
    }
}
