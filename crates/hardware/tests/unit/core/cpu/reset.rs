//! # Reset and Operand Validation Tests

use crate::common::harness::TestContext;
use ls8_core::common::{CpuError, INITIAL_SP};
use ls8_core::config::Config;
use ls8_core::core::Cpu;
use ls8_core::core::arch::flags::Flags;
use ls8_core::core::arch::state::CpuState;
use ls8_core::isa::Instruction;
use rstest::rstest;

#[test]
fn test_reset_state() {
    let cpu = Cpu::default();
    assert_eq!(cpu.pc, 0);
    assert_eq!(cpu.state, CpuState::Running);
    assert_eq!(cpu.flags, Flags::new());
    assert_eq!(cpu.regs.as_array(), [0, 0, 0, 0, 0, 0, 0, INITIAL_SP]);
    assert!(cpu.memory.as_slice().iter().all(|&b| b == 0));
    assert!(!cpu.is_stopped());
}

#[test]
fn test_configured_stack_pointer() {
    let mut config = Config::default();
    config.general.initial_sp = 0x80;
    let cpu = Cpu::new(&config);
    assert_eq!(cpu.regs.sp(), 0x80);
}

#[rstest]
#[case(Instruction::Ldi { reg: 8, imm: 1 }, 8)]
#[case(Instruction::Prn { reg: 200 }, 200)]
#[case(Instruction::Add { reg_a: 0, reg_b: 9 }, 9)]
#[case(Instruction::Mul { reg_a: 12, reg_b: 0 }, 12)]
#[case(Instruction::Cmp { reg_a: 255, reg_b: 1 }, 255)]
#[case(Instruction::Jmp { reg: 8 }, 8)]
#[case(Instruction::Push { reg: 8 }, 8)]
#[case(Instruction::Pop { reg: 16 }, 16)]
fn test_invalid_register_faults(#[case] inst: Instruction, #[case] bad: u8) {
    let mut ctx = TestContext::new().load_program(&[Instruction::Hlt, inst, Instruction::Hlt]);
    ctx.cpu_mut().pc = 1;

    let err = ctx.step().unwrap_err();

    assert_eq!(err, CpuError::InvalidRegister { reg: bad, pc: 1 });
    assert_eq!(ctx.state(), CpuState::Faulted);
    assert_eq!(ctx.pc(), 1);
    assert!(ctx.output().is_empty());
}

#[test]
fn test_faulted_cpu_does_not_step() {
    let mut ctx = TestContext::new().load_program(&[
        Instruction::Prn { reg: 9 },
        Instruction::Ldi { reg: 0, imm: 1 },
    ]);
    assert!(ctx.step().is_err());

    assert_eq!(ctx.step(), Ok(CpuState::Faulted));
    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.cpu().stats.cycles, 1);
}

#[test]
fn test_run_propagates_fault() {
    let mut ctx = TestContext::new().load_program(&[
        Instruction::Ldi { reg: 0, imm: 3 },
        Instruction::Prn { reg: 0 },
        Instruction::Add { reg_a: 0, reg_b: 8 },
        Instruction::Hlt,
    ]);
    let err = ctx.sim.run().unwrap_err();
    assert_eq!(err, CpuError::InvalidRegister { reg: 8, pc: 5 });
    assert_eq!(ctx.output(), &[3]);
    assert!(ctx.cpu().is_stopped());
}
