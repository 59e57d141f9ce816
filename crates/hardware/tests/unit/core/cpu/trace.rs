//! # Trace Line Tests

use crate::common::harness::TestContext;
use ls8_core::isa::Instruction;
use pretty_assertions::assert_eq;

#[test]
fn test_trace_at_reset() {
    let ctx = TestContext::new().load_program(&[Instruction::Ldi { reg: 0, imm: 8 }]);
    assert_eq!(
        ctx.cpu().trace_line(),
        "TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4"
    );
}

#[test]
fn test_trace_after_step() {
    let mut ctx = TestContext::new().load_program(&[
        Instruction::Ldi { reg: 0, imm: 0xAB },
        Instruction::Prn { reg: 0 },
        Instruction::Hlt,
    ]);
    ctx.step_n(1);
    assert_eq!(
        ctx.cpu().trace_line(),
        "TRACE: 03 | 47 00 01 | AB 00 00 00 00 00 00 F4"
    );
}

#[test]
fn test_trace_wraps_at_end_of_memory() {
    let mut ctx = TestContext::new().load_bytes(&[0x11, 0x22]);
    ctx.cpu_mut().memory.write(0xFF, 0x01);
    ctx.cpu_mut().pc = 0xFF;
    assert!(ctx.cpu().trace_line().starts_with("TRACE: FF | 01 11 22 |"));
}

#[test]
fn test_trace_has_no_side_effects() {
    let ctx = TestContext::new().load_program(&[Instruction::Hlt]);
    let before = ctx.cpu().clone();
    let _ = ctx.cpu().trace_line();
    assert_eq!(ctx.cpu().pc, before.pc);
    assert_eq!(ctx.cpu().regs, before.regs);
    assert_eq!(ctx.cpu().memory, before.memory);
    assert_eq!(ctx.cpu().stats.cycles, 0);
}

#[test]
fn test_tracing_enabled_run_still_executes() {
    let mut config = ls8_core::Config::default();
    config.general.trace_instructions = true;
    let mut ctx = TestContext::with_config(&config).load_program(&[
        Instruction::Ldi { reg: 0, imm: 8 },
        Instruction::Prn { reg: 0 },
        Instruction::Hlt,
    ]);
    ctx.run_bounded().unwrap();
    assert_eq!(ctx.output(), &[8]);
}
