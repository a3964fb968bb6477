//! # Instruction Handler Tests
//!
//! Each handler is called directly with prefetched operands, checking the
//! architectural effect and where it leaves the PC.

use crate::common::harness::TestContext;
use ls8_core::common::ExecError;
use ls8_core::isa::handlers;
use ls8_core::isa::opcodes;
use ls8_core::isa::{Handler, Operands};
use ls8_core::soc::CaptureConsole;
use pretty_assertions::assert_eq;
use rstest::rstest;

const fn ops(ir: u8, a: u8, b: u8) -> Operands {
    Operands { ir, a, b }
}

#[test]
fn test_hlt_latches_halt() {
    let mut ctx = TestContext::new();
    ctx.cpu.pc = 10;
    handlers::hlt(&mut ctx.cpu, ops(opcodes::HLT, 0, 0)).unwrap();
    assert!(ctx.cpu.is_halted());
    assert_eq!(ctx.cpu.pc, 10);
}

#[test]
fn test_ldi_writes_immediate() {
    let mut ctx = TestContext::new();
    handlers::ldi(&mut ctx.cpu, ops(opcodes::LDI, 5, 0xAB)).unwrap();
    assert_eq!(ctx.get_reg(5), 0xAB);
    assert_eq!(ctx.cpu.pc, 3);
}

#[test]
fn test_ldi_can_overwrite_sp() {
    let mut ctx = TestContext::new();
    handlers::ldi(&mut ctx.cpu, ops(opcodes::LDI, 7, 0x10)).unwrap();
    assert_eq!(ctx.cpu.sp(), 0x10);
}

#[test]
fn test_prn_prints_decimal() {
    let mut ctx = TestContext::new();
    ctx.set_reg(1, 200);
    handlers::prn(&mut ctx.cpu, ops(opcodes::PRN, 1, 0)).unwrap();
    assert_eq!(ctx.output(), "200\n");
    assert_eq!(ctx.cpu.pc, 2);
}

#[test]
fn test_prn_invalid_register_prints_nothing() {
    let mut ctx = TestContext::new();
    let err = handlers::prn(&mut ctx.cpu, ops(opcodes::PRN, 12, 0)).unwrap_err();
    assert!(matches!(err, ExecError::InvalidRegister { index: 12, .. }));
    assert_eq!(ctx.output(), "");
    assert_eq!(ctx.cpu.pc, 0);
}

#[rstest]
#[case::add(opcodes::ADD, 7, 6, 13)]
#[case::mul(opcodes::MUL, 7, 6, 42)]
#[case::mul_wraps(opcodes::MUL, 128, 2, 0)]
fn test_alu_arithmetic(#[case] ir: u8, #[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    let mut ctx = TestContext::new();
    ctx.set_reg(0, a);
    ctx.set_reg(1, b);
    handlers::alu(&mut ctx.cpu, ops(ir, 0, 1)).unwrap();
    assert_eq!(ctx.get_reg(0), expected);
    assert_eq!(ctx.get_reg(1), b);
    assert_eq!(ctx.cpu.pc, 3);
}

#[test]
fn test_mul_same_register_squares() {
    let mut ctx = TestContext::new();
    ctx.set_reg(2, 9);
    handlers::alu(&mut ctx.cpu, ops(opcodes::MUL, 2, 2)).unwrap();
    assert_eq!(ctx.get_reg(2), 81);
}

#[rstest]
#[case::equal(5, 5, 0b001)]
#[case::greater(9, 5, 0b010)]
#[case::less(5, 9, 0b100)]
fn test_cmp_sets_exactly_one_flag(#[case] a: u8, #[case] b: u8, #[case] bits: u8) {
    let mut ctx = TestContext::new();
    ctx.set_reg(0, a);
    ctx.set_reg(1, b);
    handlers::alu(&mut ctx.cpu, ops(opcodes::CMP, 0, 1)).unwrap();
    assert_eq!(ctx.cpu.fl.bits(), bits);
}

#[test]
fn test_push_and_pop_handlers_advance() {
    let mut ctx = TestContext::new();
    ctx.set_reg(0, 33);
    handlers::push(&mut ctx.cpu, ops(opcodes::PUSH, 0, 0)).unwrap();
    assert_eq!(ctx.cpu.pc, 2);
    handlers::pop(&mut ctx.cpu, ops(opcodes::POP, 4, 0)).unwrap();
    assert_eq!(ctx.cpu.pc, 4);
    assert_eq!(ctx.get_reg(4), 33);
}

#[test]
fn test_jmp_sets_pc_from_register() {
    let mut ctx = TestContext::new();
    ctx.set_reg(3, 0x40);
    handlers::jmp(&mut ctx.cpu, ops(opcodes::JMP, 3, 0)).unwrap();
    assert_eq!(ctx.cpu.pc, 0x40);
    assert_eq!(ctx.cpu.stats.branches_taken, 1);
}

#[rstest]
#[case::jeq_taken(opcodes::JEQ, true, 0x20)]
#[case::jeq_not_taken(opcodes::JEQ, false, 2)]
#[case::jne_taken(opcodes::JNE, false, 0x20)]
#[case::jne_not_taken(opcodes::JNE, true, 2)]
fn test_conditional_jumps(#[case] ir: u8, #[case] equal: bool, #[case] expected_pc: u8) {
    let mut ctx = TestContext::new();
    ctx.set_reg(0, 4);
    ctx.set_reg(1, if equal { 4 } else { 5 });
    ctx.set_reg(2, 0x20);
    handlers::alu(&mut ctx.cpu, ops(opcodes::CMP, 0, 1)).unwrap();
    ctx.cpu.pc = 0;

    let handler: Handler<CaptureConsole> = if ir == opcodes::JEQ {
        handlers::jeq
    } else {
        handlers::jne
    };
    handler(&mut ctx.cpu, ops(ir, 2, 0)).unwrap();
    assert_eq!(ctx.cpu.pc, expected_pc);
}

#[test]
fn test_jump_to_invalid_register_faults() {
    let mut ctx = TestContext::new();
    let err = handlers::jmp(&mut ctx.cpu, ops(opcodes::JMP, 8, 0)).unwrap_err();
    assert!(matches!(err, ExecError::InvalidRegister { index: 8, .. }));
    assert_eq!(ctx.cpu.stats.branches_taken, 0);
}
