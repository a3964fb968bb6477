//! ALU Operation Resolution Tests.
//!
//! Operations resolve from names and from ALU-class opcodes; anything else is
//! an `UnsupportedOperation`.

use ls8_core::common::ExecError;
use ls8_core::core::units::alu::AluOp;
use ls8_core::isa::opcodes;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("ADD", AluOp::Add)]
#[case("MUL", AluOp::Mul)]
#[case("CMP", AluOp::Cmp)]
#[case("mul", AluOp::Mul)]
fn test_from_name(#[case] name: &str, #[case] expected: AluOp) {
    assert_eq!(name.parse::<AluOp>().unwrap(), expected);
}

#[rstest]
#[case("DIV")]
#[case("")]
#[case("ADDX")]
fn test_unknown_name_is_unsupported(#[case] name: &str) {
    match name.parse::<AluOp>() {
        Err(ExecError::UnsupportedOperation(got)) => assert_eq!(got, name),
        other => panic!("expected UnsupportedOperation, got {other:?}"),
    }
}

#[test]
fn test_from_opcode() {
    assert_eq!(AluOp::try_from(opcodes::ADD).unwrap(), AluOp::Add);
    assert_eq!(AluOp::try_from(opcodes::MUL).unwrap(), AluOp::Mul);
    assert_eq!(AluOp::try_from(opcodes::CMP).unwrap(), AluOp::Cmp);
}

#[test]
fn test_non_alu_opcode_is_unsupported() {
    let err = AluOp::try_from(opcodes::LDI).unwrap_err();
    assert!(matches!(err, ExecError::UnsupportedOperation(_)));
}

#[test]
fn test_name_round_trips_through_display() {
    for op in [AluOp::Add, AluOp::Mul, AluOp::Cmp] {
        assert_eq!(op.to_string().parse::<AluOp>().unwrap(), op);
    }
}
