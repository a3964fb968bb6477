//! ALU Arithmetic Operation Tests.
//!
//! Deterministic edge cases and properties for ADD and MUL. Both wrap at the
//! byte boundary; there is no carry or overflow flag.

use ls8_core::core::units::alu::{Alu, AluOp, AluOutcome};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

/// Execute an arithmetic ALU operation and unwrap the register result.
fn value(op: AluOp, a: u8, b: u8) -> u8 {
    match Alu::execute(op, a, b) {
        AluOutcome::Value(v) => v,
        AluOutcome::Flags(fl) => panic!("{op} produced flags {fl}"),
    }
}

#[rstest]
#[case(0, 0, 0)]
#[case(42, 0, 42)]
#[case(100, 55, 155)]
#[case(255, 1, 0)]
#[case(200, 100, 44)]
#[case(255, 255, 254)]
fn test_add(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(value(AluOp::Add, a, b), expected);
}

#[rstest]
#[case(8, 9, 72)]
#[case(0, 200, 0)]
#[case(1, 77, 77)]
#[case(16, 16, 0)]
#[case(255, 255, 1)]
#[case(15, 17, 255)]
#[case(20, 13, 4)]
fn test_mul(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(value(AluOp::Mul, a, b), expected);
}

proptest! {
    #[test]
    fn prop_mul_is_product_mod_256(a in any::<u8>(), b in any::<u8>()) {
        let expected = ((u32::from(a) * u32::from(b)) % 256) as u8;
        prop_assert_eq!(value(AluOp::Mul, a, b), expected);
    }

    #[test]
    fn prop_add_is_sum_mod_256(a in any::<u8>(), b in any::<u8>()) {
        let expected = ((u32::from(a) + u32::from(b)) % 256) as u8;
        prop_assert_eq!(value(AluOp::Add, a, b), expected);
    }
}
