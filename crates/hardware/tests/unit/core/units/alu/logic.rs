//! ALU Comparison Tests.
//!
//! CMP never produces a register value and always re-derives every flag.

use ls8_core::core::units::alu::{Alu, AluOp, AluOutcome};
use pretty_assertions::assert_eq;

fn flags(a: u8, b: u8) -> (bool, bool, bool) {
    match Alu::execute(AluOp::Cmp, a, b) {
        AluOutcome::Flags(fl) => (fl.equal(), fl.less(), fl.greater()),
        AluOutcome::Value(v) => panic!("CMP produced value {v}"),
    }
}

#[test]
fn test_cmp_equal() {
    assert_eq!(flags(0, 0), (true, false, false));
    assert_eq!(flags(255, 255), (true, false, false));
}

#[test]
fn test_cmp_less() {
    assert_eq!(flags(0, 1), (false, true, false));
    assert_eq!(flags(254, 255), (false, true, false));
}

#[test]
fn test_cmp_greater() {
    assert_eq!(flags(1, 0), (false, false, true));
    assert_eq!(flags(255, 0), (false, false, true));
}

#[test]
fn test_cmp_is_unsigned() {
    // 0x80 is 128, not -128.
    assert_eq!(flags(0x80, 0x7F), (false, false, true));
}
