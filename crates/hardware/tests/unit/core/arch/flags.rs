//! # Flags Register Tests
//!
//! Verifies bit layout (E = bit 0, G = bit 1, L = bit 2), masking of
//! undefined bits, and that comparisons set exactly one flag.

use ls8_core::core::arch::Flags;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_bit_positions() {
    assert_eq!(Flags::compare(5, 5).bits(), 0b001);
    assert_eq!(Flags::compare(6, 5).bits(), 0b010);
    assert_eq!(Flags::compare(4, 5).bits(), 0b100);
}

#[test]
fn test_new_is_clear() {
    let fl = Flags::new();
    assert_eq!(fl.bits(), 0);
    assert!(!fl.equal() && !fl.less() && !fl.greater());
}

#[test]
fn test_from_bits_drops_undefined_bits() {
    assert_eq!(Flags::from_bits(0xFF).bits(), 0b111);
    assert_eq!(Flags::from_bits(0b1000_0001).bits(), 0b001);
}

#[test]
fn test_display() {
    assert_eq!(Flags::compare(1, 1).to_string(), "--E");
    assert_eq!(Flags::compare(0, 1).to_string(), "L--");
    assert_eq!(Flags::compare(2, 1).to_string(), "-G-");
}

proptest! {
    #[test]
    fn prop_compare_sets_exactly_one_flag(a in any::<u8>(), b in any::<u8>()) {
        let fl = Flags::compare(a, b);
        let set = [fl.equal(), fl.less(), fl.greater()].iter().filter(|&&x| x).count();
        prop_assert_eq!(set, 1);
        prop_assert_eq!(fl.equal(), a == b);
        prop_assert_eq!(fl.less(), a < b);
        prop_assert_eq!(fl.greater(), a > b);
    }
}
