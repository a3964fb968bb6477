//! Unit tests for architectural constants.

use ls8_core::common::constants::*;

#[test]
fn test_memory_matches_address_width() {
    assert_eq!(MEMORY_SIZE, u8::MAX as usize + 1);
}

#[test]
fn test_sp_is_last_register() {
    assert_eq!(SP as usize, REGISTER_COUNT - 1);
}

#[test]
fn test_stack_base() {
    assert_eq!(STACK_BASE, 244);
}

#[test]
fn test_flag_bits_are_disjoint() {
    assert_eq!(FLAG_EQUAL & FLAG_GREATER, 0);
    assert_eq!(FLAG_EQUAL & FLAG_LESS, 0);
    assert_eq!(FLAG_GREATER & FLAG_LESS, 0);
    assert_eq!(FLAG_MASK, 0b111);
}
