//! Property tests for the recursion exercises and bit-mask primitives.

use proptest::prelude::*;

use algo_demos::bit_mask::{check_bits, clear_bits, set_bits, toggle_bits};
use algo_demos::recursion::digit_sum::add_digits;
use algo_demos::recursion::reverse_string::reverse_string;

proptest! {
    #[test]
    fn add_digits_matches_decimal_expansion(n in any::<u64>()) {
        let expected: u64 = n
            .to_string()
            .bytes()
            .map(|b| u64::from(b - b'0'))
            .sum();
        prop_assert_eq!(add_digits(n), expected);
    }

    #[test]
    fn reverse_string_is_an_involution(s in ".*") {
        prop_assert_eq!(reverse_string(&reverse_string(&s)), s);
    }

    #[test]
    fn reverse_string_reverses_chars(s in ".*") {
        let expected: String = s.chars().rev().collect();
        prop_assert_eq!(reverse_string(&s), expected);
    }

    #[test]
    fn set_forces_masked_bits_on(v in any::<u32>(), m in any::<u32>()) {
        prop_assert_eq!(set_bits(v, m) & m, m);
        // Unmasked bits are untouched.
        prop_assert_eq!(set_bits(v, m) & !m, v & !m);
    }

    #[test]
    fn clear_forces_masked_bits_off(v in any::<u32>(), m in any::<u32>()) {
        prop_assert_eq!(clear_bits(v, m) & m, 0);
        prop_assert_eq!(clear_bits(v, m) & !m, v & !m);
    }

    #[test]
    fn toggle_is_an_involution(v in any::<u32>(), m in any::<u32>()) {
        prop_assert_eq!(toggle_bits(toggle_bits(v, m), m), v);
    }

    #[test]
    fn check_is_zero_iff_no_masked_bit_is_set(v in any::<u32>(), m in any::<u32>()) {
        let masked_bit_set = (0..32).any(|b| m & (1 << b) != 0 && v & (1 << b) != 0);
        prop_assert_eq!(check_bits(v, m) != 0, masked_bit_set);
    }
}
