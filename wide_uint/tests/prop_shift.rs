//! Property-based tests for WideUint shifts, checked against native u128 arithmetic.

use proptest::prelude::*;
use wide_uint::WideUint;

fn wide(v: u128) -> WideUint {
    WideUint::from_be_bytes(&v.to_be_bytes())
}

//
// -----------------------------------------------------------------------------
// Conversion Properties
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_from_bytes_matches_native(v: u128) {
        let n = wide(v);
        prop_assert_eq!(n.bit_len(), 128 - v.leading_zeros() as usize);
        prop_assert_eq!(n.low_u64(), v as u64);
        prop_assert_eq!(n.to_be_bytes_padded(16), Some(v.to_be_bytes().to_vec()));
    }
}

proptest! {
    #[test]
    fn prop_leading_zero_bytes_are_ignored(v: u64, pad in 0usize..8) {
        let mut bytes = vec![0u8; pad];
        bytes.extend_from_slice(&v.to_be_bytes());
        prop_assert_eq!(WideUint::from_be_bytes(&bytes), WideUint::from(v));
    }
}

//
// -----------------------------------------------------------------------------
// Shift Properties
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_shift_left_matches_native(v: u64, bits in 0usize..64) {
        let expected = (v as u128) << bits;
        prop_assert_eq!(WideUint::from(v) << bits, wide(expected));
    }
}

proptest! {
    #[test]
    fn prop_shift_right_matches_native(v: u128, bits in 0usize..140) {
        let expected = if bits >= 128 { 0 } else { v >> bits };
        prop_assert_eq!(wide(v) >> bits, wide(expected));
    }
}

proptest! {
    #[test]
    fn prop_shift_left_then_right_is_identity(bytes in prop::collection::vec(any::<u8>(), 0..40), bits in 0usize..200) {
        let n = WideUint::from_be_bytes(&bytes);
        prop_assert_eq!((&n << bits) >> bits, n);
    }
}

proptest! {
    #[test]
    fn prop_truncate_matches_native_mask(v: u128, bits in 1usize..=128) {
        let mask = if bits == 128 { u128::MAX } else { (1u128 << bits) - 1 };
        prop_assert_eq!(wide(v).truncate(bits), wide(v & mask));
    }
}
