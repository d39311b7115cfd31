//! Per-byte masks selecting the bits of one field.
//!
//! Bits are numbered MSB-first: bit 0 of a field at offset 0 is the high bit
//! of its first byte.
//!
//! ```rust
//! use bit_fields::mask::Mask;
//!
//! // 12 bits starting 6 bits into the first byte.
//! let mask = Mask::new(12, 6);
//! assert_eq!(mask.as_bytes(), &[0b0000_0011, 0xFF, 0b1100_0000]);
//! assert_eq!(mask.right_padding(), 6);
//! ```

use alloc::vec::Vec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    bytes: Vec<u8>,
}

impl Mask {
    /// Builds the mask for a field of `bit_length` bits whose first bit sits
    /// `offset` bits into its first byte.
    ///
    /// Only `offset % 8` matters, so an absolute bit offset may be passed
    /// directly. A zero-width field gets an empty mask.
    pub fn new(bit_length: usize, offset: usize) -> Self {
        if bit_length == 0 {
            return Mask { bytes: Vec::new() };
        }
        let offset = offset % 8;

        let end = offset + bit_length;
        let n = end.div_ceil(8);
        let mut bytes = alloc::vec![0xFFu8; n];

        bytes[0] = leading_mask(offset);
        let bits_in_last = end - (n - 1) * 8;
        bytes[n - 1] &= trailing_mask(bits_in_last);

        Mask { bytes }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bits of the last byte that lie to the right of the field (0..=7).
    ///
    /// Values read from the field are shifted right by this much, values
    /// written are shifted left by it. An empty mask has no padding.
    pub fn right_padding(&self) -> usize {
        self.bytes.last().map_or(0, |&last| trailing_padding(last))
    }
}

/// Ones from bit `offset` (MSB-first) to the end of the byte: `2^(8 - offset) - 1`.
#[inline]
fn leading_mask(offset: usize) -> u8 {
    ((1u16 << (8 - offset)) - 1) as u8
}

/// The top `bits` bits set: `0xFF - (2^(8 - bits) - 1)`.
#[inline]
fn trailing_mask(bits: usize) -> u8 {
    0xFF - leading_mask(bits)
}

/// Number of zero bits below the lowest set bit; 8 for an empty byte.
#[inline]
pub fn trailing_padding(byte: u8) -> usize {
    byte.trailing_zeros() as usize
}
