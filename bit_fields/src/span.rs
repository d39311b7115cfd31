//! Byte span lookup for bit-addressed fields.

use core::ops::Range;

/// Inclusive range of buffer bytes touched by a field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ByteSpan {
    pub first: usize,
    pub last: usize,
}

impl ByteSpan {
    #[inline]
    pub fn len(self) -> usize {
        self.last - self.first + 1
    }

    #[inline]
    pub fn range(self) -> Range<usize> {
        self.first..self.last + 1
    }
}

/// Returns the first and last byte holding bits `bit_offset..bit_offset + bit_length`.
///
/// `bit_length` must be at least 1.
#[inline]
pub fn locate(bit_offset: usize, bit_length: usize) -> ByteSpan {
    debug_assert!(bit_length > 0, "fields are at least one bit wide");
    ByteSpan {
        first: bit_offset / 8,
        last: (bit_offset + bit_length - 1) / 8,
    }
}
