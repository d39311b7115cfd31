//! # wide_uint
//!
//! A `no_std` unsigned integer of unbounded width, stored as big-endian bytes.
//!
//! Only the handful of operations a bit-packing engine needs are provided:
//! conversion to and from big-endian byte strings and shifts by an arbitrary
//! number of bits.
//!
//! ```rust
//! use wide_uint::WideUint;
//!
//! let n = WideUint::from_be_bytes(&[0x01, 0x80]);
//! assert_eq!((&n << 4).to_be_bytes(), vec![0x18, 0x00]);
//! assert_eq!((&n >> 7).low_u64(), 3);
//! ```

#![no_std]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Shl, Shr};

/// Unsigned big-endian integer of arbitrary width.
///
/// The byte representation is kept normalized: no leading zero bytes, and
/// zero is the empty sequence. Equality is therefore numeric equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WideUint {
    digits: Vec<u8>,
}

impl WideUint {
    pub const fn zero() -> Self {
        Self { digits: Vec::new() }
    }

    /// Interprets `bytes` as a big-endian unsigned integer.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        Self {
            digits: bytes[start..].to_vec(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of significant bits (0 for zero).
    pub fn bit_len(&self) -> usize {
        match self.digits.first() {
            Some(&top) => (self.digits.len() - 1) * 8 + (8 - top.leading_zeros() as usize),
            None => 0,
        }
    }

    /// Number of bytes in the minimal big-endian representation.
    pub fn byte_len(&self) -> usize {
        self.digits.len()
    }

    /// Minimal big-endian representation. Zero yields an empty vector.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.digits.clone()
    }

    pub fn as_be_bytes(&self) -> &[u8] {
        &self.digits
    }

    /// Big-endian representation left-padded with zeros to exactly `len` bytes,
    /// or `None` if the value needs more than `len` bytes.
    pub fn to_be_bytes_padded(&self, len: usize) -> Option<Vec<u8>> {
        if self.digits.len() > len {
            return None;
        }
        let mut out = vec![0u8; len - self.digits.len()];
        out.extend_from_slice(&self.digits);
        Some(out)
    }

    /// Low 64 bits of the value.
    pub fn low_u64(&self) -> u64 {
        let skip = self.digits.len().saturating_sub(8);
        self.digits[skip..]
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | b as u64)
    }

    /// Keeps only the low-order `bits` bits.
    pub fn truncate(&self, bits: usize) -> Self {
        if bits == 0 {
            return Self::zero();
        }
        let nbytes = bits.div_ceil(8);
        let skip = self.digits.len().saturating_sub(nbytes);
        let mut digits = self.digits[skip..].to_vec();
        let rem = bits % 8;
        if rem != 0 && digits.len() == nbytes {
            digits[0] &= (1u8 << rem) - 1;
        }
        Self::from_digits(digits)
    }

    /// `self * 2^bits`.
    pub fn shift_left(&self, bits: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let byte_shift = bits / 8;
        let bit_shift = bits % 8;

        let mut digits = vec![0u8; self.digits.len() + 1];
        for (i, &d) in self.digits.iter().enumerate() {
            let wide = (d as u16) << bit_shift;
            digits[i] |= (wide >> 8) as u8;
            digits[i + 1] |= wide as u8;
        }
        digits.resize(digits.len() + byte_shift, 0);
        Self::from_digits(digits)
    }

    /// `self / 2^bits`, rounding toward zero.
    pub fn shift_right(&self, bits: usize) -> Self {
        let byte_shift = bits / 8;
        if byte_shift >= self.digits.len() {
            return Self::zero();
        }
        let bit_shift = bits % 8;
        let kept = &self.digits[..self.digits.len() - byte_shift];

        let mut prev = 0u8;
        let digits = kept
            .iter()
            .map(|&d| {
                let pair = ((prev as u16) << 8) | d as u16;
                prev = d;
                (pair >> bit_shift) as u8
            })
            .collect();
        Self::from_digits(digits)
    }

    fn from_digits(mut digits: Vec<u8>) -> Self {
        let start = digits.iter().position(|&b| b != 0).unwrap_or(digits.len());
        digits.drain(..start);
        Self { digits }
    }
}

impl From<u64> for WideUint {
    fn from(value: u64) -> Self {
        Self::from_be_bytes(&value.to_be_bytes())
    }
}

impl Shl<usize> for WideUint {
    type Output = WideUint;
    fn shl(self, bits: usize) -> WideUint {
        self.shift_left(bits)
    }
}

impl Shl<usize> for &WideUint {
    type Output = WideUint;
    fn shl(self, bits: usize) -> WideUint {
        self.shift_left(bits)
    }
}

impl Shr<usize> for WideUint {
    type Output = WideUint;
    fn shr(self, bits: usize) -> WideUint {
        self.shift_right(bits)
    }
}

impl Shr<usize> for &WideUint {
    type Output = WideUint;
    fn shr(self, bits: usize) -> WideUint {
        self.shift_right(bits)
    }
}

impl fmt::LowerHex for WideUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        match self.digits.split_first() {
            None => f.write_str("0"),
            Some((top, rest)) => {
                write!(f, "{:x}", top)?;
                rest.iter().try_for_each(|b| write!(f, "{:02x}", b))
            }
        }
    }
}
