//! Mask-and-shift transfer of a field's bits to and from the buffer.

use alloc::vec::Vec;

use wide_uint::WideUint;

use crate::BitFieldError;
use crate::mask::Mask;
use crate::span::ByteSpan;

type Result<T> = core::result::Result<T, BitFieldError>;

/// Extracts the bits selected by `mask` from `buf[span]`, right-aligned.
pub fn read_bits(buf: &[u8], span: ByteSpan, mask: &Mask) -> Result<WideUint> {
    let data = buf.get(span.range()).ok_or(BitFieldError::LengthMismatch {
        expected: span.len(),
        found: buf.len().saturating_sub(span.first),
    })?;
    if data.len() != mask.len() {
        return Err(BitFieldError::LengthMismatch {
            expected: mask.len(),
            found: data.len(),
        });
    }

    let masked: Vec<u8> = data
        .iter()
        .zip(mask.as_bytes())
        .map(|(d, m)| d & m)
        .collect();

    Ok(WideUint::from_be_bytes(&masked) >> mask.right_padding())
}

/// Merges `value` into the bits of `buf[span]` selected by `mask`.
///
/// Bits outside the mask are left untouched. `value` must already fit the
/// field; nothing is written unless every check passes.
pub fn write_bits(buf: &mut [u8], span: ByteSpan, mask: &Mask, value: &WideUint) -> Result<()> {
    let shifted = value << mask.right_padding();
    let bytes = shifted
        .to_be_bytes_padded(span.len())
        .ok_or(BitFieldError::BufferTooSmall {
            needed: shifted.byte_len(),
            available: span.len(),
        })?;

    let found = buf.len().saturating_sub(span.first);
    let target = buf
        .get_mut(span.range())
        .ok_or(BitFieldError::LengthMismatch {
            expected: span.len(),
            found,
        })?;
    if target.len() != mask.len() {
        return Err(BitFieldError::LengthMismatch {
            expected: mask.len(),
            found: target.len(),
        });
    }

    for ((byte, m), v) in target.iter_mut().zip(mask.as_bytes()).zip(&bytes) {
        *byte = (*byte & !m) | (v & m);
    }
    Ok(())
}
