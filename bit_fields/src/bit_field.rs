//! Named fields packed into one byte buffer.
//!
//! # Examples
//!
//! ```rust
//! use bit_fields::{BitField, TypeTag, Value};
//!
//! let mut record = BitField::new();
//! record.create_field("a", 4, TypeTag::U4).unwrap();
//! record.create_field("b", 4, TypeTag::U4).unwrap();
//! record.create_field("c", 8, TypeTag::U8).unwrap();
//!
//! record.set_field("a", Value::U4(9)).unwrap();
//! record.set_field("b", Value::U4(5)).unwrap();
//! record.set_field("c", 170u8).unwrap();
//!
//! assert_eq!(record.dump(), (&[0x95, 0xAA][..], 16));
//! assert_eq!(record.get_field("c").unwrap(), Value::U8(170));
//! ```
//!
//! ## Restoring a record
//!
//! ```rust
//! use bit_fields::{BitField, TypeTag, Value};
//!
//! let mut record = BitField::builder()
//!     .field("flag", 1, TypeTag::U4)
//!     .field("count", 12, TypeTag::U12)
//!     .build()
//!     .unwrap();
//!
//! record.load(&[0b1000_0000, 0b0010_1000]).unwrap();
//! assert_eq!(record.get_field("flag").unwrap(), Value::U4(1));
//! assert_eq!(record.get_field("count").unwrap(), Value::U12(5));
//! ```

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use wide_uint::WideUint;

use crate::access::{read_bits, write_bits};
use crate::{BitFieldError, FieldDescriptor, TypeTag, Value};

type Result<T> = core::result::Result<T, BitFieldError>;

/// Result of a successful [`BitField::set_field`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SetOutcome {
    /// The value was stored exactly.
    Stored,
    /// The value needed more bits than the field or its type holds; only the
    /// low-order `field_bits` bits were kept.
    DataTruncated { value_bits: usize, field_bits: usize },
}

impl SetOutcome {
    pub fn is_truncated(self) -> bool {
        matches!(self, SetOutcome::DataTruncated { .. })
    }
}

/// A byte buffer addressed as an ordered set of named bit fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitField {
    data: Vec<u8>,
    total_bits: usize,
    fields: Vec<FieldDescriptor>,
    index: BTreeMap<String, usize>,
}

impl BitField {
    /// Creates an empty record with no fields and a zero-length buffer.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> BitFieldBuilder {
        BitFieldBuilder::new()
    }

    /// Appends a field of `bit_length` bits after the last one.
    ///
    /// The buffer grows to hold the new field; the new bytes are zero.
    ///
    /// # Errors
    ///
    /// [`BitFieldError::DuplicateField`] if `name` is taken,
    /// [`BitFieldError::InvalidBitLength`] for a zero-width field,
    /// [`BitFieldError::LayoutOverflow`] if the total bit count would not fit
    /// in a `usize` and [`BitFieldError::ResizeFailed`] if the buffer cannot
    /// grow. The record is unchanged on error.
    pub fn create_field(&mut self, name: &str, bit_length: usize, tag: TypeTag) -> Result<()> {
        if self.index.contains_key(name) {
            return Err(BitFieldError::DuplicateField(name.to_string()));
        }
        if bit_length == 0 {
            return Err(BitFieldError::InvalidBitLength(bit_length));
        }

        let total_bits = self
            .total_bits
            .checked_add(bit_length)
            .ok_or(BitFieldError::LayoutOverflow {
                total_bits: self.total_bits,
                bit_length,
            })?;
        self.ensure_capacity(total_bits)?;

        let descriptor = FieldDescriptor::new(name.to_string(), self.total_bits, bit_length, tag);
        log::debug!(
            "creating field '{}' at bit {} ({} bits, {})",
            name,
            self.total_bits,
            bit_length,
            tag
        );

        self.total_bits = total_bits;
        self.index.insert(descriptor.name().to_string(), self.fields.len());
        self.fields.push(descriptor);
        Ok(())
    }

    fn ensure_capacity(&mut self, total_bits: usize) -> Result<()> {
        let required_bytes = total_bits.div_ceil(8);
        if self.data.len() < required_bytes {
            self.data
                .try_reserve_exact(required_bytes - self.data.len())
                .map_err(|_| BitFieldError::ResizeFailed(required_bytes))?;
            self.data.resize(required_bytes, 0);
        }
        Ok(())
    }

    /// Reads a field as a value of its declared type.
    pub fn get_field(&self, name: &str) -> Result<Value> {
        let field = self.lookup(name)?;
        let bits = read_bits(&self.data, field.span(), &field.mask())?;
        log::trace!("read field '{}': {:#x}", name, bits);
        Ok(Value::from_bits(field.tag(), &bits))
    }

    /// Writes `value` into a field without disturbing any other field.
    ///
    /// A value wider than the field is narrowed to its low-order bits and
    /// reported as [`SetOutcome::DataTruncated`].
    ///
    /// # Errors
    ///
    /// [`BitFieldError::UnknownField`] if there is no such field and
    /// [`BitFieldError::TypeMismatch`] if `value` is not of the field's type.
    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) -> Result<SetOutcome> {
        let value = value.into();
        let field = self.lookup(name)?;
        if value.tag() != field.tag() {
            return Err(BitFieldError::TypeMismatch {
                field: name.to_string(),
                expected: field.tag(),
                found: value.tag(),
            });
        }

        let value_bits = value.significant_bits();
        let field_bits = match field.tag().bits() {
            Some(type_bits) => type_bits.min(field.bit_length()),
            None => field.bit_length(),
        };
        let bits = WideUint::from_be_bytes(&value.to_tagged_bytes()).truncate(field.bit_length());

        let outcome = if value_bits > field_bits {
            log::warn!(
                "value for field '{}' needs {} bits, truncated to {}",
                name,
                value_bits,
                field_bits
            );
            SetOutcome::DataTruncated {
                value_bits,
                field_bits,
            }
        } else {
            SetOutcome::Stored
        };

        let (span, mask) = (field.span(), field.mask());
        write_bits(&mut self.data, span, &mask, &bits)?;
        log::trace!("wrote field '{}': {:#x}", name, bits);
        Ok(outcome)
    }

    /// Replaces the whole buffer.
    ///
    /// # Errors
    ///
    /// [`BitFieldError::LengthMismatch`] unless `bytes` is exactly
    /// [`byte_len`](Self::byte_len) long.
    pub fn load(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() != self.byte_len() {
            return Err(BitFieldError::LengthMismatch {
                expected: self.byte_len(),
                found: bytes.len(),
            });
        }
        self.data.copy_from_slice(bytes);
        log::debug!("loaded {} bytes ({} bits)", bytes.len(), self.total_bits);
        Ok(())
    }

    /// The buffer and the number of meaningful bits in it.
    ///
    /// Bits past `total_bits` in the last byte are padding.
    pub fn dump(&self) -> (&[u8], usize) {
        (&self.data, self.total_bits)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    /// Fields in creation order, which is also layout order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter()
    }

    fn lookup(&self, name: &str) -> Result<&FieldDescriptor> {
        self.field(name)
            .ok_or_else(|| BitFieldError::UnknownField(name.to_string()))
    }
}

/// Declares a record layout field by field.
#[derive(Debug, Default)]
pub struct BitFieldBuilder {
    fields: Vec<(String, usize, TypeTag)>,
}

impl BitFieldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, bit_length: usize, tag: TypeTag) -> Self {
        self.fields.push((name.to_string(), bit_length, tag));
        self
    }

    /// Creates the fields in declaration order, stopping at the first error.
    pub fn build(self) -> Result<BitField> {
        let mut record = BitField::new();
        for (name, bit_length, tag) in &self.fields {
            record.create_field(name, *bit_length, *tag)?;
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn abc() -> BitField {
        BitField::builder()
            .field("a", 4, TypeTag::U4)
            .field("b", 4, TypeTag::U4)
            .field("c", 8, TypeTag::U8)
            .build()
            .unwrap()
    }

    #[test]
    fn nibble_and_byte_layout() -> Result<()> {
        let mut bf = abc();
        assert_eq!(bf.byte_len(), 2);

        assert_eq!(bf.set_field("a", Value::U4(9))?, SetOutcome::Stored);
        assert_eq!(bf.set_field("b", Value::U4(5))?, SetOutcome::Stored);
        assert_eq!(bf.set_field("c", 170u8)?, SetOutcome::Stored);

        assert_eq!(bf.as_bytes(), &[0x95, 0xAA]);
        assert_eq!(bf.get_field("a")?, Value::U4(9));
        assert_eq!(bf.get_field("b")?, Value::U4(5));
        assert_eq!(bf.get_field("c")?, Value::U8(170));
        assert_eq!(bf.dump().1, 16);
        Ok(())
    }

    #[test]
    fn buffer_grows_with_each_field() -> Result<()> {
        let mut bf = BitField::new();
        assert_eq!(bf.dump(), (&[][..], 0));
        bf.create_field("x", 3, TypeTag::U4)?;
        assert_eq!(bf.byte_len(), 1);
        bf.create_field("y", 6, TypeTag::U8)?;
        assert_eq!(bf.byte_len(), 2);
        bf.create_field("z", 7, TypeTag::U8)?;
        assert_eq!(bf.byte_len(), 2);
        assert_eq!(bf.total_bits(), 16);
        assert_eq!(bf.field("z").map(|f| f.bit_offset()), Some(9));
        Ok(())
    }

    #[test]
    fn duplicate_name_leaves_record_unchanged() {
        let mut bf = abc();
        let before = bf.clone();
        let err = bf.create_field("b", 12, TypeTag::U12).unwrap_err();
        assert!(matches!(err, BitFieldError::DuplicateField(ref n) if n == "b"));
        assert_eq!(bf, before);
    }

    #[test]
    fn zero_width_field_is_rejected() {
        let mut bf = BitField::new();
        assert!(matches!(
            bf.create_field("empty", 0, TypeTag::U8),
            Err(BitFieldError::InvalidBitLength(0))
        ));
        assert!(bf.is_empty());
    }

    #[test]
    fn unknown_field_and_type_mismatch() {
        let mut bf = abc();
        assert!(matches!(
            bf.get_field("nope"),
            Err(BitFieldError::UnknownField(_))
        ));
        assert!(matches!(
            bf.set_field("nope", 1u8),
            Err(BitFieldError::UnknownField(_))
        ));
        assert!(matches!(
            bf.set_field("c", 1u16),
            Err(BitFieldError::TypeMismatch {
                expected: TypeTag::U8,
                found: TypeTag::U16,
                ..
            })
        ));
        assert_eq!(bf.as_bytes(), &[0, 0]);
    }

    #[test]
    fn truncation_keeps_low_bits() -> Result<()> {
        let mut bf = BitField::new();
        bf.create_field("small", 8, TypeTag::U16)?;
        let outcome = bf.set_field("small", 0x1ABu16)?;
        assert_eq!(
            outcome,
            SetOutcome::DataTruncated {
                value_bits: 9,
                field_bits: 8
            }
        );
        assert!(outcome.is_truncated());
        assert_eq!(bf.get_field("small")?, Value::U16(0xAB));
        Ok(())
    }

    #[test]
    fn nibble_type_narrows_wider_values() -> Result<()> {
        let mut bf = abc();
        let outcome = bf.set_field("a", Value::U4(0x1F))?;
        assert!(outcome.is_truncated());
        assert_eq!(bf.get_field("a")?, Value::U4(0xF));
        assert_eq!(bf.get_field("b")?, Value::U4(0));
        Ok(())
    }

    #[test]
    fn byte_string_fields() -> Result<()> {
        let mut bf = BitField::new();
        bf.create_field("pad", 3, TypeTag::U4)?;
        bf.create_field("tag", 24, TypeTag::Bytes)?;
        bf.set_field("pad", Value::U4(0b111))?;
        assert_eq!(bf.set_field("tag", "abc")?, SetOutcome::Stored);
        assert_eq!(bf.get_field("tag")?, Value::Bytes(b"abc".to_vec()));
        assert_eq!(bf.get_field("pad")?, Value::U4(0b111));

        assert!(bf.set_field("tag", "abcd")?.is_truncated());
        assert_eq!(bf.get_field("tag")?, Value::from("bcd"));

        bf.set_field("tag", "z")?;
        assert_eq!(bf.get_field("tag")?, Value::from("z"));
        Ok(())
    }

    #[test]
    fn short_byte_strings_read_back_unpadded() -> Result<()> {
        let mut bf = BitField::new();
        bf.create_field("id", 64, TypeTag::Bytes)?;
        bf.create_field("odd", 13, TypeTag::Bytes)?;

        assert_eq!(bf.get_field("id")?, Value::Bytes(Vec::new()));
        bf.set_field("id", vec![0xABu8, 0xCD])?;
        assert_eq!(bf.get_field("id")?, Value::Bytes(vec![0xAB, 0xCD]));

        // Leading zero bytes are not significant.
        bf.set_field("odd", vec![0x00u8, 0x01, 0x7F])?;
        assert_eq!(bf.get_field("odd")?, Value::Bytes(vec![0x01, 0x7F]));
        assert_eq!(bf.get_field("id")?, Value::Bytes(vec![0xAB, 0xCD]));
        Ok(())
    }

    #[test]
    fn layout_overflow_leaves_record_unchanged() -> Result<()> {
        let mut bf = BitField::new();
        bf.create_field("a", 8, TypeTag::U8)?;
        bf.set_field("a", 0x5Au8)?;
        let before = bf.clone();

        let err = bf.create_field("b", usize::MAX, TypeTag::Bytes).unwrap_err();
        assert!(matches!(
            err,
            BitFieldError::LayoutOverflow {
                total_bits: 8,
                bit_length: usize::MAX
            }
        ));
        assert_eq!(bf, before);
        assert!(bf.field("b").is_none());

        bf.create_field("b", 4, TypeTag::U4)?;
        assert_eq!(bf.field("b").map(|f| f.bit_offset()), Some(8));
        Ok(())
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn unallocatable_field_leaves_record_unchanged() {
        let mut bf = abc();
        let before = bf.clone();
        let err = bf
            .create_field("huge", usize::MAX - 16, TypeTag::Bytes)
            .unwrap_err();
        assert!(matches!(err, BitFieldError::ResizeFailed(_)));
        assert_eq!(bf, before);
    }

    #[test]
    fn load_replaces_buffer() -> Result<()> {
        let mut bf = abc();
        bf.load(&[0x95, 0xAA])?;
        assert_eq!(bf.get_field("a")?, Value::U4(9));
        assert!(matches!(
            bf.load(&[1, 2, 3]),
            Err(BitFieldError::LengthMismatch {
                expected: 2,
                found: 3
            })
        ));
        assert_eq!(bf.as_bytes(), &[0x95, 0xAA]);
        Ok(())
    }

    #[test]
    fn fields_iterate_in_creation_order() {
        let bf = BitField::builder()
            .field("zeta", 2, TypeTag::U4)
            .field("alpha", 10, TypeTag::U16)
            .field("mid", 1, TypeTag::U4)
            .build()
            .unwrap();
        let names: Vec<_> = bf.fields().map(|f| f.name()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        let offsets: Vec<_> = bf.fields().map(|f| f.bit_offset()).collect();
        assert_eq!(offsets, vec![0, 2, 12]);
    }

    #[test]
    fn builder_stops_at_first_error() {
        let err = BitField::builder()
            .field("a", 4, TypeTag::U4)
            .field("a", 4, TypeTag::U4)
            .build()
            .unwrap_err();
        assert!(matches!(err, BitFieldError::DuplicateField(_)));
    }
}
