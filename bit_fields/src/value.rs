//! Typed field values and their type tags.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use wide_uint::WideUint;

/// How a field's raw bits are interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeTag {
    U4,
    U8,
    U12,
    U16,
    U32,
    U64,
    /// Raw big-endian byte string of any length.
    Bytes,
}

impl TypeTag {
    /// Width of the numeric type in bits, `None` for byte strings.
    pub const fn bits(self) -> Option<usize> {
        match self {
            TypeTag::U4 => Some(4),
            TypeTag::U8 => Some(8),
            TypeTag::U12 => Some(12),
            TypeTag::U16 => Some(16),
            TypeTag::U32 => Some(32),
            TypeTag::U64 => Some(64),
            TypeTag::Bytes => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::U4 => "u4",
            TypeTag::U8 => "u8",
            TypeTag::U12 => "u12",
            TypeTag::U16 => "u16",
            TypeTag::U32 => "u32",
            TypeTag::U64 => "u64",
            TypeTag::Bytes => "bytes",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value read from or written to a field.
///
/// The variant must match the field's [`TypeTag`]. `U4` and `U12` are carried
/// in the next native width up; only their low 4 or 12 bits are stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    U4(u8),
    U8(u8),
    U12(u16),
    U16(u16),
    U32(u32),
    U64(u64),
    Bytes(Vec<u8>),
}

impl Value {
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::U4(_) => TypeTag::U4,
            Value::U8(_) => TypeTag::U8,
            Value::U12(_) => TypeTag::U12,
            Value::U16(_) => TypeTag::U16,
            Value::U32(_) => TypeTag::U32,
            Value::U64(_) => TypeTag::U64,
            Value::Bytes(_) => TypeTag::Bytes,
        }
    }

    /// Numeric payload, `None` for byte strings.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::U4(v) | Value::U8(v) => Some(v as u64),
            Value::U12(v) | Value::U16(v) => Some(v as u64),
            Value::U32(v) => Some(v as u64),
            Value::U64(v) => Some(v),
            Value::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Bits needed to represent the value as given, before any narrowing.
    pub fn significant_bits(&self) -> usize {
        match self {
            Value::Bytes(b) => WideUint::from_be_bytes(b).bit_len(),
            other => other
                .as_u64()
                .map_or(0, |v| 64 - v.leading_zeros() as usize),
        }
    }

    /// Big-endian bytes sized to the value's tag.
    ///
    /// `U4` keeps its low nibble and `U12` its low 12 bits; the other numeric
    /// tags produce exactly their native width.
    pub fn to_tagged_bytes(&self) -> Vec<u8> {
        match *self {
            Value::U4(v) => vec![v & 0x0F],
            Value::U8(v) => vec![v],
            Value::U12(v) => vec![((v >> 8) & 0x0F) as u8, (v & 0xFF) as u8],
            Value::U16(v) => v.to_be_bytes().to_vec(),
            Value::U32(v) => (0..4).map(|i| (v >> (24 - 8 * i)) as u8).collect(),
            Value::U64(v) => v.to_be_bytes().to_vec(),
            Value::Bytes(ref b) => b.clone(),
        }
    }

    /// Rebuilds a value of type `tag` from the bits read out of a field.
    ///
    /// Numeric tags keep the low-order bits their width defines. Byte strings
    /// come back in minimal big-endian form: no leading zero bytes, and an
    /// all-zero field reads as an empty string.
    pub fn from_bits(tag: TypeTag, bits: &WideUint) -> Value {
        let low = bits.low_u64();
        match tag {
            TypeTag::U4 => Value::U4((low & 0x0F) as u8),
            TypeTag::U8 => Value::U8(low as u8),
            TypeTag::U12 => Value::U12((low & 0x0FFF) as u16),
            TypeTag::U16 => Value::U16(low as u16),
            TypeTag::U32 => Value::U32(low as u32),
            TypeTag::U64 => Value::U64(low),
            TypeTag::Bytes => Value::Bytes(bits.to_be_bytes()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bytes(b) => {
                f.write_str("0x")?;
                b.iter().try_for_each(|byte| write!(f, "{:02x}", byte))
            }
            other => write!(f, "{}", other.as_u64().unwrap_or_default()),
        }
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Bytes(v.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Bytes(v.into_bytes())
    }
}
