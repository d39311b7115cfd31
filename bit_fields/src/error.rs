use alloc::string::String;

use crate::TypeTag;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BitFieldError {
    #[cfg_attr(feature = "std", error("field '{0}' already exists"))]
    DuplicateField(String),

    #[cfg_attr(feature = "std", error("no field named '{0}'"))]
    UnknownField(String),

    #[cfg_attr(
        feature = "std",
        error("field '{field}' holds {expected} values, got {found}")
    )]
    TypeMismatch {
        field: String,
        expected: TypeTag,
        found: TypeTag,
    },

    #[cfg_attr(
        feature = "std",
        error("length mismatch: expected {expected} bytes, found {found}")
    )]
    LengthMismatch { expected: usize, found: usize },

    #[cfg_attr(
        feature = "std",
        error("value needs {needed} bytes but the field spans {available}")
    )]
    BufferTooSmall { needed: usize, available: usize },

    #[cfg_attr(feature = "std", error("bit length must be at least 1, got {0}"))]
    InvalidBitLength(usize),

    #[cfg_attr(
        feature = "std",
        error("a {bit_length}-bit field after {total_bits} bits overflows the layout")
    )]
    LayoutOverflow { total_bits: usize, bit_length: usize },

    #[cfg_attr(feature = "std", error("failed to grow the buffer to {0} bytes"))]
    ResizeFailed(usize),

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitFieldError::DuplicateField(name) => write!(f, "field '{}' already exists", name),
            BitFieldError::UnknownField(name) => write!(f, "no field named '{}'", name),
            BitFieldError::TypeMismatch {
                field,
                expected,
                found,
            } => write!(
                f,
                "field '{}' holds {} values, got {}",
                field, expected, found
            ),
            BitFieldError::LengthMismatch { expected, found } => write!(
                f,
                "length mismatch: expected {} bytes, found {}",
                expected, found
            ),
            BitFieldError::BufferTooSmall { needed, available } => write!(
                f,
                "value needs {} bytes but the field spans {}",
                needed, available
            ),
            BitFieldError::InvalidBitLength(n) => {
                write!(f, "bit length must be at least 1, got {}", n)
            }
            BitFieldError::LayoutOverflow {
                total_bits,
                bit_length,
            } => write!(
                f,
                "a {}-bit field after {} bits overflows the layout",
                bit_length, total_bits
            ),
            BitFieldError::ResizeFailed(n) => write!(f, "failed to grow the buffer to {} bytes", n),
        }
    }
}
