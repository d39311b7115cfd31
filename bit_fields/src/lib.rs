//! # bit_fields
//!
//! A `no_std` compatible engine for records whose fields are not byte aligned.
//!
//! A [`BitField`] owns one byte buffer and a list of named fields laid out
//! back to back, MSB first. Fields may start and end anywhere inside a byte
//! and may be wider than 64 bits; every read and write is bit exact and leaves
//! neighbouring fields alone.
//!
//! ```rust
//! use bit_fields::{BitField, SetOutcome, TypeTag, Value};
//!
//! // A 3-bit version, a 13-bit length and a 32-bit sequence number.
//! let mut header = BitField::builder()
//!     .field("version", 3, TypeTag::U4)
//!     .field("length", 13, TypeTag::U16)
//!     .field("seq", 32, TypeTag::U32)
//!     .build()
//!     .expect("valid layout");
//!
//! header.set_field("version", Value::U4(5)).unwrap();
//! header.set_field("length", 1500u16).unwrap();
//! header.set_field("seq", 0xDEAD_BEEFu32).unwrap();
//!
//! assert_eq!(header.byte_len(), 6);
//! assert_eq!(header.get_field("length").unwrap(), Value::U16(1500));
//!
//! // 3 bits cannot hold 9; the low bits are kept and the caller is told.
//! let outcome = header.set_field("version", Value::U4(9)).unwrap();
//! assert_eq!(outcome, SetOutcome::DataTruncated { value_bits: 4, field_bits: 3 });
//! assert_eq!(header.get_field("version").unwrap(), Value::U4(1));
//! ```
//!
//! ## Features
//! - `std` (default): `std::error::Error` for [`BitFieldError`] and
//!   `std::io` helpers on [`BitField`]
//! - `serde`: `Serialize`/`Deserialize` for [`TypeTag`], [`Value`] and
//!   [`FieldDescriptor`]

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub use error::BitFieldError;

pub mod access;
pub mod mask;
pub mod span;

mod bit_field;
mod field;
mod value;

#[cfg(feature = "std")]
mod io;

pub use bit_field::{BitField, BitFieldBuilder, SetOutcome};
pub use field::FieldDescriptor;
pub use value::{TypeTag, Value};
pub use wide_uint::WideUint;
