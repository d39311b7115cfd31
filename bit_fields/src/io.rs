//! Raw buffer transfer over `std::io`.
//!
//! Only the packed bytes travel; the reader side must already have the same
//! field layout.

use std::io::{Read, Write};

use crate::{BitField, BitFieldError};

impl BitField {
    /// Writes the packed buffer to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), BitFieldError> {
        writer.write_all(self.as_bytes())?;
        Ok(())
    }

    /// Fills the buffer with exactly [`byte_len`](Self::byte_len) bytes from `reader`.
    ///
    /// The record is left unchanged if the reader runs short.
    pub fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<(), BitFieldError> {
        let mut bytes = vec![0u8; self.byte_len()];
        reader.read_exact(&mut bytes)?;
        self.load(&bytes)
    }
}
