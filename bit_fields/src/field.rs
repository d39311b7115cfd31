use alloc::string::String;

use crate::TypeTag;
use crate::mask::Mask;
use crate::span::{ByteSpan, locate};

/// Position, width and type of one named field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDescriptor {
    name: String,
    bit_offset: usize,
    bit_length: usize,
    tag: TypeTag,
}

impl FieldDescriptor {
    pub(crate) fn new(name: String, bit_offset: usize, bit_length: usize, tag: TypeTag) -> Self {
        Self {
            name,
            bit_offset,
            bit_length,
            tag,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bit_offset(&self) -> usize {
        self.bit_offset
    }

    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// First bit after the field.
    pub fn bit_end(&self) -> usize {
        self.bit_offset + self.bit_length
    }

    pub fn span(&self) -> ByteSpan {
        locate(self.bit_offset, self.bit_length)
    }

    pub fn mask(&self) -> Mask {
        Mask::new(self.bit_length, self.bit_offset % 8)
    }
}
