//! Preservation of fields that this version of the schema does not declare.
//!
//! Newer producers may add fields to a message. Decoding keeps those fields
//! verbatim, keyed by tag, so that re-encoding the message does not silently
//! drop data written by a newer schema.

use std::collections::btree_map::{self, BTreeMap};
use std::slice;

use bytes::{Buf, BufMut, Bytes};
use prost::encoding::{self, DecodeContext, WireType};
use prost::{DecodeError, Message};

/// The undeclared fields of a message, ordered by tag.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct UnknownFields {
    fields: BTreeMap<u32, Vec<UnknownField>>,
}

/// A single undeclared field value, kept in its wire representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnknownField {
    Varint(u64),
    SixtyFourBit(u64),
    LengthDelimited(Bytes),
    Group(UnknownFields),
    ThirtyTwoBit(u32),
}

impl UnknownField {
    fn wire_type(&self) -> WireType {
        match self {
            UnknownField::Varint(_) => WireType::Varint,
            UnknownField::SixtyFourBit(_) => WireType::SixtyFourBit,
            UnknownField::LengthDelimited(_) => WireType::LengthDelimited,
            UnknownField::Group(_) => WireType::StartGroup,
            UnknownField::ThirtyTwoBit(_) => WireType::ThirtyTwoBit,
        }
    }
}

/// An iterator over `(tag, field)` pairs of an [`UnknownFields`] set.
#[derive(Debug)]
pub struct Iter<'a> {
    tags: btree_map::Iter<'a, u32, Vec<UnknownField>>,
    current: Option<(u32, slice::Iter<'a, UnknownField>)>,
}

impl UnknownFields {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of field values held, counting repeated occurrences of a tag.
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// Values recorded for `tag`, in the order they were decoded.
    pub fn get(&self, tag: u32) -> &[UnknownField] {
        self.fields.get(&tag).map_or(&[][..], Vec::as_slice)
    }

    /// Records a value for `tag`.
    pub fn push(&mut self, tag: u32, field: UnknownField) {
        self.fields.entry(tag).or_default().push(field);
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            tags: self.fields.iter(),
            current: None,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (u32, &'a UnknownField);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((tag, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    return Some((*tag, value));
                }
                self.current = None;
            }
            let (tag, values) = self.tags.next()?;
            self.current = Some((*tag, values.iter()));
        }
    }
}

impl<'a> IntoIterator for &'a UnknownFields {
    type Item = (u32, &'a UnknownField);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Message for UnknownFields {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        for (tag, field) in self {
            match field {
                UnknownField::Varint(value) => {
                    encoding::encode_key(tag, WireType::Varint, buf);
                    encoding::encode_varint(*value, buf);
                }
                UnknownField::SixtyFourBit(value) => encoding::fixed64::encode(tag, value, buf),
                UnknownField::LengthDelimited(value) => encoding::bytes::encode(tag, value, buf),
                UnknownField::Group(value) => encoding::group::encode(tag, value, buf),
                UnknownField::ThirtyTwoBit(value) => encoding::fixed32::encode(tag, value, buf),
            }
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        let field = match wire_type {
            WireType::Varint => UnknownField::Varint(encoding::decode_varint(buf)?),
            WireType::SixtyFourBit => {
                let mut value = 0;
                encoding::fixed64::merge(wire_type, &mut value, buf, ctx)?;
                UnknownField::SixtyFourBit(value)
            }
            WireType::LengthDelimited => {
                let mut value = Bytes::new();
                encoding::bytes::merge(wire_type, &mut value, buf, ctx)?;
                UnknownField::LengthDelimited(value)
            }
            WireType::StartGroup => {
                let mut value = UnknownFields::new();
                encoding::group::merge(tag, wire_type, &mut value, buf, ctx)?;
                UnknownField::Group(value)
            }
            WireType::EndGroup => return Err(DecodeError::new("unexpected end group tag")),
            WireType::ThirtyTwoBit => {
                let mut value = 0;
                encoding::fixed32::merge(wire_type, &mut value, buf, ctx)?;
                UnknownField::ThirtyTwoBit(value)
            }
        };

        log::trace!("retaining unknown field {} ({:?})", tag, field.wire_type());
        self.push(tag, field);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        self.iter()
            .map(|(tag, field)| match field {
                UnknownField::Varint(value) => {
                    encoding::key_len(tag) + encoding::encoded_len_varint(*value)
                }
                UnknownField::SixtyFourBit(value) => encoding::fixed64::encoded_len(tag, value),
                UnknownField::LengthDelimited(value) => encoding::bytes::encoded_len(tag, value),
                UnknownField::Group(value) => encoding::group::encoded_len(tag, value),
                UnknownField::ThirtyTwoBit(value) => encoding::fixed32::encoded_len(tag, value),
            })
            .sum()
    }

    fn clear(&mut self) {
        self.fields.clear();
    }
}
