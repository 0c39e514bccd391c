//! Offset accumulation for record members.
//!
//! A cursor starts at zero. Each member first skips its relative offset,
//! then occupies `size` bytes. The buffer length is the final cursor value.
//! Overlaps and out-of-range sizes are not checked.

use std::ops::Range;

use crate::byte_order::ByteOrder;
use crate::model::{FieldDescriptor, RecordDescriptor, TypeTag};

/// How a member is written into the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Byte-order `Put{Uint,Int}{bits}` call
    Put { signed: bool, bits: u32 },
    /// Plain `copy` into the sub-slice
    Copy,
}

impl Encoding {
    /// `None` for tags the serializer does not know how to write
    pub fn for_tag(tag: &TypeTag) -> Option<Self> {
        match tag {
            TypeTag::Unsigned(width) => Some(Self::Put {
                signed: false,
                bits: width.bits(),
            }),
            TypeTag::Signed(width) => Some(Self::Put {
                signed: true,
                bits: width.bits(),
            }),
            TypeTag::String => Some(Self::Copy),
            TypeTag::Other(_) => None,
        }
    }
}

/// Placement of a single member
#[derive(Debug, Clone)]
pub struct Slot<'a> {
    pub field: &'a FieldDescriptor,
    pub start: usize,
    pub end: usize,
    pub byte_order: ByteOrder,
    pub encoding: Option<Encoding>,
}

impl Slot<'_> {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Computed layout of a record
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    pub size: usize,
    pub slots: Vec<Slot<'a>>,
}

impl Layout<'_> {
    /// Number of members that produce a serializer statement
    pub fn encoded_count(&self) -> usize {
        self.slots.iter().filter(|s| s.encoding.is_some()).count()
    }
}

/// Fold the record members into byte ranges
pub fn plan(record: &RecordDescriptor) -> Layout<'_> {
    let default_order = record.resolved_byte_order();
    let mut cursor = 0usize;
    let mut slots = Vec::with_capacity(record.members.len());

    for field in &record.members {
        cursor = cursor.saturating_add(field.offset);
        let start = cursor;
        cursor = cursor.saturating_add(field.size);

        slots.push(Slot {
            field,
            start,
            end: cursor,
            byte_order: field.resolved_byte_order(default_order),
            encoding: Encoding::for_tag(&field.type_tag),
        });
    }

    Layout {
        size: cursor,
        slots,
    }
}
