//! Record layout descriptors consumed by the generators

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::byte_order::ByteOrder;

/// A fixed-layout binary record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDescriptor {
    pub name: String,
    /// Record-level byte order token, see [`ByteOrder::resolve`]
    #[serde(default)]
    pub byte_order: String,
    /// Declaration order drives both the struct fields and the offset fold
    #[serde(default)]
    pub members: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    pub fn new(name: impl Into<String>, byte_order: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            byte_order: byte_order.into(),
            members: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: FieldDescriptor) -> Self {
        self.members.push(member);
        self
    }

    /// Record default byte order
    pub fn resolved_byte_order(&self) -> ByteOrder {
        ByteOrder::resolve(&self.byte_order)
    }

    /// Receiver variable used by the generated method: the lowercased first
    /// character of the record name.
    pub fn receiver(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect())
            .unwrap_or_default()
    }
}

/// One member of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    /// Bytes occupied in the serialized buffer
    pub size: usize,
    /// Padding bytes skipped before this field
    #[serde(default)]
    pub offset: usize,
    /// Field-level byte order override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_order: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, type_tag: impl Into<TypeTag>, size: usize) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            size,
            offset: 0,
            byte_order: None,
        }
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_byte_order(mut self, byte_order: impl Into<String>) -> Self {
        self.byte_order = Some(byte_order.into());
        self
    }

    /// Byte order for this field, falling back to `default` when no
    /// override (or an empty one) is set.
    pub fn resolved_byte_order(&self, default: ByteOrder) -> ByteOrder {
        match self.byte_order.as_deref() {
            Some(token) if !token.is_empty() => ByteOrder::resolve(token),
            _ => default,
        }
    }
}

/// Integer width in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    pub fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    fn from_suffix(digits: &str) -> Option<Self> {
        match digits {
            "8" => Some(Self::W8),
            "16" => Some(Self::W16),
            "32" => Some(Self::W32),
            "64" => Some(Self::W64),
            _ => None,
        }
    }
}

/// Semantic type of a field.
///
/// Tags outside the supported set are kept verbatim in `Other` so the
/// definition output can still name them; the serializer emits nothing for
/// them but still reserves their bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeTag {
    Unsigned(IntWidth),
    Signed(IntWidth),
    String,
    Other(String),
}

impl TypeTag {
    pub fn parse(tag: &str) -> Self {
        if tag == "string" {
            return Self::String;
        }

        let integer = if let Some(digits) = tag.strip_prefix("uint") {
            IntWidth::from_suffix(digits).map(Self::Unsigned)
        } else if let Some(digits) = tag.strip_prefix("int") {
            IntWidth::from_suffix(digits).map(Self::Signed)
        } else {
            None
        };

        integer.unwrap_or_else(|| Self::Other(tag.to_string()))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Unsigned(_) | Self::Signed(_))
    }
}

impl From<&str> for TypeTag {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl From<String> for TypeTag {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        tag.to_string()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(width) => write!(f, "uint{}", width.bits()),
            Self::Signed(width) => write!(f, "int{}", width.bits()),
            Self::String => f.write_str("string"),
            Self::Other(tag) => f.write_str(tag),
        }
    }
}
