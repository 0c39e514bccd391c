//! Byte order tokens

use serde::{Deserialize, Serialize};

/// Canonical byte order used for integer fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ByteOrder {
    Big,
    #[default]
    Little,
}

impl ByteOrder {
    /// Map a free-form token to a byte order.
    ///
    /// Accepts `b`/`big`/`big-endian` and `l`/`little`/`little-endian`.
    /// Any other token, including the empty string, resolves to little-endian.
    pub fn resolve(token: &str) -> Self {
        match token {
            "b" | "big" | "big-endian" => Self::Big,
            "l" | "little" | "little-endian" => Self::Little,
            _ => Self::Little,
        }
    }

    /// Go expression naming the `encoding/binary` byte order
    pub fn go_expr(self) -> &'static str {
        match self {
            Self::Big => "binary.BigEndian",
            Self::Little => "binary.LittleEndian",
        }
    }
}

/// Shorthand for [`ByteOrder::resolve`]
pub fn resolve(token: &str) -> ByteOrder {
    ByteOrder::resolve(token)
}
