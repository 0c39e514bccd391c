//! Go code generator for fixed-layout binary records
//!
//! Given a [`RecordDescriptor`] this crate emits:
//! - a Go struct type definition listing every member
//! - a `MarshalBinary` method packing the members into a fixed-size buffer
//!   at offsets accumulated left to right, using a byte order chosen per
//!   record or per field
//!
//! Descriptors are trusted. Overlapping regions, duplicate names and sizes
//! that disagree with the type tag are emitted as given. Members with a type
//! tag the serializer cannot encode still reserve their bytes but produce no
//! statement.
//!
//! ```
//! use struct_gen::{FieldDescriptor, RecordDescriptor};
//!
//! let record = RecordDescriptor::new("Sample", "big")
//!     .with_member(FieldDescriptor::new("Id", "uint32", 4))
//!     .with_member(FieldDescriptor::new("Name", "string", 12));
//!
//! let mut out = Vec::new();
//! struct_gen::generate_serializer(&record, &mut out)?;
//! assert!(String::from_utf8_lossy(&out).contains("var buf [16]byte"));
//! # Ok::<(), struct_gen::Error>(())
//! ```

pub mod byte_order;
pub mod config;
pub mod error;
pub mod generators;
pub mod layout;
pub mod model;

use std::io::Write;

pub use byte_order::ByteOrder;
pub use config::SourceOptions;
pub use error::{Error, Result};
pub use generators::Generator;
pub use layout::{Encoding, Layout, Slot};
pub use model::{FieldDescriptor, IntWidth, RecordDescriptor, TypeTag};

/// Write the struct type definition for `record` to `out`
pub fn generate_definition<W: Write + ?Sized>(record: &RecordDescriptor, out: &mut W) -> Result<()> {
    Generator::new()?.write_definition(record, out)
}

/// Write the `MarshalBinary` method for `record` to `out`
pub fn generate_serializer<W: Write + ?Sized>(record: &RecordDescriptor, out: &mut W) -> Result<()> {
    Generator::new()?.write_serializer(record, out)
}

/// Write a complete Go source file containing every record to `out`
pub fn generate_source<W: Write + ?Sized>(
    records: &[RecordDescriptor],
    options: &SourceOptions,
    out: &mut W,
) -> Result<()> {
    Generator::new()?.write_source(records, options, out)
}
