//! Complete Go source file wrapping one or more records

use serde_json::json;
use std::io::Write;

use super::{Generator, PACKAGE};
use crate::config::SourceOptions;
use crate::error::Result;
use crate::layout::{self, Encoding};
use crate::model::RecordDescriptor;

const BANNER: &str = "// Code generated by struct-gen. DO NOT EDIT.";
const BINARY_IMPORT: &str = "import \"encoding/binary\"";
const SECTION_BREAK: &[u8] = b"\n\n";

/// Whether any record emits an `encoding/binary` put call. Go rejects
/// unused imports, so the import is only written when this holds.
fn needs_binary_import(records: &[RecordDescriptor]) -> bool {
    records.iter().any(|record| {
        layout::plan(record)
            .slots
            .iter()
            .any(|slot| matches!(slot.encoding, Some(Encoding::Put { .. })))
    })
}

pub(super) fn write<W: Write + ?Sized>(
    generator: &Generator,
    records: &[RecordDescriptor],
    options: &SourceOptions,
    out: &mut W,
) -> Result<()> {
    tracing::debug!(
        package = %options.package,
        records = records.len(),
        "emitting source file"
    );

    if options.banner {
        out.write_all(BANNER.as_bytes())?;
        out.write_all(SECTION_BREAK)?;
    }

    let package = generator.render(PACKAGE, &json!({ "package": options.package }))?;
    out.write_all(package.as_bytes())?;

    if needs_binary_import(records) {
        out.write_all(SECTION_BREAK)?;
        out.write_all(BINARY_IMPORT.as_bytes())?;
    }

    for record in records {
        out.write_all(SECTION_BREAK)?;
        generator.write_definition(record, &mut *out)?;
        out.write_all(SECTION_BREAK)?;
        generator.write_serializer(record, &mut *out)?;
    }

    out.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldDescriptor;

    fn source(records: &[RecordDescriptor], options: &SourceOptions) -> String {
        let mut out = Vec::new();
        Generator::new()
            .unwrap()
            .write_source(records, options, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_full_file() {
        let record = RecordDescriptor::new("Ping", "big")
            .with_member(FieldDescriptor::new("Seq", "uint16", 2))
            .with_member(FieldDescriptor::new("Tag", "string", 6));

        let expected = "// Code generated by struct-gen. DO NOT EDIT.

package wire

import \"encoding/binary\"

type Ping struct {
\tSeq uint16
\tTag string
}

func (p Ping) MarshalBinary() ([]byte, error) {
\tvar buf [8]byte
\tbinary.BigEndian.PutUint16(buf[0:2], p.Seq)
\tcopy(buf[2:8], p.Tag)
\treturn nil
}
";
        let options = SourceOptions::default().with_package("wire");
        assert_eq!(source(&[record], &options), expected);
    }

    #[test]
    fn test_import_omitted_without_integers() {
        let record = RecordDescriptor::new("Name", "")
            .with_member(FieldDescriptor::new("Value", "string", 16))
            .with_member(FieldDescriptor::new("Score", "float64", 8));

        let text = source(&[record], &SourceOptions::default());
        assert!(!text.contains("encoding/binary"));
        assert!(text.contains("package main\n\ntype Name struct {"));
    }

    #[test]
    fn test_without_banner() {
        let options = SourceOptions {
            package: "empty".to_string(),
            banner: false,
        };
        assert_eq!(source(&[], &options), "package empty\n");
    }

    #[test]
    fn test_multiple_records_keep_order() {
        let first = RecordDescriptor::new("First", "")
            .with_member(FieldDescriptor::new("A", "uint8", 1));
        let second = RecordDescriptor::new("Second", "")
            .with_member(FieldDescriptor::new("B", "string", 3));

        let text = source(&[first, second], &SourceOptions::default());
        let first_def = text.find("type First struct").unwrap();
        let first_fn = text.find("func (f First)").unwrap();
        let second_def = text.find("type Second struct").unwrap();
        let second_fn = text.find("func (s Second)").unwrap();
        assert!(first_def < first_fn && first_fn < second_def && second_def < second_fn);
        assert!(text.ends_with("return nil\n}\n"));
    }
}
