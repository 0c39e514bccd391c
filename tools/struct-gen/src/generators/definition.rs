//! Struct type definition

use serde::Serialize;

use super::{Generator, DEFINITION};
use crate::error::Result;
use crate::model::RecordDescriptor;

#[derive(Serialize)]
struct DefinitionData<'a> {
    name: &'a str,
    members: Vec<MemberData<'a>>,
}

#[derive(Serialize)]
struct MemberData<'a> {
    name: &'a str,
    type_tag: String,
}

pub(super) fn render(generator: &Generator, record: &RecordDescriptor) -> Result<String> {
    tracing::debug!(
        record = %record.name,
        members = record.members.len(),
        "emitting type definition"
    );

    let data = DefinitionData {
        name: &record.name,
        members: record
            .members
            .iter()
            .map(|m| MemberData {
                name: &m.name,
                type_tag: m.type_tag.to_string(),
            })
            .collect(),
    };

    generator.render(DEFINITION, &data)
}

#[cfg(test)]
mod tests {
    use crate::model::{FieldDescriptor, RecordDescriptor};
    use crate::Generator;

    fn definition(record: &RecordDescriptor) -> String {
        let mut out = Vec::new();
        Generator::new()
            .unwrap()
            .write_definition(record, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_sample_definition() {
        let record = RecordDescriptor::new("Sample", "")
            .with_member(FieldDescriptor::new("FirstMember", "uint32", 32))
            .with_member(FieldDescriptor::new("SecondMember", "string", 42));

        let expected = "type Sample struct {\n\tFirstMember uint32\n\tSecondMember string\n}";
        assert_eq!(definition(&record), expected);
    }

    #[test]
    fn test_definition_ignores_layout() {
        let plain = RecordDescriptor::new("Header", "little")
            .with_member(FieldDescriptor::new("Magic", "uint16", 2))
            .with_member(FieldDescriptor::new("Len", "uint16", 2));
        let padded = RecordDescriptor::new("Header", "big")
            .with_member(FieldDescriptor::new("Magic", "uint16", 2).with_byte_order("l"))
            .with_member(FieldDescriptor::new("Len", "uint16", 2).with_offset(6));

        assert_eq!(definition(&plain), definition(&padded));
    }

    #[test]
    fn test_unknown_tags_are_declared_verbatim() {
        let record = RecordDescriptor::new("Blob", "")
            .with_member(FieldDescriptor::new("Raw", "[16]byte", 16))
            .with_member(FieldDescriptor::new("Ratio", "float64", 8));

        assert_eq!(
            definition(&record),
            "type Blob struct {\n\tRaw [16]byte\n\tRatio float64\n}"
        );
    }

    #[test]
    fn test_empty_record() {
        let record = RecordDescriptor::new("Empty", "");
        assert_eq!(definition(&record), "type Empty struct {\n}");
    }
}
