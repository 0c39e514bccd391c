//! `MarshalBinary` method emission

use serde::Serialize;
use serde_json::json;

use super::{Generator, COPY, PUT, SERIALIZER};
use crate::error::Result;
use crate::layout::{self, Encoding, Slot};
use crate::model::RecordDescriptor;

#[derive(Serialize)]
struct SerializerData<'a> {
    receiver: String,
    name: &'a str,
    size: usize,
    statements: Vec<String>,
}

pub(super) fn render(generator: &Generator, record: &RecordDescriptor) -> Result<String> {
    let layout = layout::plan(record);
    let receiver = record.receiver();

    tracing::debug!(
        record = %record.name,
        size = layout.size,
        members = layout.slots.len(),
        "emitting serializer"
    );

    let mut statements = Vec::with_capacity(layout.encoded_count());
    for slot in &layout.slots {
        if let Some(statement) = statement(generator, &receiver, slot)? {
            statements.push(statement);
        }
    }

    let data = SerializerData {
        receiver,
        name: &record.name,
        size: layout.size,
        statements,
    };

    generator.render(SERIALIZER, &data)
}

/// One encoding line, or `None` when the member's tag has no encoding
fn statement(generator: &Generator, receiver: &str, slot: &Slot<'_>) -> Result<Option<String>> {
    let Some(encoding) = slot.encoding else {
        tracing::debug!(
            field = %slot.field.name,
            type_tag = %slot.field.type_tag,
            start = slot.start,
            end = slot.end,
            "skipping field with unsupported type tag"
        );
        return Ok(None);
    };

    let text = match encoding {
        Encoding::Put { signed, bits } => generator.render(
            PUT,
            &json!({
                "order": slot.byte_order.go_expr(),
                "op": if signed { "Int" } else { "Uint" },
                "bits": bits,
                "start": slot.start,
                "end": slot.end,
                "receiver": receiver,
                "field": slot.field.name,
            }),
        )?,
        Encoding::Copy => generator.render(
            COPY,
            &json!({
                "start": slot.start,
                "end": slot.end,
                "receiver": receiver,
                "field": slot.field.name,
            }),
        )?,
    };

    Ok(Some(text))
}
