//! Go source generators
//!
//! Every piece of emitted text comes from a named template in a shared
//! handlebars registry. The registry runs in strict mode with escaping
//! disabled, so a missing placeholder is an error rather than an empty string.

pub mod definition;
pub mod serializer;
pub mod source;

use handlebars::Handlebars;
use serde::Serialize;
use std::io::Write;

use crate::config::SourceOptions;
use crate::error::Result;
use crate::model::RecordDescriptor;

const DEFINITION: &str = "definition";
const SERIALIZER: &str = "serializer";
const PUT: &str = "put";
const COPY: &str = "copy";
const PACKAGE: &str = "package";

/// `type X struct { ... }` with one tab-indented line per member
const DEFINITION_TEMPLATE: &str =
    "type {{name}} struct {\n{{#each members}}\t{{name}} {{type_tag}}\n{{/each}}}";

const SERIALIZER_TEMPLATE: &str = "func ({{receiver}} {{name}}) MarshalBinary() ([]byte, error) {\n\
     \tvar buf [{{size}}]byte\n\
     {{#each statements}}\t{{this}}\n{{/each}}\
     \treturn nil\n}";

const PUT_TEMPLATE: &str =
    "{{order}}.Put{{op}}{{bits}}(buf[{{start}}:{{end}}], {{receiver}}.{{field}})";

const COPY_TEMPLATE: &str = "copy(buf[{{start}}:{{end}}], {{receiver}}.{{field}})";

const PACKAGE_TEMPLATE: &str = "package {{package}}";

/// Template-backed emitter for record definitions and serializers.
///
/// Construction registers the built-in templates once; the generator is
/// immutable afterwards and can be shared between threads.
pub struct Generator {
    registry: Handlebars<'static>,
}

impl Generator {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        registry.register_template_string(DEFINITION, DEFINITION_TEMPLATE)?;
        registry.register_template_string(SERIALIZER, SERIALIZER_TEMPLATE)?;
        registry.register_template_string(PUT, PUT_TEMPLATE)?;
        registry.register_template_string(COPY, COPY_TEMPLATE)?;
        registry.register_template_string(PACKAGE, PACKAGE_TEMPLATE)?;

        Ok(Self { registry })
    }

    /// Write the struct type definition for `record`
    pub fn write_definition<W: Write + ?Sized>(
        &self,
        record: &RecordDescriptor,
        out: &mut W,
    ) -> Result<()> {
        let text = definition::render(self, record)?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write the `MarshalBinary` method for `record`
    pub fn write_serializer<W: Write + ?Sized>(
        &self,
        record: &RecordDescriptor,
        out: &mut W,
    ) -> Result<()> {
        let text = serializer::render(self, record)?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write a complete Go source file holding every record
    pub fn write_source<W: Write + ?Sized>(
        &self,
        records: &[RecordDescriptor],
        options: &SourceOptions,
        out: &mut W,
    ) -> Result<()> {
        source::write(self, records, options, out)
    }

    fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        Ok(self.registry.render(template, data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_register() {
        let generator = Generator::new().unwrap();
        for name in [DEFINITION, SERIALIZER, PUT, COPY, PACKAGE] {
            assert!(generator.registry.has_template(name), "missing {}", name);
        }
    }

    #[test]
    fn test_generator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Generator>();
    }

    #[test]
    fn test_strict_mode_rejects_missing_placeholder() {
        let generator = Generator::new().unwrap();
        let result = generator.render(PACKAGE, &serde_json::json!({}));
        assert!(matches!(result, Err(crate::Error::Render(_))));
    }

    #[test]
    fn test_no_html_escaping() {
        let generator = Generator::new().unwrap();
        let text = generator
            .render(PACKAGE, &serde_json::json!({ "package": "a<b>&\"c\"" }))
            .unwrap();
        assert_eq!(text, "package a<b>&\"c\"");
    }
}
