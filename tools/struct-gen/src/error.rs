//! Error type for code generation

/// Errors raised while emitting source text
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output sink rejected a write
    #[error("failed to write generated source: {0}")]
    Sink(#[from] std::io::Error),

    /// A built-in template could not be registered
    #[error("invalid template: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// A template failed to render
    #[error("failed to render template: {0}")]
    Render(#[from] handlebars::RenderError),
}

pub type Result<T> = std::result::Result<T, Error>;
