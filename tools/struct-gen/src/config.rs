//! Options for whole-file generation

use serde::{Deserialize, Serialize};

/// Controls the wrapper emitted around records by
/// [`Generator::write_source`](crate::Generator::write_source).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    /// Go package clause
    pub package: String,
    /// Emit the "Code generated ... DO NOT EDIT." banner
    pub banner: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            package: "main".to_string(),
            banner: true,
        }
    }
}

impl SourceOptions {
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }
}
