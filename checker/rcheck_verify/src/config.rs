//! Catalog configuration.

use std::path::PathBuf;

/// Enumerator whose ordinal is the base index into the message table.
pub const DEFAULT_FIRST_SENTINEL: &str = "ERR_FIRST";

/// Name that always means exit code 0, declared in the enum or not.
pub const DEFAULT_SUCCESS_NAME: &str = "ERR_NONE";

/// Where the error enum and its message array live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Header declaring the error enum.
    pub enum_path: PathBuf,
    pub enum_name: String,
    /// Source file defining the message array.
    pub messages_path: PathBuf,
    pub array_name: String,
    /// Printed before the message on the last output line. Empty by default.
    pub error_prefix: String,
    pub first_sentinel: String,
    pub success_name: String,
}

impl CatalogConfig {
    pub fn new(
        enum_path: impl Into<PathBuf>,
        enum_name: impl Into<String>,
        messages_path: impl Into<PathBuf>,
        array_name: impl Into<String>,
    ) -> Self {
        CatalogConfig {
            enum_path: enum_path.into(),
            enum_name: enum_name.into(),
            messages_path: messages_path.into(),
            array_name: array_name.into(),
            error_prefix: String::new(),
            first_sentinel: DEFAULT_FIRST_SENTINEL.to_string(),
            success_name: DEFAULT_SUCCESS_NAME.to_string(),
        }
    }

    #[must_use]
    pub fn with_error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_first_sentinel(mut self, name: impl Into<String>) -> Self {
        self.first_sentinel = name.into();
        self
    }

    #[must_use]
    pub fn with_success_name(mut self, name: impl Into<String>) -> Self {
        self.success_name = name.into();
        self
    }
}
