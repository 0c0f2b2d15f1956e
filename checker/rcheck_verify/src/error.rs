//! Error types.
//!
//! [`CatalogError`] covers building the catalog and looking names up in it.
//! [`CheckFailure`] is what an assertion reports; its message always carries
//! the actual and expected values so a failing check can be diagnosed from
//! the report alone.

use std::path::PathBuf;

use rcheck_decl::{DeclError, ARRAY_HINT, ENUM_HINT};
use rcheck_source::SourceError;

/// Failure to build an `ErrorCatalog` or to resolve a name in it.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("enum '{}' not found in '{}'.\n{}", .name, .path.display(), ENUM_HINT)]
    EnumNotFound { name: String, path: PathBuf },

    #[error("array '{}' not found in '{}'.\n{}", .name, .path.display(), ARRAY_HINT)]
    ArrayNotFound { name: String, path: PathBuf },

    /// The declaration was found but its body could not be read.
    #[error("in '{}': {source}", .path.display())]
    InvalidDeclaration {
        path: PathBuf,
        #[source]
        source: DeclError,
    },

    #[error("enum name '{name}' is not in the enum mapping")]
    EnumNameUnknown { name: String },

    #[error("no message for '{name}': index {index} is outside the {len} messages")]
    MessageIndexOutOfRange { name: String, index: i64, len: usize },
}

impl CatalogError {
    /// Attach the file a declaration was searched in.
    pub(crate) fn in_file(err: DeclError, path: PathBuf) -> Self {
        match err {
            DeclError::EnumNotFound { name } => CatalogError::EnumNotFound { name, path },
            DeclError::ArrayNotFound { name } => CatalogError::ArrayNotFound { name, path },
            source => CatalogError::InvalidDeclaration { path, source },
        }
    }
}

/// A failed assertion on a process result.
#[derive(Debug, thiserror::Error)]
pub enum CheckFailure {
    #[error(
        "returned code {actual} ('{actual_names}') != expected {expected} ('{expected_name}'). \
         Program output:\n{output}"
    )]
    ExitCodeMismatch {
        actual: i64,
        /// Enumerators bound to `actual`, or `Unknown error`.
        actual_names: String,
        expected: i64,
        expected_name: String,
        output: String,
    },

    #[error("expected stdout to contain '{expected}' but it was empty")]
    EmptyOutput { expected: String },

    #[error("expected last line of stdout to contain '{expected}' but was '{actual}'")]
    MessageMismatch { expected: String, actual: String },

    #[error("output differs.\n--- expected\n{expected}\n--- actual\n{actual}")]
    OutputMismatch { expected: String, actual: String },

    #[error("output does not match /{pattern}/. Program output:\n{output}")]
    PatternMismatch { pattern: String, output: String },

    #[error("invalid pattern /{pattern}/: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("You are missing an export LD_LIBRARY_PATH:\n{output}")]
    MissingSharedLibrary { output: String },

    #[error("A crash occurred (code {rc}). Here is the output:\n{output}")]
    Crash { rc: i32, output: String },

    #[error("JPEG headers differ at byte {offset} (expected header is {header_len} bytes)")]
    JpegHeaderMismatch { offset: usize, header_len: usize },

    #[error("cannot read reference file '{}': {source}", .path.display())]
    Reference {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
