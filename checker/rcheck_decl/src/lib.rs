//! Declaration extraction from comment-free C source.
//!
//! Pulls two kinds of declaration out of text that has already been through
//! `rcheck_source::strip_comments`, without a C parser:
//!
//! - an enum, numbered into an [`EnumMapping`] (see [`extract_enum`])
//! - a string array, read into a [`MessageTable`] (see [`extract_message_array`])
//!
//! # Pipeline
//!
//! ```text
//! stripped text ──► tokenize() ──► find_all(shape) ──► parse_*_body()
//! ```
//!
//! The source is trusted and well-formed. Anything outside the recognized
//! shapes is skipped, not diagnosed.

mod enums;
mod messages;
pub mod pattern;
pub mod token;

pub use enums::{extract_enum, parse_enum_body, EnumMapping};
pub use messages::{extract_message_array, parse_message_body, MessageTable};

/// Remediation text for a missing enum.
pub const ENUM_HINT: &str = "Make sure your enum is defined as either:\n \
                             - enum <enum_name> { ... };\n \
                             - typedef enum { ... } <enum_name>;";

/// Remediation text for a missing message array.
pub const ARRAY_HINT: &str = "Make sure your array has the correct format:\n \
                              [const] <type> <array_name>[] = { ... };";

/// Failure to find or read a declaration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeclError {
    #[error("enum '{}' not found.\n{}", .name, ENUM_HINT)]
    EnumNotFound { name: String },

    #[error("array '{}' not found.\n{}", .name, ARRAY_HINT)]
    ArrayNotFound { name: String },

    /// An enumerator that is neither `NAME` nor `NAME = <integer>`.
    #[error("unsupported enumerator `{fragment}`: expected `NAME` or `NAME = <integer>`")]
    InvalidEnumerator { fragment: String },

    /// An array entry with no string literal.
    #[error("unsupported array entry `{fragment}`: expected a string literal")]
    InvalidMessage { fragment: String },
}
