//! The error catalog: enum ordinals plus their messages.
//!
//! Built once from the header that declares the error enum and the source
//! file that defines the message array, then read-only. Message `i` belongs
//! to the enumerator whose ordinal is `ordinal(first_sentinel) + i`.

use rcheck_decl::{extract_enum, extract_message_array, EnumMapping, MessageTable};
use rcheck_source::{load_stripped, strip_comments};
use tracing::debug;

use crate::config::CatalogConfig;
use crate::error::CatalogError;

/// Shown in place of an enumerator name when no enumerator has the ordinal.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Enum ordinals and message strings for one error enum.
#[derive(Clone, Debug)]
pub struct ErrorCatalog {
    mapping: EnumMapping,
    messages: MessageTable,
    error_prefix: String,
    first_sentinel: String,
    success_name: String,
}

impl ErrorCatalog {
    /// Read both files named by `config` and extract the declarations.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(enum_name = %config.enum_name, array_name = %config.array_name)
    )]
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let enum_text = load_stripped(&config.enum_path)?;
        let messages_text = load_stripped(&config.messages_path)?;
        Self::from_stripped(&enum_text, &messages_text, config)
    }

    /// Like [`ErrorCatalog::load`], with the file contents already in memory.
    ///
    /// The paths in `config` are only used in error reports.
    pub fn from_sources(
        enum_source: &str,
        messages_source: &str,
        config: &CatalogConfig,
    ) -> Result<Self, CatalogError> {
        Self::from_stripped(
            &strip_comments(enum_source),
            &strip_comments(messages_source),
            config,
        )
    }

    /// Assemble a catalog from already extracted parts.
    pub fn from_parts(mapping: EnumMapping, messages: MessageTable, config: &CatalogConfig) -> Self {
        ErrorCatalog {
            mapping,
            messages,
            error_prefix: config.error_prefix.clone(),
            first_sentinel: config.first_sentinel.clone(),
            success_name: config.success_name.clone(),
        }
    }

    fn from_stripped(
        enum_text: &str,
        messages_text: &str,
        config: &CatalogConfig,
    ) -> Result<Self, CatalogError> {
        let mapping = extract_enum(enum_text, &config.enum_name)
            .map_err(|err| CatalogError::in_file(err, config.enum_path.clone()))?;
        let messages = extract_message_array(messages_text, &config.array_name)
            .map_err(|err| CatalogError::in_file(err, config.messages_path.clone()))?;

        debug!(
            enumerators = mapping.len(),
            messages = messages.len(),
            "error catalog ready"
        );
        Ok(Self::from_parts(mapping, messages, config))
    }

    pub fn mapping(&self) -> &EnumMapping {
        &self.mapping
    }

    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    pub fn error_prefix(&self) -> &str {
        &self.error_prefix
    }

    /// Ordinal of a declared enumerator.
    pub fn ordinal(&self, name: &str) -> Result<i64, CatalogError> {
        self.mapping
            .ordinal(name)
            .ok_or_else(|| CatalogError::EnumNameUnknown {
                name: name.to_owned(),
            })
    }

    /// Exit code expected for `name`: 0 for the success name, the ordinal
    /// otherwise.
    pub fn expected_code(&self, name: &str) -> Result<i64, CatalogError> {
        if name == self.success_name {
            Ok(0)
        } else {
            self.ordinal(name)
        }
    }

    /// Message text for `name`, taken from the message table.
    pub fn get_error_message(&self, name: &str) -> Result<&str, CatalogError> {
        let index = self.ordinal(name)? - self.ordinal(&self.first_sentinel)?;
        usize::try_from(index)
            .ok()
            .and_then(|slot| self.messages.get(slot))
            .ok_or_else(|| CatalogError::MessageIndexOutOfRange {
                name: name.to_owned(),
                index,
                len: self.messages.len(),
            })
    }

    /// What the last output line must contain for `name`: the error prefix
    /// and the message, separated by a space and trimmed.
    pub fn expected_message(&self, name: &str) -> Result<String, CatalogError> {
        let message = self.get_error_message(name)?;
        Ok(format!("{} {message}", self.error_prefix).trim().to_string())
    }

    /// Names of every enumerator with `ordinal`, comma-separated, or
    /// [`UNKNOWN_ERROR`].
    pub fn describe_code(&self, ordinal: i64) -> String {
        let names: Vec<&str> = self.mapping.names_for(ordinal).collect();
        if names.is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            names.join(", ")
        }
    }
}
