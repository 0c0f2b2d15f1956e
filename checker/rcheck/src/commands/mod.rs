//! Command handlers for the `rcheck` binary.
//!
//! Each handler takes the parsed arguments and returns the text to print.

mod check;
mod lookup;

pub use check::check;
pub use lookup::{message, ordinal, table};

use rcheck_verify::{CatalogError, CheckFailure, ErrorCatalog};

use crate::options::CatalogOptions;

/// Why a command did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Bad or missing arguments.
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// A check ran and failed.
    #[error(transparent)]
    Check(#[from] CheckFailure),
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CommandError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Build the catalog from flags, falling back to the process environment.
fn load_catalog(options: &CatalogOptions) -> Result<ErrorCatalog, CommandError> {
    let config = options.clone().into_config(|key| std::env::var(key).ok())?;
    Ok(ErrorCatalog::load(&config)?)
}

#[cfg(test)]
mod tests;
