//! Exit-code and error-message verification against a C error catalog.
//!
//! An [`ErrorCatalog`] is built once from two files: the header declaring
//! the error enum and the source defining the message array. Test steps then
//! hand it a [`ProcessResult`] and the symbolic name they expect:
//!
//! ```text
//! error.h ──► EnumMapping ─┐
//!                          ├──► ErrorCatalog ──► compare_exit_code(result, "ERR_IO")
//! error.c ──► MessageTable ┘                └──► check_error_code_and_message(result, "ERR_IO")
//! ```
//!
//! Nothing here runs a process; results come from whatever executed the
//! program under test.

mod catalog;
mod config;
mod error;
pub mod output;
mod process;
mod signedness;
mod verify;

pub use catalog::{ErrorCatalog, UNKNOWN_ERROR};
pub use config::{CatalogConfig, DEFAULT_FIRST_SENTINEL, DEFAULT_SUCCESS_NAME};
pub use error::{CatalogError, CheckFailure};
pub use process::ProcessResult;
pub use signedness::match_signedness;

pub use rcheck_decl::{EnumMapping, MessageTable};
