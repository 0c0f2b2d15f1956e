//! Read-only lookups: `ordinal`, `message` and `table`.

use std::fmt::Write;

use super::{load_catalog, CommandError};
use crate::options::ParsedArgs;

/// Expected exit code for a name.
pub fn ordinal(args: &ParsedArgs) -> Result<String, CommandError> {
    let name = args.single_name("ordinal")?;
    let catalog = load_catalog(&args.catalog)?;
    Ok(catalog.expected_code(name)?.to_string())
}

/// Message text for a name.
pub fn message(args: &ParsedArgs) -> Result<String, CommandError> {
    let name = args.single_name("message")?;
    let catalog = load_catalog(&args.catalog)?;
    Ok(catalog.get_error_message(name)?.to_string())
}

/// Every enumerator with its ordinal and message, in declaration order.
///
/// Names before the first sentinel, past the end of the array, or with an
/// empty message are listed without one.
pub fn table(args: &ParsedArgs) -> Result<String, CommandError> {
    if let Some(extra) = args.positional.first() {
        return Err(CommandError::Usage(format!("unexpected argument '{extra}'")));
    }
    let catalog = load_catalog(&args.catalog)?;
    let width = catalog.mapping().iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (name, value) in catalog.mapping().iter() {
        let _ = write!(out, "{name:<width$} = {value:>4}");
        match catalog.get_error_message(name) {
            Ok(text) if !text.is_empty() => {
                let _ = write!(out, "  {text}");
            }
            _ => {}
        }
        out.push('\n');
    }
    out.truncate(out.trim_end().len());
    Ok(out)
}
