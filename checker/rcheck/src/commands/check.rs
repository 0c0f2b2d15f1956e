//! `check`: verify a recorded run against an expected error name.

use std::fs;

use rcheck_verify::output::check_crash;
use rcheck_verify::ProcessResult;
use tracing::debug;

use super::{load_catalog, CommandError};
use crate::options::ParsedArgs;

/// Check a recorded return code and stdout.
///
/// Crashes are reported first. With `--exit-only` only the exit code is
/// compared, which is what success names such as `ERR_NONE` need.
pub fn check(args: &ParsedArgs) -> Result<String, CommandError> {
    let name = args.single_name("check")?;
    let rc_text = args
        .rc
        .as_deref()
        .ok_or_else(|| CommandError::Usage("check: missing --rc <code>".to_string()))?;
    let rc: i32 = rc_text
        .parse()
        .map_err(|_| CommandError::Usage(format!("check: invalid return code '{rc_text}'")))?;

    let stdout = match &args.stdout_file {
        Some(path) => fs::read_to_string(path).map_err(|source| CommandError::Io {
            path: path.clone(),
            source,
        })?,
        None => String::new(),
    };

    let catalog = load_catalog(&args.catalog)?;
    let result = ProcessResult::new(rc, stdout);
    debug!(name, rc, exit_only = args.exit_only, "checking recorded run");

    check_crash(&result)?;
    if args.exit_only {
        catalog.compare_exit_code(&result, name)?;
    } else {
        catalog.check_error_code_and_message(&result, name)?;
    }
    Ok(format!("ok: {name} (rc {rc})"))
}
