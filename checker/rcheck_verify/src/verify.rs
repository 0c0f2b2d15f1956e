//! Exit-code and error-message assertions.

use tracing::debug;

use crate::catalog::ErrorCatalog;
use crate::error::CheckFailure;
use crate::process::ProcessResult;
use crate::signedness::match_signedness;

impl ErrorCatalog {
    /// Assert that the process exited with the code of enumerator `name`.
    #[tracing::instrument(level = "debug", skip(self, result), fields(rc = result.rc))]
    pub fn compare_exit_code(&self, result: &ProcessResult, name: &str) -> Result<(), CheckFailure> {
        let expected = self.expected_code(name)?;
        let actual = match_signedness(i64::from(result.rc), expected);

        if actual == expected {
            return Ok(());
        }

        Err(CheckFailure::ExitCodeMismatch {
            actual,
            actual_names: self.describe_code(actual),
            expected,
            expected_name: name.to_owned(),
            output: result.output(),
        })
    }

    /// Assert the exit code of `name`, then that the last non-blank line of
    /// stdout contains the expected message.
    #[tracing::instrument(level = "debug", skip(self, result), fields(rc = result.rc))]
    pub fn check_error_code_and_message(
        &self,
        result: &ProcessResult,
        name: &str,
    ) -> Result<(), CheckFailure> {
        self.compare_exit_code(result, name)?;

        let expected = self.expected_message(name)?;
        let lines: Vec<&str> = result.stdout.lines().collect();
        let Some(last) = last_non_blank_line(&lines) else {
            return Err(CheckFailure::EmptyOutput { expected });
        };

        if last.contains(expected.as_str()) {
            debug!(line = last, "message found");
            Ok(())
        } else {
            Err(CheckFailure::MessageMismatch {
                expected,
                actual: last.to_owned(),
            })
        }
    }
}

/// Last line that is not blank, scanning back from the end.
///
/// The scan never goes below the first line, so when every line is blank the
/// first one is returned. `None` only when there are no lines at all.
fn last_non_blank_line<'a>(lines: &[&'a str]) -> Option<&'a str> {
    let mut index = lines.len().checked_sub(1)?;
    while index > 0 && lines[index].trim().is_empty() {
        index -= 1;
    }
    Some(lines[index])
}
