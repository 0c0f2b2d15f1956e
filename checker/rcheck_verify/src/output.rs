//! Output checks that do not involve the error catalog.
//!
//! Crash detection, exact and pattern-based stdout comparison, and a JPEG
//! comparison that ignores the entropy-coded image data.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CheckFailure;
use crate::process::ProcessResult;

/// Return code of a process the dynamic loader refused to start.
const LOADER_FAILURE_RC: i32 = 127;

const LOADER_FAILURE_TEXT: &str = "error while loading shared libraries";

/// Placeholder in reference file names for the image tool version.
pub const VERSION_PLACEHOLDER: &str = "VIPS";

/// JPEG start-of-scan marker; the compressed image data follows it.
const START_OF_SCAN: [u8; 2] = [0xFF, 0xDA];

#[allow(clippy::expect_used)]
static SANITIZER_REPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"==\d+==\s*ERROR:").expect("literal pattern"));

/// Fail if the process could not start or died with a sanitizer report.
pub fn check_crash(result: &ProcessResult) -> Result<(), CheckFailure> {
    let output = result.output();
    if result.rc == LOADER_FAILURE_RC && output.contains(LOADER_FAILURE_TEXT) {
        return Err(CheckFailure::MissingSharedLibrary { output });
    }
    if result.rc != 0 && SANITIZER_REPORT.is_match(&output) {
        tracing::warn!(rc = result.rc, "sanitizer report in process output");
        return Err(CheckFailure::Crash {
            rc: result.rc,
            output,
        });
    }
    Ok(())
}

/// Assert that stdout equals `expected`, surrounding whitespace ignored.
pub fn check_output_equals(result: &ProcessResult, expected: &str) -> Result<(), CheckFailure> {
    let actual = result.stdout.trim();
    let expected = expected.trim();
    if actual == expected {
        Ok(())
    } else {
        Err(CheckFailure::OutputMismatch {
            expected: expected.to_owned(),
            actual: actual.to_owned(),
        })
    }
}

/// Assert that stdout equals the contents of a reference file.
///
/// With `tool_version`, the [`VERSION_PLACEHOLDER`] in `reference` is first
/// replaced by it, so one fixture name can cover several tool releases.
pub fn check_output_matches_file(
    result: &ProcessResult,
    reference: &str,
    tool_version: Option<&str>,
) -> Result<(), CheckFailure> {
    let path = PathBuf::from(match tool_version {
        Some(version) => translate_reference_filename(reference, version),
        None => reference.to_owned(),
    });
    let expected = std::fs::read_to_string(&path)
        .map_err(|source| CheckFailure::Reference { path, source })?;
    check_output_equals(result, &expected)
}

/// Assert that `pattern` matches somewhere in stdout.
///
/// The search is not anchored; use `^` and `$` to match the whole output.
pub fn check_output_matches(result: &ProcessResult, pattern: &str) -> Result<(), CheckFailure> {
    let regex = Regex::new(pattern).map_err(|source| CheckFailure::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })?;
    if regex.is_match(&result.stdout) {
        Ok(())
    } else {
        Err(CheckFailure::PatternMismatch {
            pattern: pattern.to_owned(),
            output: result.output(),
        })
    }
}

/// Substitute the tool version into a reference file name.
pub fn translate_reference_filename(name: &str, version: &str) -> String {
    name.replace(VERSION_PLACEHOLDER, version)
}

/// Compare two JPEG images up to the start of the compressed scan data.
///
/// Encoders differ in the entropy-coded segment, so only the headers
/// (everything before the first `FF DA` of `expected`) must be identical.
/// Without a marker the whole buffers are compared.
pub fn jpeg_headers_should_be_equal(expected: &[u8], actual: &[u8]) -> Result<(), CheckFailure> {
    let scan_start = expected
        .windows(START_OF_SCAN.len())
        .position(|window| window == START_OF_SCAN.as_slice());

    let (expected_part, actual_part) = match scan_start {
        Some(len) => (&expected[..len], &actual[..len.min(actual.len())]),
        None => (expected, actual),
    };
    if expected_part == actual_part {
        return Ok(());
    }

    let offset = expected_part
        .iter()
        .zip(actual_part)
        .position(|(a, b)| a != b)
        .unwrap_or(expected_part.len().min(actual_part.len()));
    Err(CheckFailure::JpegHeaderMismatch {
        offset,
        header_len: expected_part.len(),
    })
}
