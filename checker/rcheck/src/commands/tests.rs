#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use super::*;
use crate::options::parse_args;

const HEADER: &str = "\
#define ERR_NONE 0
enum error_codes {
    ERR_FIRST = -128, // base
    ERR_IO,
    ERR_NOMEM,
    ERR_LAST
};
";

const SOURCE: &str = "\
const char* const ERR_MESSAGES[] = {
    \"\", /* no error */
    \"I/O Error\",
    \"Out of memory\"
};
";

fn write_fixtures(dir: &Path) {
    fs::write(dir.join("error.h"), HEADER).unwrap();
    fs::write(dir.join("error.c"), SOURCE).unwrap();
}

/// Arguments with every catalog flag set, followed by `extra`.
fn args_in(dir: &Path, extra: &[&str]) -> crate::options::ParsedArgs {
    let mut list: Vec<String> = extra.iter().map(ToString::to_string).collect();
    list.extend([
        format!("--enum-file={}", dir.join("error.h").display()),
        "--enum-name=error_codes".to_string(),
        format!("--messages-file={}", dir.join("error.c").display()),
        "--array-name=ERR_MESSAGES".to_string(),
        "--prefix=ERROR:".to_string(),
    ]);
    parse_args(&list).unwrap()
}

#[test]
fn test_ordinal() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    assert_eq!(ordinal(&args_in(dir.path(), &["ERR_IO"])).unwrap(), "-127");
    assert_eq!(ordinal(&args_in(dir.path(), &["ERR_NONE"])).unwrap(), "0");

    let err = ordinal(&args_in(dir.path(), &["ERR_MISSING"])).unwrap_err();
    assert!(matches!(err, CommandError::Catalog(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_message() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    assert_eq!(
        message(&args_in(dir.path(), &["ERR_NOMEM"])).unwrap(),
        "Out of memory"
    );
}

#[test]
fn test_missing_name_is_usage_error() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    let err = message(&args_in(dir.path(), &[])).unwrap_err();
    assert!(matches!(err, CommandError::Usage(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_table() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    assert_eq!(
        table(&args_in(dir.path(), &[])).unwrap(),
        "ERR_FIRST = -128\n\
         ERR_IO    = -127  I/O Error\n\
         ERR_NOMEM = -126  Out of memory\n\
         ERR_LAST  = -125"
    );
}

#[test]
fn test_check_passes() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());
    let stdout = dir.path().join("stdout.txt");
    fs::write(&stdout, "working...\nERROR: I/O Error\n\n").unwrap();
    let stdout = format!("--stdout={}", stdout.display());

    // -127 as an unsigned byte
    let out = check(&args_in(dir.path(), &["ERR_IO", "--rc", "129", stdout.as_str()])).unwrap();
    assert_eq!(out, "ok: ERR_IO (rc 129)");
}

#[test]
fn test_check_exit_only_success() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    let out = check(&args_in(dir.path(), &["ERR_NONE", "--rc=0", "--exit-only"])).unwrap();
    assert_eq!(out, "ok: ERR_NONE (rc 0)");
}

#[test]
fn test_check_wrong_message() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());
    let stdout = dir.path().join("stdout.txt");
    fs::write(&stdout, "ERROR: Out of memory\n").unwrap();
    let stdout = format!("--stdout={}", stdout.display());

    let err = check(&args_in(dir.path(), &["ERR_IO", "--rc=129", stdout.as_str()])).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Check(rcheck_verify::CheckFailure::MessageMismatch { .. })
    ));
}

#[test]
fn test_check_invalid_rc() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    let err = check(&args_in(dir.path(), &["ERR_IO", "--rc=abc"])).unwrap_err();
    assert_eq!(err.to_string(), "check: invalid return code 'abc'");

    let err = check(&args_in(dir.path(), &["ERR_IO"])).unwrap_err();
    assert!(matches!(err, CommandError::Usage(_)));
}

#[test]
fn test_check_missing_stdout_file() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());
    let missing = format!("--stdout={}", dir.path().join("nope.txt").display());

    let err = check(&args_in(dir.path(), &["ERR_IO", "--rc=129", missing.as_str()])).unwrap_err();
    assert!(matches!(err, CommandError::Io { .. }));
}
