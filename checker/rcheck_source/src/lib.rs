//! Comment stripping for C source text.
//!
//! Declaration extraction works on a flat, single-line view of a source file:
//! every comment removed and all whitespace collapsed to single spaces.
//!
//! # Rules
//!
//! - **Line comments**: a whitespace-separated word that *starts* with `//`
//!   drops itself and the rest of its physical line. A `//` in the middle of
//!   a word (`x;//note`) is left alone.
//! - **Block comments**: everything from a `/*` to the next `*/` is deleted
//!   (no nesting). An unterminated `/*` deletes the rest of the text.
//!
//! Line comments are handled first, per physical line, then block comments
//! on the joined text. Deleting a block comment can splice two fragments into
//! a new `/*` or `//` word, so [`strip_comments`] repeats the pass until the
//! text stops changing. The result is therefore a fixpoint:
//!
//! ```
//! use rcheck_source::strip_comments;
//!
//! let once = strip_comments("enum e { A, // first\n B /* second */ };");
//! assert_eq!(once, "enum e { A, B };");
//! assert_eq!(strip_comments(&once), once);
//! ```

use std::path::{Path, PathBuf};

use memchr::memmem;


/// Failure to load a source file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file does not exist or is not readable UTF-8 text.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read `path` and return its comment-free, whitespace-normalized text.
pub fn load_stripped(path: &Path) -> Result<String, SourceError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(strip_comments(&raw))
}

/// Remove all comments from `source` and collapse whitespace.
pub fn strip_comments(source: &str) -> String {
    let mut current = strip_once(source);
    loop {
        // Each pass either leaves the text untouched or makes it shorter.
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(source: &str) -> String {
    let mut words = Vec::new();
    for line in source.lines() {
        for word in line.split_whitespace() {
            if word.starts_with("//") {
                break;
            }
            words.push(word);
        }
    }

    let joined = words.join(" ");
    let without_blocks = remove_block_comments(&joined);
    collapse_whitespace(&without_blocks)
}

fn remove_block_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = memmem::find(rest.as_bytes(), b"/*") {
        out.push_str(&rest[..start]);
        let body = &rest[start + 2..];
        match memmem::find(body.as_bytes(), b"*/") {
            Some(end) => rest = &body[end + 2..],
            None => {
                rest = "";
                break;
            }
        }
    }

    out.push_str(rest);
    out
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
