//! Enum declaration extraction.
//!
//! Three declaration shapes are recognized, each tried on its own:
//!
//! ```text
//! enum <name> { <body> } ;
//! typedef enum { <body> } <name> ;
//! typedef enum <tag> { <body> } <alias> ;     // matches on tag or alias
//! ```
//!
//! Shapes are tried in that order and every match is visited; when several
//! declarations carry the requested name, the last one visited wins.

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use crate::pattern::{find_all, Piece, Shape};
use crate::token::{render, tokenize, Token, TokenKind};
use crate::DeclError;

const ENUM_SHAPES: [Shape; 3] = [
    Shape {
        display: "enum <name> { ... };",
        pieces: &[
            Piece::Tok(TokenKind::Enum),
            Piece::Name,
            Piece::Tok(TokenKind::LBrace),
            Piece::Body,
            Piece::Tok(TokenKind::RBrace),
            Piece::Tok(TokenKind::Semi),
        ],
    },
    Shape {
        display: "typedef enum { ... } <name>;",
        pieces: &[
            Piece::Tok(TokenKind::Typedef),
            Piece::Tok(TokenKind::Enum),
            Piece::Tok(TokenKind::LBrace),
            Piece::Body,
            Piece::Tok(TokenKind::RBrace),
            Piece::Name,
            Piece::Tok(TokenKind::Semi),
        ],
    },
    Shape {
        display: "typedef enum <tag> { ... } <alias>;",
        pieces: &[
            Piece::Tok(TokenKind::Typedef),
            Piece::Tok(TokenKind::Enum),
            Piece::Name,
            Piece::Tok(TokenKind::LBrace),
            Piece::Body,
            Piece::Tok(TokenKind::RBrace),
            Piece::Name,
            Piece::Tok(TokenKind::Semi),
        ],
    },
];

/// Symbolic name to ordinal, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnumMapping {
    entries: Vec<(String, i64)>,
    index: FxHashMap<String, usize>,
}

impl EnumMapping {
    /// Bind `name` to `ordinal`. Rebinding keeps the original position.
    pub fn insert(&mut self, name: &str, ordinal: i64) {
        if let Some(&slot) = self.index.get(name) {
            self.entries[slot].1 = ordinal;
        } else {
            self.index.insert(name.to_owned(), self.entries.len());
            self.entries.push((name.to_owned(), ordinal));
        }
    }

    /// Ordinal bound to `name`, if any.
    pub fn ordinal(&self, name: &str) -> Option<i64> {
        self.index.get(name).map(|&slot| self.entries[slot].1)
    }

    /// Every name whose ordinal equals `ordinal`, in declaration order.
    pub fn names_for(&self, ordinal: i64) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(move |(_, value)| *value == ordinal)
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, i64)> for EnumMapping {
    fn from_iter<I: IntoIterator<Item = (&'a str, i64)>>(iter: I) -> Self {
        let mut mapping = EnumMapping::default();
        for (name, ordinal) in iter {
            mapping.insert(name, ordinal);
        }
        mapping
    }
}

/// Find the enum called `name` in comment-free `source` and number its
/// enumerators.
#[tracing::instrument(level = "debug", skip(source))]
pub fn extract_enum(source: &str, name: &str) -> Result<EnumMapping, DeclError> {
    let tokens = tokenize(source);
    let mut found: Option<EnumMapping> = None;

    for shape in &ENUM_SHAPES {
        for captures in find_all(&tokens, shape) {
            if !captures.names.iter().any(|captured| *captured == name) {
                continue;
            }
            let mapping = parse_enum_body(captures.body)?;
            if found.is_some() {
                warn!(shape = shape.display, "later declaration of `{name}` replaces an earlier one");
            } else {
                debug!(shape = shape.display, enumerators = mapping.len(), "enum found");
            }
            found = Some(mapping);
        }
    }

    found.ok_or_else(|| DeclError::EnumNotFound {
        name: name.to_owned(),
    })
}

/// Number the enumerators of an enum body.
///
/// Entries are separated by commas; empty entries (a trailing comma) are
/// skipped. A running counter starts at 0, an `= <int>` entry resets it,
/// and it advances by one after every entry. An implicit entry whose value
/// would not fit in an `i64` is rejected.
pub fn parse_enum_body(body: &[Token<'_>]) -> Result<EnumMapping, DeclError> {
    let mut mapping = EnumMapping::default();
    // `None` once the counter has run past `i64::MAX`.
    let mut next = Some(0_i64);

    for fragment in body.split(|t| t.kind == TokenKind::Comma) {
        let (name, explicit) = match fragment {
            [] => continue,
            [ident] if ident.kind == TokenKind::Ident => (ident.text, None),
            [ident, eq, value]
                if ident.kind == TokenKind::Ident
                    && eq.kind == TokenKind::Eq
                    && value.kind == TokenKind::Int =>
            {
                (ident.text, Some(value.text))
            }
            _ => {
                return Err(DeclError::InvalidEnumerator {
                    fragment: render(fragment),
                })
            }
        };

        let ordinal = match explicit {
            Some(text) => parse_int(text),
            None => next,
        }
        .ok_or_else(|| DeclError::InvalidEnumerator {
            fragment: render(fragment),
        })?;

        trace!(name, ordinal, "enumerator");
        mapping.insert(name, ordinal);
        next = ordinal.checked_add(1);
    }

    Ok(mapping)
}

/// Parse a signed decimal, `0x` hex or `0b` binary literal.
fn parse_int(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16).ok()?
    } else if let Some(bin) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        i64::from_str_radix(bin, 2).ok()?
    } else {
        digits.parse::<i64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests;
