//! String-array declaration extraction.
//!
//! Recognizes `<name>[] = { "...", "...", ... };`. Qualifiers and the element
//! type before `<name>` are not inspected.

use tracing::{debug, warn};

use crate::pattern::{find_all, Piece, Shape};
use crate::token::{render, tokenize, Token, TokenKind};
use crate::DeclError;

const ARRAY_SHAPE: Shape = Shape {
    display: "<name>[] = { ... };",
    pieces: &[
        Piece::Name,
        Piece::Tok(TokenKind::LBracket),
        Piece::Tok(TokenKind::RBracket),
        Piece::Tok(TokenKind::Eq),
        Piece::Tok(TokenKind::LBrace),
        Piece::Body,
        Piece::Tok(TokenKind::RBrace),
        Piece::Tok(TokenKind::Semi),
    ],
};

/// Message strings in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageTable {
    messages: Vec<String>,
}

impl MessageTable {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.messages.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.messages.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for MessageTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        MessageTable {
            messages: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Find the string array called `name` in comment-free `source`.
#[tracing::instrument(level = "debug", skip(source))]
pub fn extract_message_array(source: &str, name: &str) -> Result<MessageTable, DeclError> {
    let tokens = tokenize(source);
    let mut found: Option<MessageTable> = None;

    for captures in find_all(&tokens, &ARRAY_SHAPE) {
        if captures.names.first().copied() != Some(name) {
            continue;
        }
        let table = parse_message_body(captures.body)?;
        if found.is_some() {
            warn!("later definition of `{name}[]` replaces an earlier one");
        } else {
            debug!(messages = table.len(), "message array found");
        }
        found = Some(table);
    }

    found.ok_or_else(|| DeclError::ArrayNotFound {
        name: name.to_owned(),
    })
}

/// Collect the string of every comma-separated entry.
///
/// Adjacent literals in one entry are concatenated the way the C compiler
/// does. Entries without any literal are rejected; empty entries (a
/// trailing comma) are skipped.
pub fn parse_message_body(body: &[Token<'_>]) -> Result<MessageTable, DeclError> {
    let mut messages = Vec::new();

    for fragment in body.split(|t| t.kind == TokenKind::Comma) {
        if fragment.is_empty() {
            continue;
        }
        let literals: Vec<&str> = fragment
            .iter()
            .filter(|t| t.kind == TokenKind::Str)
            .map(|t| t.text)
            .collect();
        if literals.is_empty() {
            return Err(DeclError::InvalidMessage {
                fragment: render(fragment),
            });
        }
        messages.push(literals.into_iter().map(cook_literal).collect::<String>());
    }

    Ok(MessageTable { messages })
}

/// Strip the quotes of a string literal and resolve simple escapes.
///
/// Unknown escapes are kept verbatim, backslash included.
fn cook_literal(literal: &str) -> String {
    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(escaped @ ('"' | '\'' | '\\' | '?')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
