//! Declaration shapes as flat token patterns.
//!
//! A [`Shape`] is a sequence of [`Piece`]s tried at every token position,
//! left to right, without overlap (like a `findall` over text). There is no
//! backtracking: a `Body` piece always stops at the first `}`.

use crate::token::{Token, TokenKind};

/// One element of a declaration shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Piece {
    /// Exactly one token of this kind.
    Tok(TokenKind),
    /// One identifier, captured into [`Captures::names`].
    Name,
    /// Every token up to, not including, the next `}`.
    Body,
}

/// A named declaration shape.
#[derive(Clone, Copy, Debug)]
pub struct Shape {
    /// Human-readable form, used in logs.
    pub display: &'static str,
    pub pieces: &'static [Piece],
}

/// What one match of a [`Shape`] captured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Captures<'t, 'src> {
    /// Identifiers in the order their `Name` pieces appear.
    pub names: Vec<&'src str>,
    /// Tokens matched by the `Body` piece (empty if the shape has none).
    pub body: &'t [Token<'src>],
}

/// Find every non-overlapping match of `shape` in `tokens`.
pub fn find_all<'t, 'src>(tokens: &'t [Token<'src>], shape: &Shape) -> Vec<Captures<'t, 'src>> {
    let mut matches = Vec::new();
    let mut pos = 0;
    while pos < tokens.len() {
        if let Some((captures, end)) = match_at(tokens, pos, shape.pieces) {
            matches.push(captures);
            pos = end;
        } else {
            pos += 1;
        }
    }
    matches
}

fn match_at<'t, 'src>(
    tokens: &'t [Token<'src>],
    start: usize,
    pieces: &[Piece],
) -> Option<(Captures<'t, 'src>, usize)> {
    let mut pos = start;
    let mut names = Vec::new();
    let mut body: &'t [Token<'src>] = &[];

    for piece in pieces {
        match *piece {
            Piece::Tok(kind) => {
                if tokens.get(pos)?.kind != kind {
                    return None;
                }
                pos += 1;
            }
            Piece::Name => {
                let token = tokens.get(pos)?;
                if token.kind != TokenKind::Ident {
                    return None;
                }
                names.push(token.text);
                pos += 1;
            }
            Piece::Body => {
                let rest = tokens.get(pos..)?;
                let len = rest.iter().position(|t| t.kind == TokenKind::RBrace)?;
                body = &rest[..len];
                pos += len;
            }
        }
    }

    Some((Captures { names, body }, pos))
}
