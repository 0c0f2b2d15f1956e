//! Token scanner for comment-free C text.
//!
//! Only the handful of tokens that the declaration shapes care about get
//! their own kind. Everything else (operators, `#`, stray `/`) becomes
//! [`TokenKind::Other`] so the matcher can step over it.

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[token("enum")]
    Enum,
    #[token("typedef")]
    Typedef,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[+-]?(0[xX][0-9a-fA-F]+|0[bB][01]+|[0-9]+)")]
    Int,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Str,
}

/// Kind of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Enum,
    Typedef,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semi,
    Comma,
    Eq,
    Ident,
    /// Signed decimal, `0x` hex or `0b` binary integer literal.
    Int,
    /// String literal, quotes included.
    Str,
    /// Anything the declaration shapes never look at.
    Other,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Enum => TokenKind::Enum,
            RawToken::Typedef => TokenKind::Typedef,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Semi => TokenKind::Semi,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Eq => TokenKind::Eq,
            RawToken::Ident => TokenKind::Ident,
            RawToken::Int => TokenKind::Int,
            RawToken::Str => TokenKind::Str,
        }
    }
}

/// A token borrowed from the scanned text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
}

/// Scan `source` into tokens. Unrecognized input yields [`TokenKind::Other`].
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();
    while let Some(raw) = lexer.next() {
        let kind = raw.map_or(TokenKind::Other, TokenKind::from);
        tokens.push(Token {
            kind,
            text: lexer.slice(),
        });
    }
    tokens
}

/// Render a token slice back to text, one space between tokens.
pub fn render(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| token.text)
        .collect::<Vec<_>>()
        .join(" ")
}
