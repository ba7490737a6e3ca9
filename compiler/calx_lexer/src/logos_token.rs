use logos::Logos;

use crate::token::TokenKind;

/// One entry of the token table: a pattern and the kind it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRule {
    /// Regular expression matched against the unconsumed input
    pub pattern: &'static str,
    /// Kind assigned to the matched lexeme
    pub kind: TokenKind,
}

/// The ordered token table. Rules are tried in this order and the first
/// match wins; [`RawToken`] declares the same patterns in the same order.
pub static TOKEN_TABLE: [TokenRule; 7] = [
    TokenRule { pattern: r"[0-9]+", kind: TokenKind::Number },
    TokenRule { pattern: r"\+", kind: TokenKind::Plus },
    TokenRule { pattern: r"-", kind: TokenKind::Minus },
    TokenRule { pattern: r"\*", kind: TokenKind::Times },
    TokenRule { pattern: r"/", kind: TokenKind::Divide },
    TokenRule { pattern: r"\(", kind: TokenKind::LParen },
    TokenRule { pattern: r"\)", kind: TokenKind::RParen },
];

/// Scanner generated from the token table.
///
/// None of the patterns can match the same prefix, so logos' longest-match
/// resolution picks the same rule as a first-match scan of [`TOKEN_TABLE`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    /// Digits only; the sign is never part of the literal
    #[regex(r"[0-9]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Times,
    /// `/`
    #[token("/")]
    Divide,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Whitespace between tokens (skipped)
    #[regex(r"\s+", logos::skip)]
    Whitespace,
}

impl RawToken {
    /// Kind of a scanned token. Whitespace never reaches the caller.
    pub fn kind(self) -> Option<TokenKind> {
        match self {
            RawToken::Number => Some(TokenKind::Number),
            RawToken::Plus => Some(TokenKind::Plus),
            RawToken::Minus => Some(TokenKind::Minus),
            RawToken::Times => Some(TokenKind::Times),
            RawToken::Divide => Some(TokenKind::Divide),
            RawToken::LParen => Some(TokenKind::LParen),
            RawToken::RParen => Some(TokenKind::RParen),
            RawToken::Whitespace => None,
        }
    }
}
