use std::fmt;

use crate::logos_token::TOKEN_TABLE;

/// Represents a position in the source text.
///
/// Line and column numbers are 1-based (columns count characters, not
/// bytes); the offset is the 0-based byte offset from the start of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number in the source
    pub line: usize,
    /// The 1-based column number in the source
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

impl Location {
    /// Locate a byte offset inside `source`.
    ///
    /// `\n`, `\r\n` and a lone `\r` each end a line. Offsets past the end of
    /// the source are clamped to its length.
    pub fn locate(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let mut line = 1;
        let mut column = 1;

        let mut iter = source[..floor_char_boundary(source, offset)].chars().peekable();
        while let Some(c) = iter.next() {
            if c == '\n' {
                line += 1;
                column = 1;
            } else if c == '\r' {
                // Windows line endings count once
                if iter.peek() == Some(&'\n') {
                    iter.next();
                }
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

fn floor_char_boundary(source: &str, mut offset: usize) -> usize {
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// The category of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A non-negative integer literal
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl TokenKind {
    /// Every kind, in token table order.
    pub const ALL: [TokenKind; 7] = [
        TokenKind::Number,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Times,
        TokenKind::Divide,
        TokenKind::LParen,
        TokenKind::RParen,
    ];

    /// Upper-case name used in reports, e.g. `NUMBER`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
        }
    }

    /// The token table pattern that produces this kind.
    pub fn pattern(self) -> &'static str {
        TOKEN_TABLE
            .iter()
            .find(|rule| rule.kind == self)
            .map(|rule| rule.pattern)
            .unwrap_or_default()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: its kind and the lexeme it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of the token
    pub kind: TokenKind,
    /// The matched text, borrowed from the original input
    pub lexeme: &'a str,
    /// Byte offset of the lexeme in the original input
    pub offset: usize,
}

impl<'a> Token<'a> {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: &'a str, offset: usize) -> Self {
        Self {
            kind,
            lexeme,
            offset,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.lexeme)
    }
}

/// The tokens of one `;`-delimited expression. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<'a> {
    index: usize,
    tokens: Vec<Token<'a>>,
}

impl<'a> Expression<'a> {
    /// Build an expression from its tokens. Returns `None` for an empty
    /// token list, since empty segments never form an expression.
    pub fn new(index: usize, tokens: Vec<Token<'a>>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { index, tokens })
        }
    }

    /// Position of the expression in its batch
    pub fn index(&self) -> usize {
        self.index
    }

    /// The tokens, in source order
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// The token kinds, in source order
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Reconstruct the expression text by concatenating the lexemes.
    ///
    /// Whitespace between tokens is not preserved.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.lexeme).collect()
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// The ordered expressions scanned from one input text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisBatch<'a> {
    expressions: Vec<Expression<'a>>,
}

impl<'a> AnalysisBatch<'a> {
    /// An empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expression, renumbering it to its position in the batch
    pub fn push(&mut self, mut expression: Expression<'a>) {
        expression.index = self.expressions.len();
        self.expressions.push(expression);
    }

    /// The expressions, in source order
    pub fn expressions(&self) -> &[Expression<'a>] {
        &self.expressions
    }

    /// Iterate over the expressions in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Expression<'a>> {
        self.expressions.iter()
    }

    /// Number of expressions
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    /// Whether the batch holds no expressions
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}

impl<'a, 'b> IntoIterator for &'b AnalysisBatch<'a> {
    type Item = &'b Expression<'a>;
    type IntoIter = std::slice::Iter<'b, Expression<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.expressions.iter()
    }
}

impl<'a> IntoIterator for AnalysisBatch<'a> {
    type Item = Expression<'a>;
    type IntoIter = std::vec::IntoIter<Expression<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.expressions.into_iter()
    }
}

impl<'a> FromIterator<Expression<'a>> for AnalysisBatch<'a> {
    fn from_iter<I: IntoIterator<Item = Expression<'a>>>(iter: I) -> Self {
        let mut batch = AnalysisBatch::new();
        for expression in iter {
            batch.push(expression);
        }
        batch
    }
}
