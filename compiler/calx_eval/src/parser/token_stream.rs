use calx_lexer::{Token, TokenKind};
use nom::{
    error::{Error, ErrorKind},
    Err as NomErr, IResult, InputLength,
};

/// A view of the remaining tokens, used as nom parser input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSlice<'a>(pub &'a [Token<'a>]);

impl<'a> TokenSlice<'a> {
    /// Create a new token slice
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        TokenSlice(tokens)
    }

    /// Get the current token without advancing
    pub fn peek(&self) -> Option<&'a Token<'a>> {
        self.0.first()
    }

    /// Kind of the current token
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// The slice without its first token
    pub fn advance(&self) -> Self {
        TokenSlice(self.0.get(1..).unwrap_or(&[]))
    }

    /// Check if we're at the end of input
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of remaining tokens
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Create a recoverable nom error at the current position
    pub fn error(&self, kind: ErrorKind) -> NomErr<Error<Self>> {
        NomErr::Error(Error::new(*self, kind))
    }

    /// Create a nom failure at the current position; stops every alternative
    pub fn failure(&self, kind: ErrorKind) -> NomErr<Error<Self>> {
        NomErr::Failure(Error::new(*self, kind))
    }
}

impl InputLength for TokenSlice<'_> {
    fn input_len(&self) -> usize {
        self.len()
    }
}

/// Match one token of the given kind and consume it
pub fn token<'a>(kind: TokenKind) -> impl Fn(TokenSlice<'a>) -> IResult<TokenSlice<'a>, Token<'a>> {
    move |input: TokenSlice<'a>| match input.peek() {
        Some(token) if token.kind == kind => Ok((input.advance(), *token)),
        Some(_) => Err(input.error(ErrorKind::Tag)),
        None => Err(input.error(ErrorKind::Eof)),
    }
}
