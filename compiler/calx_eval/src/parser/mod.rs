//! Recursive descent evaluation over a token slice
//!
//! expr   := term (('+'|'-') term)*
//! term   := factor (('*'|'/') factor)*
//! factor := NUMBER | '(' expr ')'
//!
//! Each rule returns the value of what it recognized; no tree is built.
//! Arithmetic faults travel inside the parse output so that parsing goes on
//! and a syntax error later in the expression still wins.

mod token_stream;

use calx_lexer::TokenKind;
use log::trace;
use nom::combinator::all_consuming;
use nom::error::ErrorKind;
use nom::sequence::delimited;
use nom::IResult;

use crate::value::{ArithmeticFault, BinaryOperator, Number};

pub use token_stream::{token, TokenSlice};

/// Maximum allowed parenthesis nesting, to keep recursion bounded
pub const MAX_NESTING_DEPTH: usize = 256;

/// A computed value or the first arithmetic fault met
pub type Computed = Result<Number, ArithmeticFault>;

/// Parse and evaluate a whole expression; every token must be consumed.
pub fn parse_complete<'a>(input: TokenSlice<'a>) -> IResult<TokenSlice<'a>, Computed> {
    all_consuming(|i: TokenSlice<'a>| parse_expression(i, 0))(input)
}

/// `expr := term (('+'|'-') term)*`
pub fn parse_expression<'a>(input: TokenSlice<'a>, depth: usize) -> IResult<TokenSlice<'a>, Computed> {
    parse_binary_chain(input, depth, false)
}

/// `term := factor (('*'|'/') factor)*`
pub fn parse_term<'a>(input: TokenSlice<'a>, depth: usize) -> IResult<TokenSlice<'a>, Computed> {
    parse_binary_chain(input, depth, true)
}

/// Parses a left-associative chain of operands joined by the operators of
/// one precedence level.
fn parse_binary_chain<'a>(
    input: TokenSlice<'a>,
    depth: usize,
    multiplicative: bool,
) -> IResult<TokenSlice<'a>, Computed> {
    let operand: fn(TokenSlice<'a>, usize) -> IResult<TokenSlice<'a>, Computed> =
        if multiplicative { parse_factor } else { parse_term };

    let (mut input, mut acc) = operand(input, depth)?;

    while let Some(op) = input
        .peek_kind()
        .and_then(BinaryOperator::from_kind)
        .filter(|op| op.is_multiplicative() == multiplicative)
    {
        let (rest, rhs) = operand(input.advance(), depth)?;
        acc = combine(acc, op, rhs);
        input = rest;
    }

    Ok((input, acc))
}

/// `factor := NUMBER | '(' expr ')'`
pub fn parse_factor<'a>(input: TokenSlice<'a>, depth: usize) -> IResult<TokenSlice<'a>, Computed> {
    match input.peek() {
        Some(tok) if tok.kind == TokenKind::Number => {
            trace!("literal {}", tok.lexeme);
            Ok((input.advance(), Number::from_literal(tok.lexeme)))
        }
        Some(tok) if tok.kind == TokenKind::LParen => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(input.failure(ErrorKind::TooLarge));
            }
            delimited(
                token(TokenKind::LParen),
                |i: TokenSlice<'a>| parse_expression(i, depth + 1),
                token(TokenKind::RParen),
            )(input)
        }
        Some(_) => Err(input.error(ErrorKind::Char)),
        None => Err(input.error(ErrorKind::Eof)),
    }
}

/// Fold one operation into the running value. The left fault wins.
fn combine(lhs: Computed, op: BinaryOperator, rhs: Computed) -> Computed {
    let lhs = lhs?;
    let rhs = rhs?;
    lhs.apply(op, rhs)
}
