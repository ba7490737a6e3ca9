//! calx lexical analyzer
//!
//! This crate turns a `;`-separated batch of arithmetic expressions into an
//! [`AnalysisBatch`]: one token sequence per non-empty expression, with every
//! lexeme borrowed from the original input.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use lexer::{segments, tokenize, tokenize_expression, tokenize_lenient, LexError, Lexer};
pub use logos_token::{RawToken, TokenRule, TOKEN_TABLE};
pub use token::{AnalysisBatch, Expression, Location, Token, TokenKind};
