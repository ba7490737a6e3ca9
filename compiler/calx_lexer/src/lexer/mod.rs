//! Lexer implementation for calx
//! Splits the input on `;` and converts each expression into tokens

use log::{debug, trace, warn};
use logos::Logos;
use thiserror::Error;

use crate::logos_token::RawToken;
use crate::token::{AnalysisBatch, Expression, Location, Token};

/// Errors raised while scanning an expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No rule of the token table matches the unconsumed input
    #[error("invalid character {character:?} at {location} in expression `{expression}`")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// The trimmed expression being scanned
        expression: String,
        /// Position of the expression among the non-empty segments
        index: usize,
        /// Where scanning stopped, relative to the whole input
        location: Location,
    },
}

impl LexError {
    /// Where scanning stopped
    pub fn location(&self) -> Location {
        match self {
            LexError::InvalidCharacter { location, .. } => *location,
        }
    }

    /// The expression that failed to scan
    pub fn expression(&self) -> &str {
        match self {
            LexError::InvalidCharacter { expression, .. } => expression,
        }
    }
}

/// The non-empty, trimmed `;`-delimited segments of an input, with the byte
/// offset of each segment in the input.
pub struct Segments<'a> {
    pieces: std::str::Split<'a, char>,
    offset: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let piece = self.pieces.next()?;
            let start = self.offset;
            // Skip the piece and its `;` separator
            self.offset += piece.len() + 1;

            let lead = piece.len() - piece.trim_start().len();
            let segment = piece.trim();
            if !segment.is_empty() {
                return Some((start + lead, segment));
            }
        }
    }
}

/// Split `input` into its non-empty trimmed segments.
pub fn segments(input: &str) -> Segments<'_> {
    Segments {
        pieces: input.split(';'),
        offset: 0,
    }
}

/// The lexer: yields one [`Expression`] (or the error that stopped it) per
/// non-empty segment of the source.
pub struct Lexer<'a> {
    /// The full input text
    source: &'a str,
    /// Remaining segments
    segments: Segments<'a>,
    /// Index of the next expression
    index: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            segments: segments(source),
            index: 0,
        }
    }

    /// Scan every expression, stopping the whole batch at the first invalid
    /// character.
    pub fn tokenize(self) -> Result<AnalysisBatch<'a>, LexError> {
        let batch = self.collect::<Result<AnalysisBatch<'a>, LexError>>()?;
        debug!("tokenized {} expression(s)", batch.len());
        Ok(batch)
    }

    /// Scan every expression, dropping only the expressions that contain an
    /// invalid character. The errors are returned in source order.
    pub fn tokenize_lenient(self) -> (AnalysisBatch<'a>, Vec<LexError>) {
        let mut batch = AnalysisBatch::new();
        let mut errors = Vec::new();
        for result in self {
            match result {
                Ok(expression) => batch.push(expression),
                Err(err) => {
                    warn!("dropping expression: {err}");
                    errors.push(err);
                }
            }
        }
        debug!(
            "tokenized {} expression(s), dropped {}",
            batch.len(),
            errors.len()
        );
        (batch, errors)
    }

    /// Scan one trimmed segment starting at byte `base` of the source.
    fn scan_segment(
        &self,
        base: usize,
        segment: &'a str,
        index: usize,
    ) -> Result<Option<Expression<'a>>, LexError> {
        let mut tokens = Vec::new();
        let mut inner = RawToken::lexer(segment);

        while let Some(result) = inner.next() {
            let span = inner.span();
            match result {
                Ok(raw) => {
                    if let Some(kind) = raw.kind() {
                        let token = Token::new(kind, inner.slice(), base + span.start);
                        trace!("token {token} at offset {}", token.offset);
                        tokens.push(token);
                    }
                }
                Err(()) => {
                    let character = segment[span.start..]
                        .chars()
                        .next()
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(LexError::InvalidCharacter {
                        character,
                        expression: segment.to_string(),
                        index,
                        location: Location::locate(self.source, base + span.start),
                    });
                }
            }
        }

        Ok(Expression::new(index, tokens))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Expression<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (base, segment) = self.segments.next()?;
            let index = self.index;
            self.index += 1;

            match self.scan_segment(base, segment, index) {
                Ok(Some(expression)) => {
                    debug!("expression {index}: {:?}", expression.kinds());
                    return Some(Ok(expression));
                }
                // A trimmed segment always yields a token or an error
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// Tokenize a `;`-separated input, aborting the batch on the first invalid
/// character.
pub fn tokenize(input: &str) -> Result<AnalysisBatch<'_>, LexError> {
    Lexer::new(input).tokenize()
}

/// Tokenize a `;`-separated input, skipping expressions with invalid
/// characters.
pub fn tokenize_lenient(input: &str) -> (AnalysisBatch<'_>, Vec<LexError>) {
    Lexer::new(input).tokenize_lenient()
}

/// Tokenize a single expression into its token sequence. `;` is not treated
/// specially here, so a segment containing one fails like any other invalid
/// character.
pub fn tokenize_expression(segment: &str) -> Result<Vec<Token<'_>>, LexError> {
    let trimmed = segment.trim_start();
    let base = segment.len() - trimmed.len();
    let expression = Lexer::new(segment).scan_segment(base, trimmed.trim_end(), 0)?;
    Ok(expression
        .map(|expr| expr.tokens().to_vec())
        .unwrap_or_default())
}

// Include the test module
#[cfg(test)]
mod tests;
