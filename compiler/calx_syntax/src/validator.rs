use std::fmt;

use calx_lexer::{AnalysisBatch, Expression};
use log::{debug, warn};

use crate::diagnostics::StructuralError;

/// Entry of the scan stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Open,
    Close,
}

/// Result of scanning a text for parenthesis balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenBalance {
    /// Every `(` has a matching `)`
    Balanced,
    /// The text ended with `depth` parentheses still open
    UnclosedOpen { depth: usize },
    /// A `)` with no matching `(`, at this character position
    UnmatchedClose { position: usize },
}

impl ParenBalance {
    pub fn is_balanced(self) -> bool {
        self == ParenBalance::Balanced
    }
}

impl fmt::Display for ParenBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParenBalance::Balanced => f.write_str("parentheses are balanced"),
            ParenBalance::UnclosedOpen { depth: 1 } => {
                f.write_str("unmatched opening parenthesis")
            }
            ParenBalance::UnclosedOpen { depth } => {
                write!(f, "{depth} unmatched opening parentheses")
            }
            ParenBalance::UnmatchedClose { position } => {
                write!(f, "unmatched closing parenthesis at position {position}")
            }
        }
    }
}

/// Scan `text` with a stack of parenthesis markers.
///
/// `(` pushes an open marker and `)` pops one. A `)` arriving on an empty
/// stack pushes a close marker and ends the scan, so the stack is empty at
/// the end only for balanced text.
pub fn scan(text: &str) -> ParenBalance {
    let mut stack: Vec<Marker> = Vec::new();
    let mut stopped_at = 0;

    for (position, c) in text.chars().enumerate() {
        match c {
            '(' => stack.push(Marker::Open),
            ')' => {
                if stack.pop().is_none() {
                    stack.push(Marker::Close);
                    stopped_at = position;
                    break;
                }
            }
            _ => {}
        }
    }

    match stack.last() {
        None => ParenBalance::Balanced,
        Some(Marker::Close) => ParenBalance::UnmatchedClose {
            position: stopped_at,
        },
        Some(Marker::Open) => ParenBalance::UnclosedOpen { depth: stack.len() },
    }
}

/// Whether the parentheses of `expression` balance. The check runs over the
/// concatenated lexemes.
pub fn validate(expression: &Expression<'_>) -> bool {
    scan(&expression.text()).is_balanced()
}

/// Validate every expression of a batch, in order.
///
/// Returns the reconstructed text of each expression when all of them
/// balance. The first unbalanced expression fails the whole batch; the
/// expressions after it are not examined.
pub fn validate_batch(batch: &AnalysisBatch<'_>) -> Result<Vec<String>, StructuralError> {
    let mut texts = Vec::with_capacity(batch.len());

    for expression in batch {
        let text = expression.text();
        match scan(&text) {
            ParenBalance::Balanced => {
                debug!("expression {} is balanced: {text}", expression.index());
                texts.push(text);
            }
            balance => {
                warn!("expression {} rejected: {balance}", expression.index());
                return Err(StructuralError::UnbalancedParentheses {
                    index: expression.index(),
                    expression: text,
                    balance,
                });
            }
        }
    }

    Ok(texts)
}
