use std::fmt;

use thiserror::Error;

use crate::value::{ArithmeticFault, Number};

/// Why an expression produced no value. Recorded as data, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorTag {
    /// The tokens do not form a well-formed expression
    #[error("syntax error")]
    SyntaxError,
    /// A `/` whose right operand is zero
    #[error("division by zero")]
    DivisionByZero,
    /// Any other evaluation failure
    #[error("unexpected error: {0}")]
    UnexpectedError(String),
}

impl From<ArithmeticFault> for ErrorTag {
    fn from(fault: ArithmeticFault) -> Self {
        match fault {
            ArithmeticFault::DivisionByZero => ErrorTag::DivisionByZero,
            other => ErrorTag::UnexpectedError(other.to_string()),
        }
    }
}

/// The value of an expression, or the reason it has none
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(Number),
    Error(ErrorTag),
}

impl Outcome {
    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(value) => write!(f, "{value}"),
            Outcome::Error(tag) => write!(f, "{tag}"),
        }
    }
}

/// One evaluated expression: its reconstructed text and outcome
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRecord {
    pub source_text: String,
    pub outcome: Outcome,
}

impl EvaluationRecord {
    pub fn new(source_text: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            source_text: source_text.into(),
            outcome,
        }
    }

    /// The value, when evaluation succeeded
    pub fn value(&self) -> Option<Number> {
        match self.outcome {
            Outcome::Value(value) => Some(value),
            Outcome::Error(_) => None,
        }
    }

    /// The error tag, when evaluation failed
    pub fn error(&self) -> Option<&ErrorTag> {
        match &self.outcome {
            Outcome::Value(_) => None,
            Outcome::Error(tag) => Some(tag),
        }
    }
}

impl fmt::Display for EvaluationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.source_text, self.outcome)
    }
}
