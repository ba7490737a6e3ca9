//! Batch evaluation: one [`EvaluationRecord`] per expression, in batch order.

use calx_lexer::{AnalysisBatch, Expression, Token};
use log::debug;
use nom::error::{Error, ErrorKind};
use nom::Err as NomErr;

use crate::parser::{parse_complete, TokenSlice, MAX_NESTING_DEPTH};
use crate::record::{ErrorTag, EvaluationRecord, Outcome};

/// Evaluate every expression of a batch.
///
/// The result has one record per expression, in the same order. A failing
/// expression is recorded and evaluation moves on.
pub fn evaluate(batch: &AnalysisBatch<'_>) -> Vec<EvaluationRecord> {
    debug!("Evaluating {} expression(s)", batch.len());
    batch.iter().map(evaluate_expression).collect()
}

/// Evaluate a single expression into its record.
pub fn evaluate_expression(expression: &Expression<'_>) -> EvaluationRecord {
    let record = EvaluationRecord::new(expression.text(), evaluate_tokens(expression.tokens()));
    debug!("Expression {}: {}", expression.index(), record);
    record
}

/// Evaluate a token sequence.
pub fn evaluate_tokens(tokens: &[Token<'_>]) -> Outcome {
    match parse_complete(TokenSlice::new(tokens)) {
        Ok((_, Ok(value))) => Outcome::Value(value),
        Ok((_, Err(fault))) => Outcome::Error(fault.into()),
        Err(err) => Outcome::Error(classify(err)),
    }
}

fn classify(err: NomErr<Error<TokenSlice<'_>>>) -> ErrorTag {
    match err {
        NomErr::Failure(Error {
            code: ErrorKind::TooLarge,
            ..
        }) => ErrorTag::UnexpectedError(format!(
            "expression nested deeper than {MAX_NESTING_DEPTH} levels"
        )),
        NomErr::Incomplete(_) => {
            ErrorTag::UnexpectedError("expression ended before parsing finished".to_string())
        }
        NomErr::Error(_) | NomErr::Failure(_) => ErrorTag::SyntaxError,
    }
}
