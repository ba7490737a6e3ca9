//! Projections of stage results into report lines.
//!
//! Nothing here prints; callers decide where the lines go.

use calx_eval::{EvaluationRecord, Outcome};
use calx_lexer::{AnalysisBatch, LexError};
use calx_syntax::StructuralError;
use serde::Serialize;

pub const LEXICAL_HEADER: &str = "Lexical analysis results:";
pub const SYNTACTIC_HEADER: &str = "Syntactic analysis results:";
pub const SEMANTIC_HEADER: &str = "Semantic analysis results:";

/// One `Valid tokens:` line per expression.
pub fn lexical_lines(batch: &AnalysisBatch<'_>) -> Vec<String> {
    let mut lines = vec![LEXICAL_HEADER.to_string()];
    lines.extend(batch.iter().map(|expression| {
        let names: Vec<&str> = expression.kinds().iter().map(|kind| kind.name()).collect();
        format!("Valid tokens: {}", names.join(", "))
    }));
    lines
}

/// The structural verdict of each examined expression. On failure the
/// expressions before the offending one are listed as valid and the
/// offending one closes the report.
pub fn structural_lines(
    batch: &AnalysisBatch<'_>,
    result: &Result<Vec<String>, StructuralError>,
) -> Vec<String> {
    let mut lines = vec![SYNTACTIC_HEADER.to_string()];
    match result {
        Ok(texts) => {
            lines.extend(texts.iter().map(|text| format!("Valid expression: {text}")));
        }
        Err(err) => {
            lines.extend(
                batch
                    .iter()
                    .take_while(|expression| expression.index() < err.index())
                    .map(|expression| format!("Valid expression: {}", expression.text())),
            );
            lines.push(format!("Invalid expression: {}", err.expression()));
        }
    }
    lines
}

/// One line per evaluation record, in batch order.
pub fn evaluation_lines(records: &[EvaluationRecord]) -> Vec<String> {
    let mut lines = vec![SEMANTIC_HEADER.to_string()];
    lines.extend(records.iter().map(|record| match record.outcome {
        Outcome::Value(_) => format!("Valid expression: {record}"),
        Outcome::Error(_) => format!("Invalid expression: {record}"),
    }));
    lines
}

/// Machine readable form of a finished analysis
#[derive(Debug, Serialize, PartialEq)]
pub struct AnalysisReport {
    pub expressions: Vec<ExpressionReport>,
    /// Messages for expressions dropped because of invalid characters
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ExpressionReport {
    pub index: usize,
    pub text: String,
    pub tokens: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisReport {
    pub fn new(
        batch: &AnalysisBatch<'_>,
        records: &[EvaluationRecord],
        skipped: &[LexError],
    ) -> Self {
        let expressions = batch
            .iter()
            .zip(records)
            .map(|(expression, record)| ExpressionReport {
                index: expression.index(),
                text: record.source_text.clone(),
                tokens: expression.kinds().iter().map(|kind| kind.name()).collect(),
                value: record.value().map(|value| value.to_string()),
                error: record.error().map(|tag| tag.to_string()),
            })
            .collect();

        Self {
            expressions,
            skipped: skipped.iter().map(|err| err.to_string()).collect(),
        }
    }
}
