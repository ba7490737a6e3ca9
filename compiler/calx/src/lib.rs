//! The calx pipeline: lexing, structural validation and evaluation of
//! `;`-separated arithmetic expressions.

pub mod config;
pub mod report;
pub mod source;

use std::io::{self, Write};

use calx_eval::{evaluate, EvaluationRecord};
use calx_lexer::{AnalysisBatch, LexError, Lexer};
use calx_syntax::{validate_batch, StructuralError};
use log::{info, warn};
use thiserror::Error;

use crate::config::{InvalidCharPolicy, PipelineConfig};

/// Errors that stop the analysis of a whole batch
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Structural(#[from] StructuralError),
    #[error("failed to write stage report: {0}")]
    Report(#[from] io::Error),
}

impl PipelineError {
    /// A short hint for the user, when one applies
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PipelineError::Lex(_) => {
                Some("Expressions may only contain digits, + - * / and parentheses.")
            }
            PipelineError::Structural(err) => err.help(),
            PipelineError::Report(_) => None,
        }
    }
}

/// The outcome of a successful run
#[derive(Debug)]
pub struct Analysis<'a> {
    pub batch: AnalysisBatch<'a>,
    /// Expressions dropped under [`InvalidCharPolicy::SkipExpression`]
    pub skipped: Vec<LexError>,
    /// Text of every structurally valid expression
    pub accepted: Vec<String>,
    pub records: Vec<EvaluationRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run all three stages without emitting stage reports.
    pub fn run<'a>(&self, source: &'a str) -> Result<Analysis<'a>, PipelineError> {
        self.run_with_sink(source, &mut io::sink())
    }

    /// Run all three stages. When `show_stages` is set, the lexical and
    /// syntactic reports are written to `sink` as each stage completes; the
    /// syntactic report is written even when validation fails.
    pub fn run_with_sink<'a, W: Write + ?Sized>(
        &self,
        source: &'a str,
        sink: &mut W,
    ) -> Result<Analysis<'a>, PipelineError> {
        let lexer = Lexer::new(source);
        let (batch, skipped) = match self.config.invalid_chars {
            InvalidCharPolicy::AbortBatch => (lexer.tokenize()?, Vec::new()),
            InvalidCharPolicy::SkipExpression => lexer.tokenize_lenient(),
        };
        info!(
            "lexed {} expression(s), skipped {}",
            batch.len(),
            skipped.len()
        );

        if self.config.show_stages {
            emit(sink, &report::lexical_lines(&batch))?;
        }

        let validated = validate_batch(&batch);
        if self.config.show_stages {
            emit(sink, &report::structural_lines(&batch, &validated))?;
        }
        let accepted = validated.inspect_err(|err| warn!("batch rejected: {err}"))?;

        let records = evaluate(&batch);
        info!(
            "evaluated {} expression(s), {} failed",
            records.len(),
            records.iter().filter(|r| !r.outcome.is_value()).count()
        );

        Ok(Analysis {
            batch,
            skipped,
            accepted,
            records,
        })
    }
}

fn emit<W: Write + ?Sized>(sink: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(sink, "{line}")?;
    }
    Ok(())
}
