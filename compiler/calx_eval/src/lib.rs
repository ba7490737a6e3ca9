//! Evaluation of calx expressions.
//!
//! Each expression of a batch is evaluated on its own and produces exactly one
//! [`EvaluationRecord`]; a failing expression never stops its siblings.

pub mod evaluator;
pub mod parser;
pub mod record;
pub mod value;

pub use evaluator::{evaluate, evaluate_expression, evaluate_tokens};
pub use parser::MAX_NESTING_DEPTH;
pub use record::{ErrorTag, EvaluationRecord, Outcome};
pub use value::{ArithmeticFault, Number};


// Integration tests are in the tests/ directory
