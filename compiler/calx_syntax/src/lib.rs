//! Structural validation of calx expressions.
//!
//! An expression is structurally valid when its parentheses balance. The
//! check is independent of arithmetic correctness: `(+)` is balanced.

pub mod diagnostics;
pub mod validator;

pub use diagnostics::StructuralError;
pub use validator::{scan, validate, validate_batch, ParenBalance};
