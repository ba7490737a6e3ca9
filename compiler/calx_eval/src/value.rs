use std::fmt;

use calx_lexer::TokenKind;
use thiserror::Error;

/// A numeric result.
///
/// Literals are integers. `+`, `-` and `*` keep two integers integral;
/// `/` always yields a real, and any operation with a real operand yields a
/// real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An exact 64-bit integer
    Integer(i64),
    /// A double precision real
    Real(f64),
}

/// The four binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    /// The operator for a token kind, if it is one
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Sub),
            TokenKind::Times => Some(BinaryOperator::Mul),
            TokenKind::Divide => Some(BinaryOperator::Div),
            _ => None,
        }
    }

    /// Whether the operator binds as tightly as `*`
    pub fn is_multiplicative(self) -> bool {
        matches!(self, BinaryOperator::Mul | BinaryOperator::Div)
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Arithmetic failures found while computing a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticFault {
    /// The right operand of `/` is zero
    #[error("division by zero")]
    DivisionByZero,
    /// An integer result left the 64-bit range
    #[error("integer overflow in `{lhs} {op} {rhs}`")]
    Overflow {
        /// Left operand
        lhs: i64,
        /// The operator
        op: BinaryOperator,
        /// Right operand
        rhs: i64,
    },
    /// A literal too large for a 64-bit integer
    #[error("integer literal {0} does not fit in 64 bits")]
    LiteralTooLarge(String),
}

impl Number {
    /// Parse a NUMBER lexeme
    pub fn from_literal(lexeme: &str) -> Result<Self, ArithmeticFault> {
        lexeme
            .parse::<i64>()
            .map(Number::Integer)
            .map_err(|_| ArithmeticFault::LiteralTooLarge(lexeme.to_string()))
    }

    /// The value as a real
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Real(r) => r,
        }
    }

    /// Whether the value is exactly zero (either sign for reals)
    pub fn is_zero(self) -> bool {
        match self {
            Number::Integer(i) => i == 0,
            Number::Real(r) => r == 0.0,
        }
    }

    /// Apply a binary operator
    pub fn apply(self, op: BinaryOperator, rhs: Number) -> Result<Number, ArithmeticFault> {
        match op {
            BinaryOperator::Add => self.integral_or_real(rhs, op, i64::checked_add, |a, b| a + b),
            BinaryOperator::Sub => self.integral_or_real(rhs, op, i64::checked_sub, |a, b| a - b),
            BinaryOperator::Mul => self.integral_or_real(rhs, op, i64::checked_mul, |a, b| a * b),
            BinaryOperator::Div => self.divide(rhs),
        }
    }

    fn integral_or_real(
        self,
        rhs: Number,
        op: BinaryOperator,
        int_op: fn(i64, i64) -> Option<i64>,
        real_op: fn(f64, f64) -> f64,
    ) -> Result<Number, ArithmeticFault> {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => int_op(a, b)
                .map(Number::Integer)
                .ok_or(ArithmeticFault::Overflow { lhs: a, op, rhs: b }),
            (a, b) => Ok(Number::Real(real_op(a.as_f64(), b.as_f64()))),
        }
    }

    fn divide(self, rhs: Number) -> Result<Number, ArithmeticFault> {
        if rhs.is_zero() {
            return Err(ArithmeticFault::DivisionByZero);
        }
        Ok(Number::Real(self.as_f64() / rhs.as_f64()))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{i}"),
            // Debug keeps the fractional part: 2.0, not 2
            Number::Real(r) => write!(f, "{r:?}"),
        }
    }
}
