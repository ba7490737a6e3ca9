use thiserror::Error;

use crate::validator::ParenBalance;

/// Structural failures. Any of them stops the analysis of the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// An expression whose parentheses do not balance
    #[error("invalid expression `{expression}`: {balance}")]
    UnbalancedParentheses {
        /// Position of the expression in its batch
        index: usize,
        /// The reconstructed expression text
        expression: String,
        /// Why the scan rejected it
        balance: ParenBalance,
    },
}

impl StructuralError {
    /// The offending expression text
    pub fn expression(&self) -> &str {
        match self {
            StructuralError::UnbalancedParentheses { expression, .. } => expression,
        }
    }

    /// Position of the offending expression in its batch
    pub fn index(&self) -> usize {
        match self {
            StructuralError::UnbalancedParentheses { index, .. } => *index,
        }
    }

    /// A short hint for the user
    pub fn help(&self) -> Option<&'static str> {
        match self {
            StructuralError::UnbalancedParentheses { balance, .. } => match balance {
                ParenBalance::UnmatchedClose { .. } => {
                    Some("Did you forget a matching '(' earlier?")
                }
                ParenBalance::UnclosedOpen { .. } => {
                    Some("Did you forget a matching ')' before the end of the expression?")
                }
                ParenBalance::Balanced => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message_names_the_expression() {
        let err = StructuralError::UnbalancedParentheses {
            index: 0,
            expression: "1+2)".to_string(),
            balance: ParenBalance::UnmatchedClose { position: 3 },
        };
        assert_eq!(
            err.to_string(),
            "invalid expression `1+2)`: unmatched closing parenthesis at position 3"
        );
        assert_eq!(err.help(), Some("Did you forget a matching '(' earlier?"));
    }

    #[test]
    fn opener_hint() {
        let err = StructuralError::UnbalancedParentheses {
            index: 2,
            expression: "(1+2".to_string(),
            balance: ParenBalance::UnclosedOpen { depth: 1 },
        };
        assert_eq!(err.to_string(), "invalid expression `(1+2`: unmatched opening parenthesis");
        assert_eq!(err.index(), 2);
        assert_eq!(err.expression(), "(1+2");
    }
}
