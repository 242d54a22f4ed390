use thiserror::Error;

use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvalError {
    /// A numeric token's text could not be parsed as a floating-point value.
    #[error("'{literal}' is not a number.")]
    NotANumber {
        /// The text of the rejected token.
        literal: String,
    },
    /// An operator was reached with fewer than two values on the stack.
    #[error("Operator '{operator}' is missing an operand.")]
    StackUnderflow {
        /// The operator that could not be applied.
        operator: char,
    },
    /// Evaluation finished with zero or several values on the stack.
    #[error("Invalid expression: {remaining} values left after evaluation, expected 1.")]
    InvalidExpression {
        /// How many values were left on the stack.
        remaining: usize,
    },
    /// A parenthesis was found in a postfix sequence.
    #[error("Invalid expression: parenthesis in postfix input.")]
    UnexpectedParen,
    /// The final value is `NaN` or infinite, e.g. after a division by zero.
    #[error("Result {value} is not a finite number.")]
    NonFiniteResult {
        /// The rejected value.
        value: f64,
    },
}

impl EvalError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotANumber { .. } => ErrorKind::NotANumber,
            Self::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            Self::InvalidExpression { .. } | Self::UnexpectedParen => ErrorKind::InvalidExpression,
            Self::NonFiniteResult { .. } => ErrorKind::NonFiniteResult,
        }
    }
}
