/// Lexing errors.
///
/// Raised while turning the raw expression text into tokens: characters
/// outside the accepted alphabet, operators without a left operand, and
/// numeric literals that do not form a valid number.
pub mod lex_error;
/// Conversion errors.
///
/// Raised while reordering infix tokens into postfix order. The only failure
/// at this stage is an unbalanced parenthesis.
pub mod convert_error;
/// Evaluation errors.
///
/// Raised while running the postfix sequence on the value stack, including
/// the final check that rejects non-finite results.
pub mod eval_error;

pub use convert_error::ConvertError;
pub use eval_error::EvalError;
pub use lex_error::LexError;
use thiserror::Error;

/// Any failure produced by [`crate::evaluate`].
///
/// Each variant wraps the error of the stage that stopped the pipeline. Use
/// [`EvaluationError::kind`] to branch on the failure category without caring
/// which stage raised it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// The lexer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The converter rejected the token sequence.
    #[error(transparent)]
    Convert(#[from] ConvertError),
    /// The evaluator rejected the postfix sequence or its result.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// The categories every evaluation failure falls into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character outside the accepted set.
    UnsupportedChar,
    /// An operator with no left-hand operand and no preceding `)`.
    UnexpectedOperator,
    /// Unbalanced parentheses.
    MismatchedParens,
    /// A numeric literal that does not parse as a number.
    NotANumber,
    /// An operator evaluated with fewer than two operands available.
    StackUnderflow,
    /// Evaluation did not leave exactly one value behind.
    InvalidExpression,
    /// The result is `NaN` or infinite.
    NonFiniteResult,
}

impl EvaluationError {
    /// Returns the failure category of this error.
    ///
    /// ```
    /// use reckon::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("(1+2").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::MismatchedParens);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(e) => e.kind(),
            Self::Convert(e) => e.kind(),
            Self::Eval(e) => e.kind(),
        }
    }
}
