use thiserror::Error;

use crate::error::ErrorKind;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during infix to postfix conversion.
pub enum ConvertError {
    /// A `)` had no matching `(`, or a `(` was never closed.
    #[error("Mismatched parentheses.")]
    MismatchedParens,
}

impl ConvertError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MismatchedParens => ErrorKind::MismatchedParens,
        }
    }
}
