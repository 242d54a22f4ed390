use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur while tokenizing an expression.
///
/// Positions are byte offsets into the source string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Found a character that is not a digit, `.`, operator, parenthesis or
    /// whitespace.
    #[error("Error at position {position}: Unsupported character '{found}'.")]
    UnsupportedChar {
        /// The offending character.
        found:    char,
        /// Where the character starts.
        position: usize,
    },
    /// An operator appeared with nothing to its left to operate on.
    #[error("Error at position {position}: Unexpected operator '{operator}'.")]
    UnexpectedOperator {
        /// The operator character.
        operator: char,
        /// Where the operator occurs.
        position: usize,
    },
    /// A run of digits and decimal points that is not a valid number, such as
    /// `1.2.3` or a lone `.`.
    #[error("Error at position {position}: Malformed number '{literal}'.")]
    MalformedNumber {
        /// The literal text as scanned.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
}

impl LexError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedChar { .. } => ErrorKind::UnsupportedChar,
            Self::UnexpectedOperator { .. } => ErrorKind::UnexpectedOperator,
            Self::MalformedNumber { .. } => ErrorKind::NotANumber,
        }
    }
}
