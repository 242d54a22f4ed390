//! # reckon
//!
//! reckon is a safe arithmetic expression evaluator written in Rust.
//! It tokenizes infix expressions over `+ - * /` and parentheses, reorders
//! them into postfix form with the shunting-yard algorithm, and evaluates the
//! result on a value stack. No source text is ever executed as code.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::EvaluationError,
    interpreter::{converter::to_postfix, evaluator::eval_postfix, lexer::tokenize},
    token::Token,
    util::num::ensure_finite,
};

/// Provides unified error types for every evaluation stage.
///
/// This module defines one error enum per stage (lexer, converter,
/// evaluator) and the [`error::EvaluationError`] that unions them for the
/// top-level entry points. Every error also maps to an [`error::ErrorKind`],
/// the flat list of failure categories callers can match on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches source positions where the lexer knows them.
/// - Implements `std::error::Error` and `Display` for reporting.
pub mod error;
/// Runs an expression through its three stages.
///
/// This module ties together the lexer, the shunting-yard converter and the
/// postfix evaluator. Each stage is usable on its own; [`evaluate`] chains
/// them.
///
/// # Responsibilities
/// - Converts source text into tokens.
/// - Reorders tokens into postfix order.
/// - Computes the numeric value of a postfix sequence.
pub mod interpreter;
/// Defines the tokens passed between stages.
///
/// This module declares the `Token` enum and the `Operator` type together
/// with its fixed precedence and associativity.
pub mod token;
/// General numeric helpers.
///
/// # Responsibilities
/// - Reject non-finite results.
/// - Format results for display.
pub mod util;

/// Evaluates an arithmetic expression.
///
/// The expression is tokenized, converted to postfix order and evaluated. A
/// result that is not finite, such as the `NaN` produced by dividing by zero,
/// is rejected. The first failing stage stops the pipeline and its error is
/// returned; no partial result is ever produced.
///
/// # Errors
/// Returns an error if lexing, conversion or evaluation fails, or if the
/// result is not a finite number.
///
/// # Examples
/// ```
/// use reckon::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
/// assert_eq!(evaluate("10-3-2").unwrap(), 5.0);
///
/// // Division by zero only surfaces at the end.
/// let err = evaluate("5/0").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NonFiniteResult);
/// ```
pub fn evaluate(source: &str) -> Result<f64, EvaluationError> {
    let result = run(source);
    match &result {
        Ok(value) => debug!(source, value, "evaluated"),
        Err(error) => debug!(source, %error, kind = ?error.kind(), "evaluation failed"),
    }
    result
}

fn run(source: &str) -> Result<f64, EvaluationError> {
    let tokens = tokenize(source)?;
    let postfix = to_postfix(tokens)?;
    let value = eval_postfix(postfix)?;
    Ok(ensure_finite(value)?)
}

/// Renders the postfix (Reverse Polish) form of an expression.
///
/// Only the lexer and converter run; the expression is not evaluated, so an
/// expression like `1+` still renders even though it cannot be evaluated.
///
/// # Errors
/// Returns an error if lexing or conversion fails.
///
/// # Examples
/// ```
/// use reckon::to_rpn;
///
/// assert_eq!(to_rpn("2+3*4").unwrap(), "2 3 4 * +");
/// assert_eq!(to_rpn("5*-2").unwrap(), "5 -2 *");
/// ```
pub fn to_rpn(source: &str) -> Result<String, EvaluationError> {
    let postfix = to_postfix(tokenize(source)?)?;
    Ok(postfix.iter().map(Token::to_string).collect::<Vec<_>>().join(" "))
}
