use tracing::trace;

use crate::{error::EvalError, token::Token};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a postfix token sequence on a value stack.
///
/// Numbers are parsed and pushed. Each operator pops its right operand first,
/// then its left operand, and pushes the result. Dividing by zero pushes
/// `NaN` instead of failing; it is up to the caller to reject non-finite
/// results (see [`crate::util::num::ensure_finite`]).
///
/// # Errors
/// - [`EvalError::NotANumber`] if a number token's text does not parse.
/// - [`EvalError::StackUnderflow`] if an operator has fewer than two operands.
/// - [`EvalError::UnexpectedParen`] if the sequence contains a parenthesis.
/// - [`EvalError::InvalidExpression`] unless exactly one value is left.
///
/// # Example
/// ```
/// use reckon::{
///     interpreter::evaluator::eval_postfix,
///     token::{Operator, Token},
/// };
///
/// // 10 3 - 2 -
/// let postfix = vec![Token::number("10"),
///                    Token::number("3"),
///                    Token::Operator(Operator::Sub),
///                    Token::number("2"),
///                    Token::Operator(Operator::Sub)];
/// assert_eq!(eval_postfix(postfix).unwrap(), 5.0);
/// ```
pub fn eval_postfix<I>(tokens: I) -> EvalResult<f64>
    where I: IntoIterator<Item = Token>
{
    let mut stack: Vec<f64> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(literal) => match literal.parse::<f64>() {
                Ok(value) => stack.push(value),
                Err(_) => return Err(EvalError::NotANumber { literal }),
            },
            Token::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::StackUnderflow { operator: op.symbol() });
                };
                stack.push(op.apply(left, right));
            },
            Token::LeftParen | Token::RightParen => return Err(EvalError::UnexpectedParen),
        }
    }

    trace!(stack = ?stack, "postfix evaluated");
    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::InvalidExpression { remaining: stack.len() }),
    }
}
