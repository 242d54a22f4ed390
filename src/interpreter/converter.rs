use tracing::trace;

use crate::{error::ConvertError, token::Token};

/// Result type used by the converter.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Reorders infix tokens into postfix (Reverse Polish) order.
///
/// This is Dijkstra's shunting-yard algorithm. Numbers go straight to the
/// output. An incoming operator first moves every stacked operator that binds
/// at least as tightly to the output, which makes equal-precedence operators
/// group to the left. Parentheses only steer the stack and never reach the
/// output.
///
/// # Errors
/// Returns [`ConvertError::MismatchedParens`] when a `)` has no matching `(`
/// or a `(` is still open at the end of input.
///
/// # Example
/// ```
/// use reckon::{
///     interpreter::{converter::to_postfix, lexer::tokenize},
///     token::Token,
/// };
///
/// let postfix = to_postfix(tokenize("(2+3)*4").unwrap()).unwrap();
/// let rendered: Vec<String> = postfix.iter().map(Token::to_string).collect();
/// assert_eq!(rendered, ["2", "3", "+", "4", "*"]);
/// ```
pub fn to_postfix<I>(tokens: I) -> ConvertResult<Vec<Token>>
    where I: IntoIterator<Item = Token>
{
    let tokens = tokens.into_iter();
    let mut output = Vec::with_capacity(tokens.size_hint().0);
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = stack.last()
                      && top.yields_to(op)
                {
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(token);
            },
            Token::LeftParen => stack.push(token),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(ConvertError::MismatchedParens),
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Token::LeftParen | Token::RightParen) {
            return Err(ConvertError::MismatchedParens);
        }
        output.push(top);
    }

    trace!(postfix = ?output, "converted to postfix");
    Ok(output)
}
