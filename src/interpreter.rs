/// The converter module reorders infix tokens into postfix order.
///
/// It implements the shunting-yard algorithm over the token stream produced
/// by the lexer, resolving precedence, left associativity and parentheses so
/// the evaluator never has to.
///
/// # Responsibilities
/// - Emits a parenthesis-free token sequence in postfix order.
/// - Detects unbalanced parentheses.
pub mod converter;
/// The evaluator module computes the value of a postfix sequence.
///
/// It runs the postfix tokens on a stack of `f64` values, applying each
/// operator to the two most recent operands.
///
/// # Responsibilities
/// - Parses numeric literals and applies arithmetic operators.
/// - Reports missing operands and leftover values.
/// - Leaves division by zero as `NaN` for the final finiteness check.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw source text and produces numbers, operators and
/// parentheses. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Builds numeric literals, absorbing a leading unary minus.
/// - Rejects unsupported characters and operators without a left operand.
/// - Guarantees every numeric literal it emits parses as a number.
pub mod lexer;
