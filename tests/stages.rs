use reckon::{
    error::{ConvertError, EvalError, LexError},
    interpreter::{converter::to_postfix, evaluator::eval_postfix, lexer::tokenize},
    token::{Operator, Token},
};

fn num(text: &str) -> Token {
    Token::number(text)
}

const fn op(operator: Operator) -> Token {
    Token::Operator(operator)
}

fn rendered(tokens: &[Token]) -> String {
    tokens.iter().map(Token::to_string).collect::<Vec<_>>().join(" ")
}

#[test]
fn lexer_builds_literals_and_operators() {
    assert_eq!(tokenize("12.5+3").unwrap(),
               vec![num("12.5"), op(Operator::Add), num("3")]);
    assert_eq!(tokenize("(1)/2").unwrap(),
               vec![Token::LeftParen, num("1"), Token::RightParen, op(Operator::Div), num("2")]);
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn lexer_absorbs_sign_only_where_an_operand_is_expected() {
    assert_eq!(tokenize("-3").unwrap(), vec![num("-3")]);
    assert_eq!(tokenize("(-3)").unwrap(),
               vec![Token::LeftParen, num("-3"), Token::RightParen]);
    assert_eq!(tokenize("4-3").unwrap(),
               vec![num("4"), op(Operator::Sub), num("3")]);
    assert_eq!(tokenize("(4)-3").unwrap(),
               vec![Token::LeftParen, num("4"), Token::RightParen, op(Operator::Sub), num("3")]);
}

#[test]
fn lexer_sign_needs_an_adjacent_digit() {
    assert_eq!(tokenize("5*- 2"),
               Err(LexError::UnexpectedOperator { operator: '-',
                                                  position: 2 }));
    assert_eq!(tokenize("--1"),
               Err(LexError::UnexpectedOperator { operator: '-',
                                                  position: 0 }));
}

#[test]
fn lexer_reports_bad_characters_and_literals() {
    assert_eq!(tokenize("1 % 2"),
               Err(LexError::UnsupportedChar { found:    '%',
                                               position: 2 }));
    assert_eq!(tokenize("2×3"),
               Err(LexError::UnsupportedChar { found:    '×',
                                               position: 1 }));
    assert_eq!(tokenize("1+2.3.4"),
               Err(LexError::MalformedNumber { literal:  "2.3.4".to_string(),
                                               position: 2 }));
    assert_eq!(tokenize("-."),
               Err(LexError::MalformedNumber { literal:  "-.".to_string(),
                                               position: 0 }));
}

#[test]
fn converter_orders_by_precedence() {
    let postfix = to_postfix(tokenize("1+2*3-4").unwrap()).unwrap();
    assert_eq!(rendered(&postfix), "1 2 3 * + 4 -");

    let postfix = to_postfix(tokenize("(1+2)*(3-4)/5").unwrap()).unwrap();
    assert_eq!(rendered(&postfix), "1 2 + 3 4 - * 5 /");
}

#[test]
fn converter_output_has_no_parentheses() {
    let postfix = to_postfix(tokenize("((1+(2)))").unwrap()).unwrap();
    assert!(postfix.iter()
                   .all(|t| !matches!(t, Token::LeftParen | Token::RightParen)));
}

#[test]
fn converter_rejects_unbalanced_parentheses() {
    assert_eq!(to_postfix(tokenize("(1+2").unwrap()), Err(ConvertError::MismatchedParens));
    assert_eq!(to_postfix(tokenize("1+2)").unwrap()), Err(ConvertError::MismatchedParens));
    assert_eq!(to_postfix(vec![Token::RightParen]), Err(ConvertError::MismatchedParens));
}

#[test]
fn evaluator_pops_right_operand_first() {
    // 8 2 /  is 8 / 2, not 2 / 8
    let value = eval_postfix(vec![num("8"), num("2"), op(Operator::Div)]).unwrap();
    assert_eq!(value, 4.0);
}

#[test]
fn evaluator_carries_nan_from_division_by_zero() {
    // 1 0 / 3 +
    let value =
        eval_postfix(vec![num("1"), num("0"), op(Operator::Div), num("3"), op(Operator::Add)]).unwrap();
    assert!(value.is_nan());
}

#[test]
fn evaluator_errors() {
    assert_eq!(eval_postfix(vec![num("1"), op(Operator::Add)]),
               Err(EvalError::StackUnderflow { operator: '+' }));
    assert_eq!(eval_postfix(vec![op(Operator::Mul)]),
               Err(EvalError::StackUnderflow { operator: '*' }));
    assert_eq!(eval_postfix(Vec::new()),
               Err(EvalError::InvalidExpression { remaining: 0 }));
    assert_eq!(eval_postfix(vec![num("1"), num("2")]),
               Err(EvalError::InvalidExpression { remaining: 2 }));
    assert_eq!(eval_postfix(vec![num("abc")]),
               Err(EvalError::NotANumber { literal: "abc".to_string() }));
    assert_eq!(eval_postfix(vec![Token::LeftParen]), Err(EvalError::UnexpectedParen));
}
