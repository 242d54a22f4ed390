use logos::Logos;
use tracing::trace;

use crate::{
    error::LexError,
    token::{Operator, Token},
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Classifies a single source character.
///
/// Every accepted character is its own raw token, whitespace included, so the
/// scanner can look at the literal next character when deciding whether a `-`
/// is a sign. Anything that matches no variant is a lexing error.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RawToken {
    /// `0` to `9`
    #[regex(r"[0-9]")]
    Digit,
    /// `.`
    #[token(".")]
    Dot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n]")]
    Whitespace,
}

impl RawToken {
    const fn operator(self) -> Option<Operator> {
        match self {
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Sub),
            Self::Star => Some(Operator::Mul),
            Self::Slash => Some(Operator::Div),
            _ => None,
        }
    }
}

/// Accumulates tokens and the pending numeric literal.
struct Scanner {
    tokens:  Vec<Token>,
    /// Text of the literal being built, empty when none is pending.
    literal: String,
    /// Byte offset where the pending literal starts.
    start:   usize,
}

impl Scanner {
    fn with_capacity(capacity: usize) -> Self {
        Self { tokens:  Vec::with_capacity(capacity),
               literal: String::new(),
               start:   0, }
    }

    fn push_literal_char(&mut self, c: char, position: usize) {
        if self.literal.is_empty() {
            self.start = position;
        }
        self.literal.push(c);
    }

    /// Emits the pending literal as a `Number` token.
    ///
    /// Returns whether anything was pending. The literal must parse as `f64`
    /// here so later stages never see a malformed number.
    fn flush(&mut self) -> LexResult<bool> {
        if self.literal.is_empty() {
            return Ok(false);
        }
        let literal = std::mem::take(&mut self.literal);
        if literal.parse::<f64>().is_err() {
            return Err(LexError::MalformedNumber { literal,
                                                   position: self.start });
        }
        self.tokens.push(Token::Number(literal));
        Ok(true)
    }

    /// A sign may only follow the start of input, an operator or `(`.
    fn expects_operand(&self) -> bool {
        matches!(self.tokens.last(), None | Some(Token::Operator(_) | Token::LeftParen))
    }

    fn operator(&mut self, op: Operator, position: usize, next: Option<char>) -> LexResult<()> {
        let pending = self.flush()?;

        if op == Operator::Sub
           && !pending
           && self.expects_operand()
           && next.is_some_and(|c| c.is_ascii_digit() || c == '.')
        {
            self.push_literal_char('-', position);
            return Ok(());
        }

        if !pending && !matches!(self.tokens.last(), Some(Token::RightParen)) {
            return Err(LexError::UnexpectedOperator { operator: op.symbol(),
                                                      position });
        }

        self.tokens.push(Token::Operator(op));
        Ok(())
    }
}

/// Splits an arithmetic expression into tokens.
///
/// Digits and decimal points are gathered into numeric literals; whitespace
/// is skipped without ending the literal being built, so `1 2` lexes as `12`.
/// A `-` directly followed by a digit or `.` becomes the sign of a literal
/// when it appears at the start, after an operator, or after `(`.
///
/// # Errors
/// - [`LexError::UnsupportedChar`] for any character outside the accepted
///   set.
/// - [`LexError::UnexpectedOperator`] for an operator with no number or `)`
///   before it.
/// - [`LexError::MalformedNumber`] for literals such as `1.2.3`.
///
/// # Example
/// ```
/// use reckon::{
///     interpreter::lexer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize("5*-2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::number("5"), Token::Operator(Operator::Mul), Token::number("-2")]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut scanner = Scanner::with_capacity(source.len());
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        let Ok(raw) = raw else {
            let found = source[span.start..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(LexError::UnsupportedChar { found,
                                                   position: span.start });
        };

        match raw {
            RawToken::Digit | RawToken::Dot => {
                for c in lexer.slice().chars() {
                    scanner.push_literal_char(c, span.start);
                }
            },
            RawToken::Whitespace => {},
            RawToken::LParen => {
                scanner.flush()?;
                scanner.tokens.push(Token::LeftParen);
            },
            RawToken::RParen => {
                scanner.flush()?;
                scanner.tokens.push(Token::RightParen);
            },
            RawToken::Plus | RawToken::Minus | RawToken::Star | RawToken::Slash => {
                if let Some(op) = raw.operator() {
                    let next = source[span.end..].chars().next();
                    scanner.operator(op, span.start, next)?;
                }
            },
        }
    }
    scanner.flush()?;

    trace!(count = scanner.tokens.len(), tokens = ?scanner.tokens, "tokenized");
    Ok(scanner.tokens)
}
