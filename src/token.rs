use std::fmt;

/// Represents a single lexical unit of an arithmetic expression.
///
/// Tokens are produced by the lexer in left-to-right order and consumed once by
/// the shunting-yard converter. After conversion only `Number` and `Operator`
/// tokens remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A numeric literal, kept as its raw source text (e.g. `3`, `.5`, `-2.25`).
    Number(String),
    /// One of the four binary arithmetic operators.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Convenience constructor for numeric tokens.
    pub fn number(text: impl Into<String>) -> Self {
        Self::Number(text.into())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Direction in which operators of equal precedence group.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// Equal-precedence operators group from the right.
    Right,
}

impl Operator {
    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength: higher binds tighter.
    ///
    /// ```
    /// use reckon::token::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Sub.precedence(), Operator::Add.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
        }
    }

    /// Returns `true` if `self`, already waiting on the operator stack, must be
    /// emitted before `incoming` is pushed.
    #[must_use]
    pub const fn yields_to(self, incoming: Self) -> bool {
        let (top, next) = (self.precedence(), incoming.precedence());
        top > next || (top == next && matches!(incoming.associativity(), Associativity::Left))
    }

    /// Applies the operator to `left` and `right`.
    ///
    /// Division by zero does not fail: it yields `NaN`, which then propagates
    /// through any later arithmetic until the final finiteness check.
    ///
    /// ```
    /// use reckon::token::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(10.0, 3.0), 7.0);
    /// assert!(Operator::Div.apply(5.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => {
                if right == 0.0 {
                    f64::NAN
                } else {
                    left / right
                }
            },
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
