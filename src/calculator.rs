use std::{
    fmt::Display,
    io::{BufRead, Write},
};

#[cfg(feature = "tracing")]
use tracing::{instrument, Level};

use crate::{
    lexer::{Lexer, Operator, Span, Token, TokenKind},
    stack::{self, BoundedStack},
};

pub const EVAL_CAPACITY: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error(transparent)]
    Stack(#[from] stack::Error),
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
    #[error("malformed expression: expected a single value on stack, found {remaining}")]
    MalformedExpression { remaining: usize },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in '{op}'")]
    ArithmeticOverflow { op: Operator },
}

impl ErrorKind {
    pub fn at(self, span: Span) -> Error {
        Error { kind: self, span }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub span: Span,
}

impl Error {
    pub fn is_underflow(&self) -> bool {
        matches!(self.kind, ErrorKind::Stack(stack::Error::Underflow))
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self.kind, ErrorKind::Stack(stack::Error::Overflow { .. }))
    }

    pub fn is_unknown_operator(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownOperator(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedExpression { .. })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for Error {}

trait IntoSpanned<T> {
    fn at(self, span: Span) -> Result<T, Error>;
}

impl<T, E: Into<ErrorKind>> IntoSpanned<T> for Result<T, E> {
    fn at(self, span: Span) -> Result<T, Error> {
        self.map_err(|e| e.into().at(span))
    }
}

/// Product of `x` and `y` with the sign of the mathematical result, `None`
/// when it doesn't fit in an `i64`.
pub fn multiply(x: i64, y: i64) -> Option<i64> {
    if x == 0 || y == 0 {
        return Some(0);
    }

    let magnitude = x.unsigned_abs().checked_mul(y.unsigned_abs())?;

    if (x < 0) == (y < 0) {
        i64::try_from(magnitude).ok()
    } else {
        0i64.checked_sub_unsigned(magnitude)
    }
}

/// Integer division rounding toward negative infinity (`-7 // 2 == -4`).
pub fn floor_div(x: i64, y: i64) -> Result<i64, ErrorKind> {
    if y == 0 {
        return Err(ErrorKind::DivisionByZero);
    }

    let overflow = || ErrorKind::ArithmeticOverflow {
        op: Operator::FloorDiv,
    };
    let quotient = x.checked_div(y).ok_or_else(overflow)?;

    if x % y != 0 && (x < 0) != (y < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

fn apply(op: Operator, left: i64, right: i64) -> Result<i64, ErrorKind> {
    let result = match op {
        Operator::Add => left.checked_add(right),
        Operator::Sub => left.checked_sub(right),
        Operator::Mul => multiply(left, right),
        Operator::FloorDiv => return floor_div(left, right),
    };

    result.ok_or(ErrorKind::ArithmeticOverflow { op })
}

/// Evaluates RPN expressions on a fresh [`BoundedStack`] per call.
#[derive(Debug, Clone, Copy)]
pub struct Calculator {
    capacity: i64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            capacity: EVAL_CAPACITY as i64,
        }
    }
}

impl Calculator {
    pub fn with_capacity(capacity: i64) -> Self {
        Self { capacity }
    }

    pub fn eval(&self, expression: &str) -> Result<i64, Error> {
        let tokens = Self::parse(expression);
        self.eval_tokens(&tokens)
    }

    pub fn parse(expression: &str) -> Vec<Token> {
        Lexer::new(expression).lex()
    }

    #[cfg_attr(feature = "tracing", instrument(level = Level::DEBUG, skip_all, fields(len = tokens.len()), ret, err(level = Level::DEBUG, Display)))]
    pub fn eval_tokens(&self, tokens: &[Token]) -> Result<i64, Error> {
        let mut stack = BoundedStack::new(self.capacity).at(Span::default())?;

        for token in tokens {
            let span = token.span;

            let op = match &token.kind {
                TokenKind::Operand(value) => {
                    stack.push(*value).at(span)?;
                    continue;
                }
                TokenKind::Operator(op) => Some(*op),
                TokenKind::Invalid(_) => None,
            };

            // operands are consumed before the symbol is checked
            let right = stack.pop().at(span)?;
            let left = stack.pop().at(span)?;

            let Some(op) = op else {
                return Err(ErrorKind::UnknownOperator(token.kind.to_string()).at(span));
            };

            stack.push(apply(op, left, right).at(span)?).at(span)?;
        }

        let end = Span {
            offset: tokens.last().map_or(0, |token| token.span.offset),
        };

        match stack.len() {
            // nothing left to pop, surfaces as an underflow
            0 | 1 => stack.pop().at(end),
            remaining => Err(ErrorKind::MalformedExpression { remaining }.at(end)),
        }
    }

    /// Evaluates one expression per line of `input` and writes each result
    /// to `out`. Blank lines are skipped, the first failure stops the batch.
    pub fn eval_lines<R: BufRead, W: Write>(&self, input: R, mut out: W) -> Result<(), crate::Error> {
        for line in input.lines() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            writeln!(out, "{}", self.eval(&line)?)?;
        }

        Ok(())
    }
}

/// Evaluates `expression` with the default stack capacity.
pub fn evaluate(expression: &str) -> Result<i64, Error> {
    Calculator::default().eval(expression)
}
