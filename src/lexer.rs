use std::{fmt::Display, str::FromStr};

use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub offset: usize,
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    FloorDiv,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::FloorDiv => "//",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "//" => Ok(Self::FloorDiv),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Operand(i64),
    Operator(Operator),
    Invalid(String),
}

impl TokenKind {
    pub fn at(self, span: Span) -> Token {
        Token { kind: self, span }
    }

    /// Integers win over operators, so `-5` is an operand and `-` is not.
    fn classify(word: &str) -> Self {
        if let Ok(value) = word.parse::<i64>() {
            return Self::Operand(value);
        }

        match word.parse::<Operator>() {
            Ok(op) => Self::Operator(op),
            Err(()) => Self::Invalid(word.to_string()),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operand(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Invalid(word) => write!(f, "{word}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

pub struct Lexer<'a> {
    n: usize,
    source: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { n: 0, source }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.n..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.n += rest.len() - rest.trim_start().len();
    }

    fn word(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let rest = self.rest();
        if rest.is_empty() {
            return None;
        }

        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let span = Span { offset: self.n };
        self.n += len;

        Some(TokenKind::classify(&rest[..len]).at(span))
    }

    pub fn lex(&mut self) -> Vec<Token> {
        let mut tokens = vec![];

        while let Some(token) = self.word() {
            tokens.push(token);
        }

        tokens
    }
}
