pub mod calculator;
pub mod error;
pub mod lexer;
pub mod stack;

pub use calculator::{evaluate, Calculator};
pub use error::Error;
pub use lexer::{Lexer, Operator, Span, Token, TokenKind};
pub use stack::BoundedStack;
