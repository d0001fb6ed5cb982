use crate::{calculator, lexer::Span};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),
    #[error("SerializeError: {0}")]
    Serialize(#[from] ron::Error),
    #[error("{0}")]
    Eval(#[from] calculator::Error),
}

impl Error {
    pub fn span(&self) -> Span {
        match self {
            Error::IO(_) => Span::default(),
            Error::Serialize(_) => Span::default(),
            Error::Eval(e) => e.span,
        }
    }
}
