use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    lexeme: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, lexeme: impl Into<String>) -> Self {
        Error {
            internal_error: error_impl,
            position,
            lexeme: lexeme.into(),
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    /// Text accumulated for the current lexeme when scanning failed.
    pub fn get_lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::MalformedIdentifier { .. } => "MalformedIdentifier",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => ErrorTip::None,
            ErrorImpl::MalformedIdentifier { found } => ErrorTip::Suggestion(format!(
                "Identifier `{}` is followed by `{}`, identifiers may only contain letters, digits and `_`",
                self.lexeme, found
            )),
            ErrorImpl::MalformedNumber { reason } => ErrorTip::Suggestion(format!(
                "Number literal `{}` {}",
                self.lexeme, reason
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(format!(
                "Source ended while reading `{}`, is a trailing newline missing?",
                self.lexeme
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid character: {found:?}")]
    InvalidCharacter { found: char },
    #[error("malformed identifier: unexpected {found:?}")]
    MalformedIdentifier { found: char },
    #[error("malformed number: {reason}")]
    MalformedNumber { reason: NumberFault },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFault {
    #[error("ends with a lone point")]
    TrailingPoint,
    #[error("contains more than one point")]
    TooManyPoints,
    #[error("is followed by {0:?}")]
    UnexpectedCharacter(char),
}

/// Failure to obtain source text. Returned before any scanning happens.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read source {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
