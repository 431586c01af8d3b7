use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Option<Position>) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn source_unavailable(path: impl Into<String>, reason: impl Display) -> Self {
        Error::new(
            ErrorImpl::SourceUnavailable {
                path: path.into(),
                reason: reason.to_string(),
            },
            None,
        )
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn line(&self) -> Option<u32> {
        self.position.as_ref().map(|position| position.line)
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SourceUnavailable { .. } => "SourceUnavailable",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::InvalidOperatorSequence { .. } => "InvalidOperatorSequence",
        }
    }

    /// The offending text: the character, the operator run or the path.
    pub fn detail(&self) -> String {
        match &self.internal_error {
            ErrorImpl::SourceUnavailable { path, .. } => path.clone(),
            ErrorImpl::UnrecognisedCharacter { character } => character.to_string(),
            ErrorImpl::InvalidOperatorSequence { sequence } => sequence.clone(),
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SourceUnavailable { .. } => ErrorTip::None,
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` is not part of any keyword, identifier, number, operator or delimiter",
                character
            )),
            ErrorImpl::InvalidOperatorSequence { sequence } => ErrorTip::Suggestion(format!(
                "`{}` is not an operator, did you forget a space between operators?",
                sequence
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.internal_error, &self.position) {
            (ErrorImpl::SourceUnavailable { .. }, _) | (_, None) => {
                write!(f, "{}", self.internal_error)
            }
            (_, Some(position)) => {
                write!(f, "Lexical error on line {}: {}", position.line, self.detail())
            }
        }
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
    #[error("Source file unavailable: {path} ({reason})")]
    SourceUnavailable { path: String, reason: String },
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("invalid operator sequence: {sequence:?}")]
    InvalidOperatorSequence { sequence: String },
}
