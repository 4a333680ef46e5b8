//! Error handling for the terminal front end.

use flashcard_core::{DeckError, QuizError};
use thiserror::Error;

/// Errors raised while driving the interactive session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Rejected answer to a prompt; the message is shown before re-prompting.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct InvalidInput(pub String);

impl InvalidInput {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_error_is_transparent() {
        let error = CliError::from(DeckError::NotFound {
            name: "x.txt".to_string(),
        });
        assert_eq!(error.to_string(), "the file 'x.txt' could not be found");
    }

    #[test]
    fn test_io_error_display() {
        let error = CliError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert_eq!(error.to_string(), "terminal I/O error: pipe closed");
    }
}
