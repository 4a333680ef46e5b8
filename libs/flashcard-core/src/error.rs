//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors that can occur while loading, listing or saving decks.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("the file '{name}' could not be found")]
    NotFound { name: String },

    #[error("deck '{name}' contains no flashcards")]
    Empty { name: String },

    #[error("there is already a deck with the name {name}")]
    Duplicate { name: String },

    #[error("invalid deck name '{name}'")]
    InvalidName { name: String },

    #[error("deck name '{name}' must end in .{extension}")]
    WrongExtension { name: String, extension: String },

    #[error("could not list decks: {source}")]
    List {
        #[source]
        source: std::io::Error,
    },

    #[error("could not write deck '{name}': {source}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised when starting a quiz round.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("cannot quiz an empty deck")]
    EmptyDeck,

    #[error("requested {requested} cards but the deck holds {available}")]
    InvalidCount { requested: usize, available: usize },
}

/// Errors raised when adding an entry to a deck under construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("the front of a flashcard cannot be empty")]
    EmptyTerm,

    #[error("the back of a flashcard cannot be empty")]
    EmptyDefinition,

    #[error("the front of a flashcard cannot contain '{separator}'")]
    SeparatorInTerm { separator: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_echoes_name() {
        let error = DeckError::NotFound {
            name: "capitals.txt".to_string(),
        };
        assert_eq!(error.to_string(), "the file 'capitals.txt' could not be found");
    }

    #[test]
    fn duplicate_display() {
        let error = DeckError::Duplicate {
            name: "spanish.txt".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "there is already a deck with the name spanish.txt"
        );
    }

    #[test]
    fn write_error_keeps_cause() {
        let error = DeckError::Write {
            name: "a.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert_eq!(error.to_string(), "could not write deck 'a.txt': read-only");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn wrong_extension_display() {
        let error = DeckError::WrongExtension {
            name: "notes.md".to_string(),
            extension: "txt".to_string(),
        };
        assert_eq!(error.to_string(), "deck name 'notes.md' must end in .txt");
    }

    #[test]
    fn invalid_count_display() {
        let error = QuizError::InvalidCount {
            requested: 5,
            available: 2,
        };
        assert_eq!(error.to_string(), "requested 5 cards but the deck holds 2");
    }
}
