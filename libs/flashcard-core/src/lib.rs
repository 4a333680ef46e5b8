//! Core flashcard library used by the terminal quiz.
//!
//! Provides:
//! - Parser and serializer for `term % definition` deck files
//! - Filesystem deck store (listing, loading, creating decks)
//! - Case-insensitive answer matching
//! - Quiz round state machine with re-queuing of missed cards
//! - Shared types (Deck, Side, QuizReport)

pub mod builder;
pub mod error;
pub mod matching;
pub mod parser;
pub mod quiz;
pub mod store;
pub mod types;

pub use builder::DeckBuilder;
pub use error::{BuildError, DeckError, QuizError, Result};
pub use matching::{answers_match, is_quit, QUIT_KEYWORD};
pub use parser::{parse, serialize, SEPARATOR};
pub use quiz::{Outcome, Prompt, QuizRound};
pub use store::{DeckStore, DEFAULT_EXTENSION};
pub use types::{Deck, QuizReport, Side};
