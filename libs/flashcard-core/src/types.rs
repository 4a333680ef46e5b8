//! Core types for the flashcard quiz.

use crate::error::DeckError;
use std::collections::BTreeMap;

/// A collection of cards keyed by term.
///
/// Terms are unique; inserting an existing term replaces its definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: BTreeMap<String, String>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a card, returning the definition it replaced if the term was present.
    pub fn insert(
        &mut self,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Option<String> {
        self.cards.insert(term.into(), definition.into())
    }

    pub fn definition(&self, term: &str) -> Option<&str> {
        self.cards.get(term).map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.cards.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.cards.keys().map(String::as_str)
    }

    /// Iterate over `(term, definition)` pairs in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cards.iter().map(|(t, d)| (t.as_str(), d.as_str()))
    }

    /// Fail with [`DeckError::Empty`] when the deck has no cards.
    pub fn ensure_not_empty(&self, name: &str) -> Result<(), DeckError> {
        if self.is_empty() {
            return Err(DeckError::Empty {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

/// Which face of a card is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Show the term, expect the definition.
    Term,
    /// Show the definition, expect the term.
    Definition,
}

impl Side {
    /// Label used when presenting this side.
    pub fn label(self) -> &'static str {
        match self {
            Self::Term => "Term",
            Self::Definition => "Definition",
        }
    }
}

/// Final tallies of a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizReport {
    pub correct: usize,
    pub incorrect: usize,
    pub resolved: usize,
    pub target: usize,
    pub quit: bool,
}
