//! Incremental construction of a new deck.

use crate::error::BuildError;
use crate::parser::SEPARATOR;
use crate::types::Deck;

/// Collects entries for a deck that is being created.
#[derive(Debug, Default)]
pub struct DeckBuilder {
    deck: Deck,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card. Both sides are trimmed; an existing term is overwritten.
    ///
    /// The term may not contain the separator, since the saved line would
    /// split there when read back.
    pub fn add(&mut self, term: &str, definition: &str) -> Result<(), BuildError> {
        let term = term.trim();
        let definition = definition.trim();

        if term.is_empty() {
            return Err(BuildError::EmptyTerm);
        }
        if term.contains(SEPARATOR) {
            return Err(BuildError::SeparatorInTerm {
                separator: SEPARATOR,
            });
        }
        if definition.is_empty() {
            return Err(BuildError::EmptyDefinition);
        }

        self.deck.insert(term, definition);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn build(self) -> Deck {
        self.deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    #[test]
    fn add_trims_sides() {
        let mut builder = DeckBuilder::new();
        builder.add("  hola ", " hello\n").unwrap();
        let deck = builder.build();
        assert_eq!(deck.definition("hola"), Some("hello"));
    }

    #[test]
    fn add_rejects_blank_sides() {
        let mut builder = DeckBuilder::new();
        assert_eq!(builder.add("  ", "x"), Err(BuildError::EmptyTerm));
        assert_eq!(builder.add("x", ""), Err(BuildError::EmptyDefinition));
        assert!(builder.is_empty());
    }

    #[test]
    fn add_rejects_separator_in_term() {
        let mut builder = DeckBuilder::new();
        assert_eq!(
            builder.add("50%", "half"),
            Err(BuildError::SeparatorInTerm { separator: '%' })
        );
    }

    #[test]
    fn separator_allowed_in_definition() {
        let mut builder = DeckBuilder::new();
        builder.add("half", "50%").unwrap();
        let deck = builder.build();
        assert_eq!(parser::parse(&parser::serialize(&deck)), deck);
    }

    #[test]
    fn duplicate_term_overwrites() {
        let mut builder = DeckBuilder::new();
        builder.add("A", "1").unwrap();
        builder.add("A", "2").unwrap();
        assert_eq!(builder.len(), 1);
        assert_eq!(builder.build().definition("A"), Some("2"));
    }
}
