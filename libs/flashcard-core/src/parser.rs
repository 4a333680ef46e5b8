//! Delimited text format for flashcard decks.
//!
//! # Format
//! ```text
//! Paris % Capital of France
//! Tokyo % Capital of Japan
//! ```
//!
//! Each card sits on its own line. The first `%` separates the term from the
//! definition and whitespace around both is ignored. Lines without a `%` are
//! skipped.

use crate::types::Deck;

/// Character separating a term from its definition.
pub const SEPARATOR: char = '%';

/// Parse deck content into a [`Deck`].
///
/// Later lines win when a term appears more than once.
pub fn parse(content: &str) -> Deck {
    let mut deck = Deck::new();

    for line in content.lines() {
        if let LineType::Card { term, definition } = parse_line(line) {
            deck.insert(term, definition);
        }
    }

    deck
}

/// Render a deck in the delimited format, one `term % definition` line per card.
pub fn serialize(deck: &Deck) -> String {
    deck.iter()
        .map(|(term, definition)| format!("{term} {SEPARATOR} {definition}\n"))
        .collect()
}

enum LineType<'a> {
    Card { term: &'a str, definition: &'a str },
    Skip,
}

fn parse_line(line: &str) -> LineType<'_> {
    let Some((front, back)) = line.split_once(SEPARATOR) else {
        return LineType::Skip;
    };

    let term = front.trim();
    let definition = back.trim();

    if term.is_empty() || definition.is_empty() {
        return LineType::Skip;
    }

    LineType::Card { term, definition }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_single_card() {
        let deck = parse("Paris % Capital of France");
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.definition("Paris"), Some("Capital of France"));
    }

    #[test]
    fn parse_splits_at_first_separator() {
        let deck = parse("Discount % 20% off\n");
        assert_eq!(deck.definition("Discount"), Some("20% off"));
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let deck = parse("   hola\t%   hello  \r\n");
        assert_eq!(deck.definition("hola"), Some("hello"));
    }

    #[test]
    fn parse_skips_lines_without_separator() {
        let deck = parse("# Spanish verbs\n\ncomer % to eat\njust a note\n");
        assert_eq!(deck.len(), 1);
        assert!(deck.contains("comer"));
    }

    #[test]
    fn parse_skips_blank_sides() {
        let deck = parse(" % orphan definition\norphan term %\n%\n");
        assert!(deck.is_empty());
    }

    #[test]
    fn later_duplicate_overwrites() {
        let deck = parse("A % 1\nA % 2\n");
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.definition("A"), Some("2"));
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn serialize_uses_spaced_separator() {
        let deck = parse("Tokyo%Capital of Japan\nParis%Capital of France");
        assert_eq!(
            serialize(&deck),
            "Paris % Capital of France\nTokyo % Capital of Japan\n"
        );
    }

    #[test]
    fn serialized_deck_parses_back() {
        let deck = parse("uno % one\ndos % two\ntres % 3 % three");
        assert_eq!(parse(&serialize(&deck)), deck);
    }
}
