//! Deck contents used across tests.

/// Two world capitals.
pub const CAPITALS: &str = "Paris % Capital of France\nTokyo % Capital of Japan\n";

/// Generate deck content with `num_cards` numbered cards.
pub fn numbered_deck(num_cards: usize) -> String {
    (0..num_cards)
        .map(|i| format!("Term {} % Definition {}\n", i + 1, i + 1))
        .collect()
}

/// Join input lines into what a user would type.
pub fn typed(lines: &[&str]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}
