//! Answer matching for typed answers.

/// Keyword that ends a quiz round when typed as an answer.
pub const QUIT_KEYWORD: &str = "quit";

/// Whether the typed answer matches the expected one, ignoring case and
/// surrounding whitespace.
pub fn answers_match(typed: &str, expected: &str) -> bool {
    typed.trim().to_lowercase() == expected.trim().to_lowercase()
}

/// Whether the input is the quit keyword, in any case.
pub fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(QUIT_KEYWORD)
}
