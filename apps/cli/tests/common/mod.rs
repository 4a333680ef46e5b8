//! Common test utilities for driving full menu sessions.
//!
//! Sessions run against a scratch deck directory with in-memory input and
//! output, and a seeded RNG so quiz rounds are reproducible.

pub mod fixtures;

use std::fs;
use std::io::Cursor;

use flashcard_core::{Deck, DeckStore, Prompt, QuizRound};
use flashcards_cli::app::App;
use flashcards_cli::console::Console;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

/// Scratch deck directory plus helpers to run sessions against it.
pub struct TestContext {
    pub dir: TempDir,
    pub store: DeckStore,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let store = DeckStore::new(dir.path());
        Self { dir, store }
    }

    /// Create a context with the given `(file name, content)` decks on disk.
    pub fn with_decks(decks: &[(&str, &str)]) -> Self {
        let ctx = Self::new();
        for (name, content) in decks {
            fs::write(ctx.dir.path().join(name), content).expect("write deck");
        }
        ctx
    }

    /// Run a whole session on `input` and return everything printed.
    pub fn run(&self, input: &str, seed: u64) -> String {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut app = App::new(console, self.store.clone(), StdRng::seed_from_u64(seed));
        app.run().expect("session should end cleanly");
        String::from_utf8(app.into_console().into_output()).expect("utf-8 output")
    }

    pub fn read_deck(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("read deck")
    }
}

/// Produce the answers a user would type for a round over `deck`.
///
/// Replays the round with the same seed the session uses, so it must be
/// the first use of the session RNG. `answer` picks the reply for each
/// prompt; the replay scores it exactly like the session will.
pub fn scripted_answers(
    deck: &Deck,
    count: usize,
    seed: u64,
    mut answer: impl FnMut(&Prompt<'_>) -> String,
) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut round = QuizRound::new(deck, count, &mut rng).expect("valid round");
    let mut script = Vec::new();

    while let Some(prompt) = round.next_prompt(&mut rng) {
        let reply = answer(&prompt);
        round.answer(prompt, &reply);
        script.push(reply);
    }

    script
}
