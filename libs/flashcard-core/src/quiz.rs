//! Quiz round state machine.
//!
//! A round samples `n` distinct terms from a deck and keeps asking until each
//! of them has been answered correctly, the queue runs dry or the user quits.
//! Missed cards go to the back of the queue and come back with a freshly
//! chosen side.
//!
//! ```
//! use flashcard_core::{parser, Outcome, QuizRound};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let deck = parser::parse("Paris % Capital of France\nTokyo % Capital of Japan");
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut round = QuizRound::new(&deck, 2, &mut rng).unwrap();
//!
//! while let Some(prompt) = round.next_prompt(&mut rng) {
//!     let answer = prompt.expected.to_uppercase();
//!     assert_eq!(round.answer(prompt, &answer), Outcome::Correct);
//! }
//! assert_eq!(round.report().correct, 2);
//! ```

use crate::error::QuizError;
use crate::matching::{answers_match, is_quit};
use crate::types::{Deck, QuizReport, Side};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// One presentation of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt<'d> {
    pub term: &'d str,
    pub side: Side,
    /// Text shown to the user.
    pub shown: &'d str,
    /// Text the user must type.
    pub expected: &'d str,
}

/// Result of answering a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect { expected: String },
    Quit,
}

/// State of a single quiz round over a borrowed deck.
#[derive(Debug)]
pub struct QuizRound<'d> {
    deck: &'d Deck,
    queue: VecDeque<&'d str>,
    target: usize,
    resolved: usize,
    correct: usize,
    incorrect: usize,
    quit: bool,
}

impl<'d> QuizRound<'d> {
    /// Start a round over `count` randomly chosen cards of `deck`.
    pub fn new<R: Rng + ?Sized>(
        deck: &'d Deck,
        count: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        if deck.is_empty() {
            return Err(QuizError::EmptyDeck);
        }
        if count == 0 || count > deck.len() {
            return Err(QuizError::InvalidCount {
                requested: count,
                available: deck.len(),
            });
        }

        let mut terms: Vec<&'d str> = deck.terms().collect();
        terms.shuffle(rng);
        terms.truncate(count);

        tracing::debug!(cards = count, deck_size = deck.len(), "starting quiz round");

        Ok(Self {
            deck,
            queue: terms.into(),
            target: count,
            resolved: 0,
            correct: 0,
            incorrect: 0,
            quit: false,
        })
    }

    /// Whether the round has ended.
    pub fn is_finished(&self) -> bool {
        self.quit || self.resolved >= self.target || self.queue.is_empty()
    }

    /// Take the next card off the queue and pick which side to show.
    ///
    /// Returns `None` once the round is finished. Every prompt handed out
    /// must be passed back to [`QuizRound::answer`].
    pub fn next_prompt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Prompt<'d>> {
        if self.is_finished() {
            return None;
        }

        let term = self.queue.pop_front()?;
        let definition = self.deck.definition(term)?;

        let prompt = if rng.gen_bool(0.5) {
            Prompt {
                term,
                side: Side::Term,
                shown: term,
                expected: definition,
            }
        } else {
            Prompt {
                term,
                side: Side::Definition,
                shown: definition,
                expected: term,
            }
        };
        Some(prompt)
    }

    /// Score the user's input for `prompt`.
    ///
    /// Typing the quit keyword ends the round without scoring.
    pub fn answer(&mut self, prompt: Prompt<'d>, input: &str) -> Outcome {
        if is_quit(input) {
            self.quit();
            return Outcome::Quit;
        }

        if answers_match(input, prompt.expected) {
            self.correct += 1;
            self.resolved += 1;
            Outcome::Correct
        } else {
            self.incorrect += 1;
            self.queue.push_back(prompt.term);
            Outcome::Incorrect {
                expected: prompt.expected.to_string(),
            }
        }
    }

    /// End the round early.
    pub fn quit(&mut self) {
        tracing::debug!(resolved = self.resolved, cards = self.target, "quiz round quit");
        self.quit = true;
    }

    /// Terms still waiting for a correct answer, front first.
    pub fn remaining(&self) -> impl Iterator<Item = &'d str> + '_ {
        self.queue.iter().copied()
    }

    pub fn report(&self) -> QuizReport {
        QuizReport {
            correct: self.correct,
            incorrect: self.incorrect,
            resolved: self.resolved,
            target: self.target,
            quit: self.quit,
        }
    }
}
