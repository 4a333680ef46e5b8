//! Terminal driver for a quiz round.

use crate::console::Console;
use crate::error::{CliError, InvalidInput, Result};
use flashcard_core::{Deck, Outcome, QuizReport, QuizRound};
use rand::Rng;
use std::io::{BufRead, Write};

/// Ask how many cards to study, then run a round over `deck`.
///
/// End of input during the round counts as quitting.
pub fn run_quiz<R, W, G>(
    console: &mut Console<R, W>,
    deck: &Deck,
    rng: &mut G,
) -> Result<QuizReport>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    console.say(
        "Flashcard Quiz: If given the term, write the correct definition, \
         and if given the definition, write the correct term.",
    )?;
    console.say("Type 'quit' to stop at any time.\n")?;

    let available = deck.len();
    let count = console.prompt_until(
        &format!("Enter the number of cards to be quizzed on. Total number is {available}: "),
        |input| parse_count(input, available),
    )?;

    let mut round = QuizRound::new(deck, count, rng)?;

    while let Some(prompt) = round.next_prompt(rng) {
        console.say(format!("{}: {}", prompt.side.label(), prompt.shown))?;

        let input = match console.prompt("Your answer: ") {
            Ok(line) => line,
            Err(CliError::InputClosed) => {
                round.quit();
                break;
            }
            Err(e) => return Err(e),
        };

        match round.answer(prompt, &input) {
            Outcome::Correct => console.say("Correct!\n")?,
            Outcome::Incorrect { expected } => {
                console.say(format!("Incorrect. The correct answer was: {expected}\n"))?
            }
            Outcome::Quit => break,
        }
    }

    let report = round.report();
    tracing::info!(
        correct = report.correct,
        incorrect = report.incorrect,
        quit = report.quit,
        "quiz round finished"
    );

    console.say(format!("Number answered correctly: {}", report.correct))?;
    console.say(format!("Number answered incorrectly: {}\n", report.incorrect))?;
    Ok(report)
}

/// Validate the requested number of cards against the deck size.
pub fn parse_count(input: &str, available: usize) -> std::result::Result<usize, InvalidInput> {
    let requested: i64 = input
        .parse()
        .map_err(|_| InvalidInput::new("Invalid input. Please enter a valid integer."))?;

    match usize::try_from(requested) {
        Ok(n) if n > 0 && n <= available => Ok(n),
        _ => Err(InvalidInput::new(format!(
            "Please enter a number between 1 and {available}."
        ))),
    }
}
