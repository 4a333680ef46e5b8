//! Interactive creation of a new deck.

use crate::app::show_decks;
use crate::console::Console;
use crate::error::{InvalidInput, Result};
use flashcard_core::{is_quit, Deck, DeckBuilder, DeckStore};
use std::io::{BufRead, Write};

const FRONT_PROMPT: &str = "Enter the front of the flashcard (or type 'quit' to stop): ";

/// A deck entered by the user and the name it was meant to be saved under.
#[derive(Debug)]
pub struct CreatedDeck {
    pub name: String,
    pub deck: Deck,
    pub saved: bool,
}

/// Ask for a fresh deck name, collect cards and save them.
///
/// Save failures are reported to the user; the entered deck is returned
/// either way.
pub fn create_deck<R, W>(
    console: &mut Console<R, W>,
    store: &DeckStore,
) -> Result<CreatedDeck>
where
    R: BufRead,
    W: Write,
{
    let existing = show_decks(console, store)?;

    let name = console.prompt_until(
        "Enter the name for the new deck file (e.g., 'new_deck.txt'): ",
        |input| {
            let name = store
                .deck_name(input)
                .map_err(|e| InvalidInput::new(format!("Error. {e}")))?;
            if existing.contains(&name) {
                return Err(InvalidInput::new(format!(
                    "Error. There is already a deck with the name {name}"
                )));
            }
            Ok(name)
        },
    )?;

    let deck = collect_cards(console)?;
    if deck.is_empty() {
        console.say("No flashcards entered, nothing to save.")?;
        return Ok(CreatedDeck {
            name,
            deck,
            saved: false,
        });
    }

    let saved = match store.create(&name, &deck) {
        Ok(path) => {
            tracing::info!(path = %path.display(), cards = deck.len(), "created deck");
            console.say(format!("Deck saved to {name}"))?;
            true
        }
        Err(e) => {
            tracing::warn!(name = %name, error = %e, "failed to save deck");
            console.say(format!("Error saving the deck: {e}"))?;
            false
        }
    };

    Ok(CreatedDeck { name, deck, saved })
}

/// Read cards until the user types `quit` or declines to add another.
///
/// End of input finishes the deck with what was entered so far.
fn collect_cards<R, W>(console: &mut Console<R, W>) -> Result<Deck>
where
    R: BufRead,
    W: Write,
{
    let mut builder = DeckBuilder::new();

    loop {
        let Some(front) = console.try_prompt(FRONT_PROMPT)? else {
            break;
        };
        if is_quit(&front) {
            break;
        }

        let Some(back) = console.try_prompt("Enter the back of the flashcard: ")? else {
            break;
        };
        if let Err(e) = builder.add(&front, &back) {
            console.say(format!("Error. {e}. Please enter this flashcard again."))?;
            continue;
        }

        let more = console.try_prompt("Would you like to add another flashcard? (yes/no): ")?;
        if !matches!(more, Some(answer) if answer.trim().eq_ignore_ascii_case("yes")) {
            break;
        }
    }

    Ok(builder.build())
}
