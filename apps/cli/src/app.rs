//! Top-level menu.

use crate::console::Console;
use crate::create::create_deck;
use crate::error::{CliError, InvalidInput, Result};
use crate::quiz::run_quiz;
use flashcard_core::{Deck, DeckStore};
use rand::Rng;
use std::io::{BufRead, Write};

const MENU: &str = "Type the number of the option you would like to choose. \
To quit the program, type '0'.\n[1] Quiz Deck\n[2] Change Deck\n[3] Create Deck\n";

/// Menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Quit,
    Quiz,
    Select,
    Create,
}

impl MenuChoice {
    pub fn parse(input: &str) -> std::result::Result<Self, InvalidInput> {
        match input.trim().parse::<u8>() {
            Ok(0) => Ok(Self::Quit),
            Ok(1) => Ok(Self::Quiz),
            Ok(2) => Ok(Self::Select),
            Ok(3) => Ok(Self::Create),
            _ => Err(InvalidInput::new("Please enter a viable option.")),
        }
    }
}

/// Interactive session over a deck store.
pub struct App<R, W, G> {
    console: Console<R, W>,
    store: DeckStore,
    rng: G,
}

impl<R, W, G> App<R, W, G>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    pub fn new(console: Console<R, W>, store: DeckStore, rng: G) -> Self {
        Self { console, store, rng }
    }

    /// Run the menu until the user picks `0` or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.console.say("Welcome to this flashcard program")?;

        match self.menu_loop() {
            Err(CliError::InputClosed) => {
                tracing::debug!("input closed, leaving menu");
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            self.console.say(MENU)?;
            let choice = self.console.prompt_until("", MenuChoice::parse)?;
            tracing::debug!(?choice, "menu choice");

            let result = match choice {
                MenuChoice::Quit => return Ok(()),
                MenuChoice::Quiz => self.quiz_deck(),
                MenuChoice::Select => self.select_deck().map(|_| ()),
                MenuChoice::Create => create_deck(&mut self.console, &self.store).map(|_| ()),
            };

            match result {
                Err(CliError::Deck(e)) => {
                    tracing::warn!(error = %e, "deck action failed");
                    self.console.say(format!("Error: {e}"))?;
                }
                Err(CliError::Quiz(e)) => {
                    tracing::warn!(error = %e, "quiz could not start");
                    self.console.say(format!("Error: {e}"))?;
                }
                other => other?,
            }
        }
    }

    fn quiz_deck(&mut self) -> Result<()> {
        let Some((name, deck)) = self.select_deck()? else {
            return Ok(());
        };

        if let Err(e) = deck.ensure_not_empty(&name) {
            tracing::warn!(error = %e, "refusing to quiz empty deck");
            self.console
                .say("No flashcards found. Make sure the file is formatted correctly.")?;
            return Ok(());
        }

        run_quiz(&mut self.console, &deck, &mut self.rng)?;
        Ok(())
    }

    /// List decks, ask for one and load it.
    ///
    /// A deck that cannot be loaded is reported and yields `None`.
    fn select_deck(&mut self) -> Result<Option<(String, Deck)>> {
        show_decks(&mut self.console, &self.store)?;
        let name = self.console.prompt("Enter the flashcard file name: ")?;
        let name = name.trim();

        match self.store.load(name) {
            Ok(deck) => {
                self.console
                    .say(format!("Loaded {} flashcards from {name}.", deck.len()))?;
                Ok(Some((name.to_string(), deck)))
            }
            Err(e) => {
                tracing::warn!(name, error = %e, "failed to load deck");
                self.console
                    .say(format!("Error: {e}. Please check the file path."))?;
                Ok(None)
            }
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

/// Print the decks available in `store` and return their names.
pub(crate) fn show_decks<R, W>(
    console: &mut Console<R, W>,
    store: &DeckStore,
) -> Result<Vec<String>>
where
    R: BufRead,
    W: Write,
{
    let decks = store.list_available()?;

    if decks.is_empty() {
        console.say("No flashcard decks found.")?;
        return Ok(decks);
    }

    console.say("Available flashcard decks:")?;
    for (idx, deck) in decks.iter().enumerate() {
        console.say(format!("{}. {deck}", idx + 1))?;
    }
    Ok(decks)
}
