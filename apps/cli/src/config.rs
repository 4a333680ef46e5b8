//! Command-line and environment configuration.

use clap::Parser;
use flashcard_core::{DeckStore, DEFAULT_EXTENSION};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "flashcards")]
#[command(about = "Terminal flashcard quiz", long_about = None)]
pub struct Cli {
    /// Directory holding deck files
    #[arg(long, env = "FLASHCARDS_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Extension of deck files
    #[arg(long, env = "FLASHCARDS_EXTENSION", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Seed for reproducible card order and orientation
    #[arg(long, env = "FLASHCARDS_SEED")]
    pub seed: Option<u64>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub deck_dir: PathBuf,
    pub extension: String,
    pub seed: Option<u64>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            deck_dir: cli.dir,
            extension: cli.extension,
            seed: cli.seed,
        }
    }
}

impl Config {
    pub fn store(&self) -> DeckStore {
        DeckStore::with_extension(&self.deck_dir, &self.extension)
    }

    /// Seeded generator when a seed is configured, entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
