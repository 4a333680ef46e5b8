//! Terminal front end for the flashcard quiz.

pub mod app;
pub mod config;
pub mod console;
pub mod create;
pub mod error;
pub mod quiz;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::{Cli, Config};
use crate::console::Console;

pub use crate::error::{CliError, Result};

/// Parse configuration, set up logging and run the interactive menu.
pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(Cli::parse());
    tracing::debug!(?config, "starting flashcards");

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout());
    let store = config.store();
    tracing::debug!(
        root = %store.root().display(),
        extension = store.extension(),
        "using deck directory"
    );
    let mut app = App::new(console, store, config.rng());
    app.run()?;

    Ok(())
}
