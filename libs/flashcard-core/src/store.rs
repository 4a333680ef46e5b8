//! Filesystem-backed deck storage.
//!
//! A store is a directory of deck files sharing one extension. Deck
//! identifiers are plain file names inside that directory.

use crate::error::{DeckError, Result};
use crate::parser;
use crate::types::Deck;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default extension of deck files.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Directory of deck files.
#[derive(Debug, Clone)]
pub struct DeckStore {
    root: PathBuf,
    extension: String,
}

impl DeckStore {
    /// Create a store over `root` using the default `.txt` extension.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_extension(root, DEFAULT_EXTENSION)
    }

    pub fn with_extension(root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            root: root.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// List deck identifiers in the store, sorted by name.
    ///
    /// A missing directory holds no decks.
    pub fn list_available(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(root = %self.root.display(), "deck directory does not exist");
                return Ok(Vec::new());
            }
            Err(source) => return Err(DeckError::List { source }),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| DeckError::List { source })?;
            let path = entry.path();

            if !path.is_file() || !self.has_deck_extension(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                names.push(name.to_string());
            }
        }

        names.sort();
        tracing::debug!(count = names.len(), "listed decks");
        Ok(names)
    }

    /// Whether a deck with this identifier is listed in the store.
    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.list_available()?.iter().any(|n| n == name))
    }

    /// Load and parse a deck by identifier.
    ///
    /// Any failure to read the source is reported as [`DeckError::NotFound`].
    pub fn load(&self, name: &str) -> Result<Deck> {
        let path = self.path_for(name)?;
        let content = fs::read_to_string(&path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to read deck");
            DeckError::NotFound {
                name: name.to_string(),
            }
        })?;

        let deck = parser::parse(&content);
        tracing::debug!(name, cards = deck.len(), "loaded deck");
        Ok(deck)
    }

    /// Turn user input into a deck identifier for this store.
    ///
    /// A name without an extension gets the store's one appended; a name with
    /// a different extension is rejected, since it would never be listed.
    pub fn deck_name(&self, input: &str) -> Result<String> {
        validate_name(input)?;

        let name = if Path::new(input).extension().is_none() {
            format!("{input}.{}", self.extension)
        } else {
            input.to_string()
        };

        if !self.has_deck_extension(Path::new(&name)) {
            return Err(DeckError::WrongExtension {
                name,
                extension: self.extension.clone(),
            });
        }
        Ok(name)
    }

    /// Persist a new deck under `name`.
    ///
    /// `name` must carry the store's extension. Never overwrites: an existing
    /// deck yields [`DeckError::Duplicate`].
    pub fn create(&self, name: &str, deck: &Deck) -> Result<PathBuf> {
        validate_name(name)?;
        if !self.has_deck_extension(Path::new(name)) {
            return Err(DeckError::WrongExtension {
                name: name.to_string(),
                extension: self.extension.clone(),
            });
        }
        if self.exists(name)? {
            return Err(DeckError::Duplicate {
                name: name.to_string(),
            });
        }

        let path = self.path_for(name)?;
        let write_err = |source: io::Error| DeckError::Write {
            name: name.to_string(),
            source,
        };

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| {
                if e.kind() == io::ErrorKind::AlreadyExists {
                    DeckError::Duplicate {
                        name: name.to_string(),
                    }
                } else {
                    write_err(e)
                }
            })?;

        file.write_all(parser::serialize(deck).as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)?;

        tracing::debug!(path = %path.display(), cards = deck.len(), "saved deck");
        Ok(path)
    }

    fn has_deck_extension(&self, path: &Path) -> bool {
        path.extension().map_or(false, |ext| ext == self.extension.as_str())
    }

    /// Validate `name` and resolve it inside the store root.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }
}

fn validate_name(name: &str) -> Result<()> {
    let invalid = name.trim().is_empty()
        || name != name.trim()
        || name.contains(['/', '\\'])
        || name == "."
        || name == "..";

    if invalid {
        return Err(DeckError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}
