//! JSON file backend: the whole deck lives in one document on disk.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use directories::ProjectDirs;
use flash_core::model::Deck;

use crate::repository::{DeckRepository, Storage, StorageError};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "flashdeck";
const APP_NAME: &str = "FlashDeck";
const DECK_FILENAME: &str = "cards.json";

/// Per-user location of the saved deck.
///
/// - macOS: ~/Library/Application Support/com.flashdeck.FlashDeck/cards.json
/// - Windows: %APPDATA%/flashdeck/FlashDeck/data/cards.json
/// - Linux: ~/.local/share/flashdeck/cards.json
///
/// # Errors
///
/// Returns `StorageError::NoDataDir` when no home directory can be found.
pub fn default_deck_path() -> Result<PathBuf, StorageError> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.data_dir().join(DECK_FILENAME))
        .ok_or(StorageError::NoDataDir)
}

#[derive(Debug, Clone)]
pub struct JsonDeckRepository {
    path: PathBuf,
}

impl JsonDeckRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl DeckRepository for JsonDeckRepository {
    fn load(&self) -> Result<Deck, StorageError> {
        let bytes = fs::read(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                StorageError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;

        let deck: Deck =
            serde_json::from_slice(&bytes).map_err(|e| StorageError::Deserialize {
                path: self.path.clone(),
                source: e,
            })?;

        tracing::debug!(path = %self.path.display(), cards = deck.len(), "loaded deck");
        Ok(deck)
    }

    fn save(&self, deck: &Deck) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(deck).map_err(StorageError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let temp_path = self.temp_path();
        let mut file = File::create(&temp_path).map_err(|e| StorageError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(&bytes).map_err(|e| StorageError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;
        file.sync_all().map_err(|e| StorageError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|e| StorageError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), cards = deck.len(), "saved deck");
        Ok(())
    }
}

impl Storage {
    /// Build a `Storage` backed by a JSON file at `path`.
    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        let decks: Arc<dyn DeckRepository> = Arc::new(JsonDeckRepository::new(path));
        Self { decks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flash_core::model::Card;
    use tempfile::tempdir;

    #[test]
    fn default_path_ends_with_deck_file() {
        if let Ok(path) = default_deck_path() {
            assert!(path.ends_with(DECK_FILENAME));
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let repo = JsonDeckRepository::new(dir.path().join("cards.json"));
        let err = repo.load().unwrap_err();
        assert!(err.is_not_found(), "unexpected error: {err:?}");
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let repo = JsonDeckRepository::new(dir.path().join("cards.json"));
        let deck = Deck::from_cards(vec![Card::new("Q", "A")]).unwrap();
        repo.save(&deck).unwrap();

        assert!(repo.path().exists());
        assert!(!repo.temp_path().exists());
    }
}
