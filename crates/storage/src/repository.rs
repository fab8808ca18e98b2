use flash_core::model::Deck;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("no saved deck at {path}")]
    NotFound { path: PathBuf },

    #[error("failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("deck file {path} is not a valid card list")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize deck")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to move {temp_path} into place at {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine a per-user data directory")]
    NoDataDir,

    #[error("connection error: {0}")]
    Connection(String),
}

impl StorageError {
    /// True when nothing has been saved yet, as opposed to a broken save.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

/// Repository contract for the persisted card list.
///
/// `save` always replaces the whole list; there is no append or merge.
pub trait DeckRepository: Send + Sync {
    /// Load the saved deck.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` when nothing has been saved, or
    /// another variant when the data cannot be read or parsed.
    fn load(&self) -> Result<Deck, StorageError>;

    /// Persist the deck, overwriting whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the deck cannot be written.
    fn save(&self, deck: &Deck) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    deck: Arc<Mutex<Option<Deck>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that already holds a saved deck.
    #[must_use]
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck: Arc::new(Mutex::new(Some(deck))),
        }
    }
}

impl DeckRepository for InMemoryRepository {
    fn load(&self) -> Result<Deck, StorageError> {
        let guard = self
            .deck
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.clone().ok_or_else(|| StorageError::NotFound {
            path: PathBuf::from(":memory:"),
        })
    }

    fn save(&self, deck: &Deck) -> Result<(), StorageError> {
        let mut guard = self
            .deck
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(deck.clone());
        Ok(())
    }
}

/// Holds the deck repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub decks: Arc<dyn DeckRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let decks: Arc<dyn DeckRepository> = Arc::new(InMemoryRepository::new());
        Self { decks }
    }

    #[must_use]
    pub fn from_repository(decks: Arc<dyn DeckRepository>) -> Self {
        Self { decks }
    }
}
