use std::sync::Arc;

use storage::{Storage, default_deck_path};

use crate::config::ServicesConfig;
use crate::deck_store::DeckStore;
use crate::editor_service::EditorService;
use crate::error::AppServicesError;

/// Assembles app-facing services over a single deck repository.
#[derive(Clone)]
pub struct AppServices {
    deck_store: Arc<DeckStore>,
    editor: Arc<EditorService>,
}

impl AppServices {
    /// Build services backed by the JSON deck file named in `config`, or the
    /// per-user default location.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if no deck location can be determined.
    pub fn from_config(config: &ServicesConfig) -> Result<Self, AppServicesError> {
        let path = match &config.deck_path {
            Some(path) => path.clone(),
            None => default_deck_path()?,
        };
        tracing::info!(path = %path.display(), "using deck file");
        Ok(Self::new(Storage::json_file(path), config))
    }

    #[must_use]
    pub fn new(storage: Storage, config: &ServicesConfig) -> Self {
        let deck_store = Arc::new(
            DeckStore::new(Arc::clone(&storage.decks)).with_session_secs(config.session_secs),
        );
        let editor = Arc::new(EditorService::new(Arc::clone(&storage.decks)));
        Self { deck_store, editor }
    }

    #[must_use]
    pub fn deck_store(&self) -> Arc<DeckStore> {
        Arc::clone(&self.deck_store)
    }

    #[must_use]
    pub fn editor(&self) -> Arc<EditorService> {
        Arc::clone(&self.editor)
    }
}
