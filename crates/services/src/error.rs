//! Shared error types for the services crate.

use thiserror::Error;

use flash_core::model::{CardError, DeckError};
use storage::StorageError;

/// Errors emitted by `EditorService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EditorError {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
