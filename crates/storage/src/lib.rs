#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{JsonDeckRepository, default_deck_path};
pub use repository::{DeckRepository, InMemoryRepository, Storage, StorageError};
