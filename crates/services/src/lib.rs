#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod deck_store;
pub mod editor_service;
pub mod error;

pub use app_services::AppServices;
pub use config::ServicesConfig;
pub use deck_store::DeckStore;
pub use editor_service::EditorService;
pub use error::{AppServicesError, EditorError};
