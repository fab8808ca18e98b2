use std::path::PathBuf;

use flash_core::model::DEFAULT_SESSION_SECS;

/// Settings the composition root hands to the services layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicesConfig {
    /// Where the deck is persisted. `None` means the per-user default.
    pub deck_path: Option<PathBuf>,
    /// Countdown length of every study session, in seconds.
    pub session_secs: u32,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            deck_path: None,
            session_secs: DEFAULT_SESSION_SECS,
        }
    }
}

impl ServicesConfig {
    #[must_use]
    pub fn with_deck_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.deck_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_session_secs(mut self, session_secs: u32) -> Self {
        self.session_secs = session_secs;
        self
    }
}
