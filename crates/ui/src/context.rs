use std::sync::Arc;

use services::{DeckStore, EditorService};

/// Accessibility settings read from the host at launch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Swipe feedback must not rely on colour alone.
    pub differentiate_without_color: bool,
    /// A screen reader is running; cards expose one face at a time.
    pub voice_over: bool,
}

impl DisplayConfig {
    /// Explicit correct/wrong buttons replace swipe-only answering.
    #[must_use]
    pub fn show_answer_buttons(self) -> bool {
        self.differentiate_without_color || self.voice_over
    }
}

/// Whether the window is currently the one the user is looking at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScenePhase {
    #[default]
    Active,
    Inactive,
}

impl ScenePhase {
    #[must_use]
    pub fn from_focus(focused: bool) -> Self {
        if focused { Self::Active } else { Self::Inactive }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

pub trait UiApp: Send + Sync {
    fn deck_store(&self) -> Arc<DeckStore>;
    fn editor(&self) -> Arc<EditorService>;
    fn display(&self) -> DisplayConfig;
}

#[derive(Clone)]
pub struct AppContext {
    deck_store: Arc<DeckStore>,
    editor: Arc<EditorService>,
    display: DisplayConfig,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            deck_store: app.deck_store(),
            editor: app.editor(),
            display: app.display(),
        }
    }

    #[must_use]
    pub fn deck_store(&self) -> Arc<DeckStore> {
        Arc::clone(&self.deck_store)
    }

    #[must_use]
    pub fn editor(&self) -> Arc<EditorService> {
        Arc::clone(&self.editor)
    }

    #[must_use]
    pub fn display(&self) -> DisplayConfig {
        self.display
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
