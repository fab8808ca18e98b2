use std::sync::Arc;

use flash_core::model::{CardId, DEFAULT_SESSION_SECS, Deck, SessionState};
use storage::{DeckRepository, StorageError};

/// Drives a study session: loads the deck, starts sessions and applies
/// timer, answer and lifecycle events.
///
/// Holds no reference to any rendering layer. Front-ends keep the returned
/// `SessionState` and feed it back in with the next event.
#[derive(Clone)]
pub struct DeckStore {
    decks: Arc<dyn DeckRepository>,
    session_secs: u32,
}

impl DeckStore {
    #[must_use]
    pub fn new(decks: Arc<dyn DeckRepository>) -> Self {
        Self {
            decks,
            session_secs: DEFAULT_SESSION_SECS,
        }
    }

    #[must_use]
    pub fn with_session_secs(mut self, session_secs: u32) -> Self {
        self.session_secs = session_secs;
        self
    }

    #[must_use]
    pub fn session_secs(&self) -> u32 {
        self.session_secs
    }

    /// Load the saved deck, surfacing any storage failure.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the deck is missing, unreadable or malformed.
    pub fn try_load_deck(&self) -> Result<Deck, StorageError> {
        self.decks.load()
    }

    /// Load the saved deck for a new session. Failures yield an empty deck.
    #[must_use]
    pub fn load_initial_deck(&self) -> Deck {
        match self.decks.load() {
            Ok(deck) => deck,
            Err(err) if err.is_not_found() => {
                tracing::info!(error = %err, "no saved deck, starting empty");
                Deck::new()
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load deck, starting empty");
                Deck::new()
            }
        }
    }

    /// Begin a fresh session on `deck` with a full timer.
    #[must_use]
    pub fn reset_session(&self, deck: Deck) -> SessionState {
        tracing::debug!(cards = deck.len(), secs = self.session_secs, "session reset");
        SessionState::reset_with_duration(deck, self.session_secs)
    }

    /// Load the saved deck and start a session on it.
    #[must_use]
    pub fn start_session(&self) -> SessionState {
        self.reset_session(self.load_initial_deck())
    }

    #[must_use]
    pub fn tick(&self, state: SessionState) -> SessionState {
        state.tick()
    }

    #[must_use]
    pub fn resolve_card(&self, state: SessionState, card_id: CardId, correct: bool) -> SessionState {
        if !state.deck().contains(card_id) {
            tracing::debug!(%card_id, correct, "ignoring answer for card not in deck");
            return state;
        }
        let next = state.resolve_card(card_id, correct);
        tracing::debug!(
            %card_id,
            correct,
            remaining = next.deck().len(),
            active = next.is_active(),
            "card resolved"
        );
        next
    }

    #[must_use]
    pub fn set_active(&self, state: SessionState, active: bool) -> SessionState {
        let next = state.set_active(active);
        if active && !next.is_active() {
            tracing::debug!("resume ignored, deck is empty");
        }
        next
    }
}
