use std::sync::Arc;

use flash_core::model::{CardId, SessionPhase, SessionState};
use services::DeckStore;

use super::card_vm::{StackCardVm, map_stack_cards};

/// View model for the study screen.
///
/// Owns the current `SessionState` and whether the top card shows its
/// answer. Every event goes through `DeckStore` and replaces the state.
pub struct StudyVm {
    store: Arc<DeckStore>,
    state: SessionState,
    revealed: bool,
}

impl StudyVm {
    /// Load the saved deck and start a session on it.
    #[must_use]
    pub fn start(store: Arc<DeckStore>) -> Self {
        let state = store.start_session();
        Self {
            store,
            state,
            revealed: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        format!("Time: {}", self.state.time_remaining())
    }

    #[must_use]
    pub fn accepts_answers(&self) -> bool {
        self.state.accepts_answers()
    }

    #[must_use]
    pub fn show_start_again(&self) -> bool {
        self.state.deck().is_empty()
    }

    #[must_use]
    pub fn stack(&self) -> Vec<StackCardVm> {
        map_stack_cards(self.state.deck().cards(), self.revealed)
    }

    #[must_use]
    pub fn top_card_id(&self) -> Option<CardId> {
        self.state.current_card().map(flash_core::model::Card::id)
    }

    pub fn tick(&mut self) {
        self.apply(|store, state| store.tick(state));
    }

    pub fn set_active(&mut self, active: bool) {
        self.apply(|store, state| store.set_active(state, active));
    }

    pub fn toggle_reveal(&mut self) {
        if self.accepts_answers() {
            self.revealed = !self.revealed;
        }
    }

    /// Answer the top card. Ignored once the timer has run out.
    pub fn answer(&mut self, correct: bool) {
        if let Some(card_id) = self.top_card_id() {
            self.answer_card(card_id, correct);
        }
    }

    pub fn answer_card(&mut self, card_id: CardId, correct: bool) {
        if !self.accepts_answers() {
            return;
        }
        self.apply(|store, state| store.resolve_card(state, card_id, correct));
        self.revealed = false;
    }

    /// "Start Again": reload the saved deck with a full timer.
    pub fn restart(&mut self) {
        self.state = self.store.start_session();
        self.revealed = false;
    }

    fn apply(&mut self, event: impl FnOnce(&DeckStore, SessionState) -> SessionState) {
        let state = std::mem::take(&mut self.state);
        self.state = event(&self.store, state);
    }
}
