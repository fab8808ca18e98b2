use crate::model::{CardId, Deck};

/// Length of a study session when nothing else is configured.
pub const DEFAULT_SESSION_SECS: u32 = 100;

/// Coarse lifecycle of a study session, derived from `SessionState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No session has been started yet.
    Idle,
    /// Timer counts down and cards can be answered.
    Running,
    /// Suspended by the host (window hidden, app backgrounded).
    Paused,
    /// Every card has been answered correctly.
    Finished,
}

/// Timer, active flag and deck for a single study session.
///
/// Transitions take the state by value and return the next state, so every
/// event is applied atomically and the previous state can be kept for
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    time_remaining: u32,
    is_active: bool,
    deck: Deck,
    started: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::idle()
    }
}

impl SessionState {
    /// State before the first reset: full timer, inactive, no cards.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            time_remaining: DEFAULT_SESSION_SECS,
            is_active: false,
            deck: Deck::new(),
            started: false,
        }
    }

    /// Start a fresh session with the default length.
    #[must_use]
    pub fn reset(deck: Deck) -> Self {
        Self::reset_with_duration(deck, DEFAULT_SESSION_SECS)
    }

    /// Start a fresh session. The session is active only when there is
    /// something to study.
    #[must_use]
    pub fn reset_with_duration(deck: Deck, session_secs: u32) -> Self {
        Self {
            time_remaining: session_secs,
            is_active: !deck.is_empty(),
            deck,
            started: true,
        }
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The card on top of the stack, if any.
    #[must_use]
    pub fn current_card(&self) -> Option<&crate::model::Card> {
        self.deck.front()
    }

    /// Whether the UI should let the learner answer cards.
    ///
    /// Timer expiry is a soft stop: the deck is kept but answers are refused.
    #[must_use]
    pub fn accepts_answers(&self) -> bool {
        self.time_remaining > 0 && !self.deck.is_empty()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if !self.started {
            SessionPhase::Idle
        } else if self.deck.is_empty() {
            SessionPhase::Finished
        } else if self.is_active {
            SessionPhase::Running
        } else {
            SessionPhase::Paused
        }
    }

    /// One second elapsed. Inactive sessions ignore the tick; the timer
    /// stops at zero.
    #[must_use]
    pub fn tick(mut self) -> Self {
        if self.is_active && self.time_remaining > 0 {
            self.time_remaining -= 1;
        }
        self
    }

    /// Apply the learner's verdict on a card.
    ///
    /// A correct card leaves the deck. An incorrect card goes back to the
    /// front under a new id. Unknown ids leave the state untouched, so a
    /// repeated gesture for a card that is already gone is harmless.
    #[must_use]
    pub fn resolve_card(mut self, card_id: CardId, correct: bool) -> Self {
        let found = if correct {
            self.deck.remove(card_id).is_some()
        } else {
            self.deck.recycle(card_id).is_some()
        };
        if found && self.deck.is_empty() {
            self.is_active = false;
        }
        self
    }

    /// Host lifecycle override. An empty deck never becomes active again.
    #[must_use]
    pub fn set_active(mut self, active: bool) -> Self {
        self.is_active = active && !self.deck.is_empty();
        self
    }
}
