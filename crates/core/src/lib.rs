#![forbid(unsafe_code)]

pub mod model;

pub use model::{Card, CardDraft, CardError, CardId, Deck, DeckError, SessionPhase, SessionState};
