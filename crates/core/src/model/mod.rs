mod card;
mod deck;
mod ids;
mod session;

pub use ids::{CardId, ParseIdError};

pub use card::{Card, CardDraft, CardError};
pub use deck::{Deck, DeckError};
pub use session::{DEFAULT_SESSION_SECS, SessionPhase, SessionState};
