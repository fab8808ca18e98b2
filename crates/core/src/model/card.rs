use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::CardId;

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

/// Unvalidated user input for a new card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub prompt: String,
    pub answer: String,
}

impl CardDraft {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// Trim both faces and turn the draft into a card with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `CardError::EmptyPrompt` or `CardError::EmptyAnswer` when a face
    /// is blank after trimming.
    pub fn validate(self) -> Result<Card, CardError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(CardError::EmptyPrompt);
        }
        let answer = self.answer.trim();
        if answer.is_empty() {
            return Err(CardError::EmptyAnswer);
        }
        Ok(Card::new(prompt, answer))
    }
}

/// A single prompt/answer pair. Identity is the id, never the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    prompt: String,
    answer: String,
}

impl Card {
    /// Creates a card with a freshly generated id.
    #[must_use]
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::with_id(CardId::random(), prompt, answer)
    }

    /// Rehydrate a card with a known id.
    #[must_use]
    pub fn with_id(id: CardId, prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// Same question, new identity. Used when a card goes back into the deck.
    #[must_use]
    pub fn recycled(&self) -> Self {
        Self::new(self.prompt.clone(), self.answer.clone())
    }

    /// Sample card shown when the deck is seeded.
    #[must_use]
    pub fn example() -> Self {
        Self::new(
            "Who played the 13th Doctor in Doctor Who?",
            "Jodie Whittaker",
        )
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// True when both cards ask the same question with the same answer.
    #[must_use]
    pub fn same_content(&self, other: &Card) -> bool {
        self.prompt == other.prompt && self.answer == other.answer
    }
}

//
// ─── CARD VALIDATION ERRORS ────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("prompt cannot be empty")]
    EmptyPrompt,

    #[error("answer cannot be empty")]
    EmptyAnswer,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
