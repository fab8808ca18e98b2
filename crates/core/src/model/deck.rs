use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::card::Card;
use crate::model::ids::CardId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("duplicate card id in deck: {0}")]
    DuplicateId(CardId),
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// Ordered study queue. Index 0 is the front: the next card to answer.
///
/// Card ids are unique within a deck. The invariant is checked on every
/// construction path, including deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck from cards in order.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::DuplicateId` if two cards share an id.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.id()) {
                return Err(DeckError::DuplicateId(card.id()));
            }
        }
        Ok(Self { cards })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// The card the learner answers next.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.cards.first()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    /// Insert a card at the front.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::DuplicateId` if a card with the same id is already present.
    pub fn push_front(&mut self, card: Card) -> Result<(), DeckError> {
        if self.contains(card.id()) {
            return Err(DeckError::DuplicateId(card.id()));
        }
        self.cards.insert(0, card);
        Ok(())
    }

    /// Remove a card by id. Returns `None` when the id is not in the deck.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.position(id)?;
        Some(self.cards.remove(index))
    }

    /// Replace the card with a fresh copy at the front.
    ///
    /// Returns the id of the new card, or `None` when `id` is not in the deck.
    pub fn recycle(&mut self, id: CardId) -> Option<CardId> {
        let card = self.remove(id)?;
        let mut fresh = card.recycled();
        while self.contains(fresh.id()) {
            fresh = card.recycled();
        }
        let fresh_id = fresh.id();
        self.cards.insert(0, fresh);
        Some(fresh_id)
    }

    /// Remove every card at the given positions. Out-of-range positions are
    /// skipped and repeated positions count once.
    ///
    /// Returns the number of cards removed.
    pub fn remove_at(&mut self, indices: &[usize]) -> usize {
        let targets: BTreeSet<usize> = indices
            .iter()
            .copied()
            .filter(|index| *index < self.cards.len())
            .collect();
        for index in targets.iter().rev() {
            self.cards.remove(*index);
        }
        targets.len()
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = DeckError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_cards(cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
