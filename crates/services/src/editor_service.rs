use std::sync::Arc;

use flash_core::model::{CardDraft, CardId, Deck};
use storage::DeckRepository;

use crate::error::EditorError;

/// Backs the card editing screen.
///
/// The editor works on its own copy of the deck, separate from any running
/// session. Every edit is written through to storage immediately.
#[derive(Clone)]
pub struct EditorService {
    decks: Arc<dyn DeckRepository>,
}

impl EditorService {
    #[must_use]
    pub fn new(decks: Arc<dyn DeckRepository>) -> Self {
        Self { decks }
    }

    /// Load the saved deck for editing. A missing deck is an empty list.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::Storage` if the saved deck cannot be read or parsed.
    pub fn load_deck(&self) -> Result<Deck, EditorError> {
        match self.decks.load() {
            Ok(deck) => Ok(deck),
            Err(err) if err.is_not_found() => Ok(Deck::new()),
            Err(err) => {
                tracing::warn!(error = %err, "editor could not load deck");
                Err(err.into())
            }
        }
    }

    /// Validate a new card, put it at the front of `deck` and save.
    ///
    /// The card stays in `deck` even if saving fails.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::Card` for blank input (nothing is changed).
    /// Returns `EditorError::Deck` if the card cannot be inserted.
    /// Returns `EditorError::Storage` if the deck cannot be saved.
    pub fn add_card(
        &self,
        deck: &mut Deck,
        prompt: &str,
        answer: &str,
    ) -> Result<CardId, EditorError> {
        let mut card = CardDraft::new(prompt, answer).validate()?;
        while deck.contains(card.id()) {
            card = card.recycled();
        }
        let card_id = card.id();
        deck.push_front(card)?;
        self.persist(deck)?;
        tracing::info!(%card_id, cards = deck.len(), "card added");
        Ok(card_id)
    }

    /// Remove the cards at `indices` from `deck` and save.
    ///
    /// Returns how many cards were removed. Nothing is written when no index
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::Storage` if the deck cannot be saved.
    pub fn remove_cards(&self, deck: &mut Deck, indices: &[usize]) -> Result<usize, EditorError> {
        let removed = deck.remove_at(indices);
        if removed == 0 {
            return Ok(0);
        }
        self.persist(deck)?;
        tracing::info!(removed, cards = deck.len(), "cards removed");
        Ok(removed)
    }

    fn persist(&self, deck: &Deck) -> Result<(), EditorError> {
        self.decks.save(deck).map_err(|err| {
            tracing::warn!(error = %err, "failed to save deck, edit kept in memory only");
            EditorError::Storage(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flash_core::model::{Card, CardError};
    use storage::{InMemoryRepository, StorageError};

    struct ReadOnlyRepository(Deck);

    impl DeckRepository for ReadOnlyRepository {
        fn load(&self) -> Result<Deck, StorageError> {
            Ok(self.0.clone())
        }

        fn save(&self, _deck: &Deck) -> Result<(), StorageError> {
            Err(StorageError::Connection("read only".to_string()))
        }
    }

    #[test]
    fn load_deck_treats_missing_as_empty() {
        let service = EditorService::new(Arc::new(InMemoryRepository::new()));
        assert!(service.load_deck().unwrap().is_empty());
    }

    #[test]
    fn add_card_inserts_at_front_and_saves() {
        let repo = Arc::new(InMemoryRepository::with_deck(
            Deck::from_cards(vec![Card::new("Old", "card")]).unwrap(),
        ));
        let service = EditorService::new(repo.clone());
        let mut deck = service.load_deck().unwrap();

        let id = service.add_card(&mut deck, "  New ", " card ").unwrap();

        assert_eq!(deck.cards()[0].id(), id);
        assert_eq!(deck.cards()[0].prompt(), "New");
        let saved = repo.load().unwrap();
        assert_eq!(saved, deck);
    }

    #[test]
    fn add_blank_card_changes_nothing() {
        let repo = Arc::new(InMemoryRepository::new());
        let service = EditorService::new(repo.clone());
        let mut deck = Deck::new();

        let err = service.add_card(&mut deck, "  ", "answer").unwrap_err();

        assert!(matches!(err, EditorError::Card(CardError::EmptyPrompt)));
        assert!(deck.is_empty());
        assert!(repo.load().unwrap_err().is_not_found());
    }

    #[test]
    fn remove_cards_saves_shorter_deck() {
        let repo = Arc::new(InMemoryRepository::with_deck(
            Deck::from_cards(vec![Card::new("a", "1"), Card::new("b", "2"), Card::new("c", "3")])
                .unwrap(),
        ));
        let service = EditorService::new(repo.clone());
        let mut deck = service.load_deck().unwrap();

        let removed = service.remove_cards(&mut deck, &[0, 2]).unwrap();

        assert_eq!(removed, 2);
        let saved = repo.load().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.cards()[0].prompt(), "b");
    }

    #[test]
    fn failed_save_keeps_local_edit() {
        let service = EditorService::new(Arc::new(ReadOnlyRepository(Deck::new())));
        let mut deck = service.load_deck().unwrap();

        let err = service.add_card(&mut deck, "Q", "A").unwrap_err();

        assert!(matches!(err, EditorError::Storage(_)));
        assert_eq!(deck.len(), 1);
    }
}
