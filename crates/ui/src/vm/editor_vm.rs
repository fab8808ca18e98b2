use std::sync::Arc;

use flash_core::model::Deck;
use services::{EditorError, EditorService};

use super::card_vm::{CardListItemVm, map_card_list_items};
use crate::views::ViewError;

/// View model for the card editing screen.
///
/// Works on its own copy of the saved deck; the study screen picks the
/// changes up when it starts its next session.
pub struct EditorVm {
    editor: Arc<EditorService>,
    deck: Deck,
    new_prompt: String,
    new_answer: String,
    error: Option<ViewError>,
}

impl EditorVm {
    /// Load the saved deck. A failed load leaves an empty list and an error.
    #[must_use]
    pub fn load(editor: Arc<EditorService>) -> Self {
        let (deck, error) = match editor.load_deck() {
            Ok(deck) => (deck, None),
            Err(err) => (Deck::new(), Some(view_error(&err))),
        };
        Self {
            editor,
            deck,
            new_prompt: String::new(),
            new_answer: String::new(),
            error,
        }
    }

    #[must_use]
    pub fn rows(&self) -> Vec<CardListItemVm> {
        map_card_list_items(self.deck.cards())
    }

    #[must_use]
    pub fn new_prompt(&self) -> &str {
        &self.new_prompt
    }

    #[must_use]
    pub fn new_answer(&self) -> &str {
        &self.new_answer
    }

    #[must_use]
    pub fn error(&self) -> Option<ViewError> {
        self.error
    }

    pub fn set_prompt(&mut self, value: String) {
        self.new_prompt = value;
    }

    pub fn set_answer(&mut self, value: String) {
        self.new_answer = value;
    }

    /// Add the drafted card. Blank input is ignored without an error.
    pub fn add_card(&mut self) {
        match self
            .editor
            .add_card(&mut self.deck, &self.new_prompt, &self.new_answer)
        {
            Ok(_) => {
                self.new_prompt.clear();
                self.new_answer.clear();
                self.error = None;
            }
            Err(EditorError::Card(_)) => {}
            Err(err) => {
                self.new_prompt.clear();
                self.new_answer.clear();
                self.error = Some(view_error(&err));
            }
        }
    }

    pub fn remove_card(&mut self, index: usize) {
        match self.editor.remove_cards(&mut self.deck, &[index]) {
            Ok(_) => self.error = None,
            Err(err) => self.error = Some(view_error(&err)),
        }
    }
}

fn view_error(err: &EditorError) -> ViewError {
    match err {
        EditorError::Storage(_) => ViewError::Storage,
        _ => ViewError::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flash_core::model::Card;
    use storage::{DeckRepository, InMemoryRepository, StorageError};

    struct ReadOnlyRepository;

    impl DeckRepository for ReadOnlyRepository {
        fn load(&self) -> Result<Deck, StorageError> {
            Ok(Deck::new())
        }

        fn save(&self, _deck: &Deck) -> Result<(), StorageError> {
            Err(StorageError::Connection("read only".to_string()))
        }
    }

    #[test]
    fn add_card_clears_form_and_lists_card_first() {
        let repo = Arc::new(InMemoryRepository::with_deck(
            Deck::from_cards(vec![Card::new("Old", "card")]).unwrap(),
        ));
        let mut vm = EditorVm::load(Arc::new(EditorService::new(repo.clone())));
        vm.set_prompt("New".to_string());
        vm.set_answer("card".to_string());

        vm.add_card();

        assert_eq!(vm.new_prompt(), "");
        assert_eq!(vm.new_answer(), "");
        let rows = vm.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].prompt_preview, "New");
        assert_eq!(repo.load().unwrap().len(), 2);
    }

    #[test]
    fn blank_card_keeps_form() {
        let mut vm = EditorVm::load(Arc::new(EditorService::new(Arc::new(
            InMemoryRepository::new(),
        ))));
        vm.set_prompt("Only prompt".to_string());

        vm.add_card();

        assert_eq!(vm.new_prompt(), "Only prompt");
        assert!(vm.rows().is_empty());
        assert!(vm.error().is_none());
    }

    #[test]
    fn save_failure_is_reported() {
        let mut vm = EditorVm::load(Arc::new(EditorService::new(Arc::new(ReadOnlyRepository))));
        vm.set_prompt("Q".to_string());
        vm.set_answer("A".to_string());

        vm.add_card();

        assert_eq!(vm.error(), Some(ViewError::Storage));
        assert_eq!(vm.rows().len(), 1);
    }

    #[test]
    fn remove_card_persists() {
        let repo = Arc::new(InMemoryRepository::with_deck(
            Deck::from_cards(vec![Card::new("a", "1"), Card::new("b", "2")]).unwrap(),
        ));
        let mut vm = EditorVm::load(Arc::new(EditorService::new(repo.clone())));

        vm.remove_card(0);

        assert_eq!(vm.rows().len(), 1);
        assert_eq!(repo.load().unwrap().cards()[0].prompt(), "b");
    }
}
