use std::path::Path;

use anyhow::{Context, bail};
use flash_core::model::{Card, Deck};
use storage::{DeckRepository, JsonDeckRepository};

/// A handful of cards to try the app with.
pub fn sample_deck() -> anyhow::Result<Deck> {
    let deck = Deck::from_cards(vec![
        Card::example(),
        Card::new("What is the capital of Australia?", "Canberra"),
        Card::new("How many bits are in a byte?", "8"),
        Card::new("Which planet is known as the red planet?", "Mars"),
        Card::new("Who wrote \"Pride and Prejudice\"?", "Jane Austen"),
    ])?;
    Ok(deck)
}

/// Write the sample deck to `path`, refusing to replace a file unless `force`.
pub fn run_seed(path: &Path, force: bool) -> anyhow::Result<usize> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }
    let deck = sample_deck()?;
    JsonDeckRepository::new(path)
        .save(&deck)
        .with_context(|| format!("writing sample deck to {}", path.display()))?;
    tracing::info!(path = %path.display(), cards = deck.len(), "seeded deck");
    Ok(deck.len())
}
