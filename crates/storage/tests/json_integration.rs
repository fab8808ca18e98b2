use flash_core::model::{Card, CardId, Deck};
use storage::repository::{DeckRepository, StorageError};
use storage::{JsonDeckRepository, Storage};
use tempfile::tempdir;

fn build_deck() -> Deck {
    Deck::from_cards(vec![
        Card::new("Q1", "1"),
        Card::new("Q2", "2"),
        Card::new("Q3", "3"),
    ])
    .unwrap()
}

#[test]
fn json_roundtrip_preserves_order_and_ids() {
    let dir = tempdir().unwrap();
    let repo = JsonDeckRepository::new(dir.path().join("cards.json"));
    let deck = build_deck();

    repo.save(&deck).expect("save");
    let loaded = repo.load().expect("load");

    assert_eq!(loaded, deck);
}

#[test]
fn json_save_creates_missing_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("cards.json");
    let storage = Storage::json_file(&path);

    storage.decks.save(&build_deck()).expect("save");

    assert!(path.exists());
}

#[test]
fn json_save_overwrites_previous_content() {
    let dir = tempdir().unwrap();
    let repo = JsonDeckRepository::new(dir.path().join("cards.json"));
    repo.save(&build_deck()).unwrap();

    let smaller = Deck::from_cards(vec![Card::new("Only", "one")]).unwrap();
    repo.save(&smaller).unwrap();

    let loaded = repo.load().unwrap();
    assert_eq!(loaded, smaller);
}

#[test]
fn json_file_uses_plain_card_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cards.json");
    let id: CardId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
    let deck = Deck::from_cards(vec![Card::with_id(id, "Q", "A")]).unwrap();
    JsonDeckRepository::new(&path).save(&deck).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"id": "67e55044-10b1-426f-9247-bb680e5fe0c8", "prompt": "Q", "answer": "A"}
        ])
    );
}

#[test]
fn json_reads_hand_written_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cards.json");
    std::fs::write(
        &path,
        r#"[{"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","prompt":"Capital of France?","answer":"Paris"}]"#,
    )
    .unwrap();

    let deck = JsonDeckRepository::new(&path).load().unwrap();
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.cards()[0].prompt(), "Capital of France?");
    assert_eq!(deck.cards()[0].answer(), "Paris");
}

#[test]
fn json_schema_mismatch_is_deserialize_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cards.json");
    std::fs::write(&path, r#"[{"question":"Q","answer":"A"}]"#).unwrap();

    let err = JsonDeckRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::Deserialize { .. }), "got {err:?}");
}

#[test]
fn json_corrupt_file_is_deserialize_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cards.json");
    std::fs::write(&path, b"not json at all").unwrap();

    let err = JsonDeckRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::Deserialize { .. }), "got {err:?}");
}

#[test]
fn json_duplicate_ids_fail_to_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cards.json");
    std::fs::write(
        &path,
        r#"[
            {"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","prompt":"Q1","answer":"1"},
            {"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","prompt":"Q2","answer":"2"}
        ]"#,
    )
    .unwrap();

    let err = JsonDeckRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::Deserialize { .. }), "got {err:?}");
}

#[test]
fn json_empty_deck_roundtrips() {
    let dir = tempdir().unwrap();
    let repo = JsonDeckRepository::new(dir.path().join("cards.json"));
    repo.save(&Deck::new()).unwrap();

    let loaded = repo.load().unwrap();
    assert!(loaded.is_empty());
}
