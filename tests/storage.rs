use stickies::repositories::NoteRepository;
use stickies::storage::LocalStorage;

#[tokio::test]
async fn test_storage_creation() {
    let result = LocalStorage::new(true).await;
    assert!(result.is_ok(), "LocalStorage should be created successfully");
}

#[tokio::test]
async fn test_create_and_fetch_roundtrip() {
    let storage = LocalStorage::new(true).await.unwrap();

    let created = NoteRepository::create(storage.conn(), "yellow").await.unwrap();
    assert_eq!(created.content, "");
    assert_eq!(created.color, "yellow");

    let fetched = NoteRepository::get_by_id(storage.conn(), created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn test_created_notes_get_distinct_ascending_ids() {
    let storage = LocalStorage::new(true).await.unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        let note = NoteRepository::create(storage.conn(), "yellow").await.unwrap();
        ids.push(note.id);
    }

    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted, ids, "ids should be distinct and ascending");
}

#[tokio::test]
async fn test_save_updates_content_and_color() {
    let storage = LocalStorage::new(true).await.unwrap();
    let note = NoteRepository::create(storage.conn(), "yellow").await.unwrap();

    let saved = NoteRepository::save(storage.conn(), note.id, "groceries", "green")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.content, "groceries");
    assert_eq!(saved.color, "green");

    let fetched = NoteRepository::get_by_id(storage.conn(), note.id).await.unwrap().unwrap();
    assert_eq!(fetched.content, "groceries");
    assert_eq!(fetched.color, "green");
}

#[tokio::test]
async fn test_save_missing_note_returns_none() {
    let storage = LocalStorage::new(true).await.unwrap();
    let result = NoteRepository::save(storage.conn(), 999, "content", "yellow").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_save_unchanged_values_is_noop() {
    let storage = LocalStorage::new(true).await.unwrap();
    let note = NoteRepository::create(storage.conn(), "cyan").await.unwrap();

    let first = NoteRepository::save(storage.conn(), note.id, "same", "cyan").await.unwrap().unwrap();
    let second = NoteRepository::save(storage.conn(), note.id, "same", "cyan").await.unwrap().unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_delete_leaves_other_notes_intact() {
    let storage = LocalStorage::new(true).await.unwrap();

    let keep_a = NoteRepository::create(storage.conn(), "yellow").await.unwrap();
    let doomed = NoteRepository::create(storage.conn(), "yellow").await.unwrap();
    let keep_b = NoteRepository::create(storage.conn(), "yellow").await.unwrap();

    assert!(NoteRepository::delete(storage.conn(), doomed.id).await.unwrap());

    let remaining = NoteRepository::get_all(storage.conn()).await.unwrap();
    let ids: Vec<i32> = remaining.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![keep_a.id, keep_b.id]);
}

#[tokio::test]
async fn test_delete_missing_note_returns_false() {
    let storage = LocalStorage::new(true).await.unwrap();
    assert!(!NoteRepository::delete(storage.conn(), 42).await.unwrap());
}

#[tokio::test]
async fn test_get_all_orders_by_id() {
    let storage = LocalStorage::new(true).await.unwrap();

    for color in ["red", "green", "blue"] {
        NoteRepository::create(storage.conn(), color).await.unwrap();
    }

    let notes = NoteRepository::get_all(storage.conn()).await.unwrap();
    let ids: Vec<i32> = notes.iter().map(|n| n.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(notes.len(), 3);
}

#[tokio::test]
async fn test_reopening_database_restores_notes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.db");

    let before = {
        let storage = LocalStorage::open_at(&path).await.unwrap();
        let a = NoteRepository::create(storage.conn(), "yellow").await.unwrap();
        let b = NoteRepository::create(storage.conn(), "green").await.unwrap();
        NoteRepository::save(storage.conn(), a.id, "shopping list", "yellow").await.unwrap();
        NoteRepository::save(storage.conn(), b.id, "project ideas", "cyan").await.unwrap();
        NoteRepository::get_all(storage.conn()).await.unwrap()
    };

    // Fresh connection against the same file, as a restart would open
    let storage = LocalStorage::open_at(&path).await.unwrap();
    let after = NoteRepository::get_all(storage.conn()).await.unwrap();

    assert_eq!(after, before);
    assert_eq!(after[0].content, "shopping list");
    assert_eq!(after[0].color, "yellow");
    assert_eq!(after[1].content, "project ideas");
    assert_eq!(after[1].color, "cyan");
}

#[tokio::test]
async fn test_color_persists_across_saves() {
    let storage = LocalStorage::new(true).await.unwrap();
    let note = NoteRepository::create(storage.conn(), "magenta").await.unwrap();

    // Content-only save keeps the stored color
    NoteRepository::save(storage.conn(), note.id, "text", "magenta").await.unwrap();
    let fetched = NoteRepository::get_by_id(storage.conn(), note.id).await.unwrap().unwrap();
    assert_eq!(fetched.color, "magenta");
}
