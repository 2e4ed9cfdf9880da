use stickies::config::Config;
use stickies::notes::NoteService;
use stickies::storage::LocalStorage;
use stickies::ui::core::Action;
use stickies::ui::AppComponent;

async fn app() -> (AppComponent, NoteService) {
    let storage = LocalStorage::new(true).await.unwrap();
    let service = NoteService::new(storage);
    (AppComponent::new(service.clone(), Config::default()), service)
}

#[tokio::test]
async fn test_new_note_opens_window_with_configured_color() {
    let (mut app, service) = app().await;

    app.handle_app_action(Action::NewNote).await;

    assert_eq!(app.open_windows(), 1);
    let notes = service.get_all_notes().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].color, "yellow");
    assert_eq!(notes[0].content, "");
}

#[tokio::test]
async fn test_open_note_focuses_existing_window_instead_of_duplicating() {
    let (mut app, service) = app().await;
    let first = service.create_note("yellow").await.unwrap();
    let second = service.create_note("yellow").await.unwrap();

    app.handle_app_action(Action::OpenNote(first.id)).await;
    app.handle_app_action(Action::OpenNote(second.id)).await;
    assert_eq!(app.open_windows(), 2);
    assert_eq!(app.focused_note_id(), Some(second.id));

    app.handle_app_action(Action::OpenNote(first.id)).await;
    assert_eq!(app.open_windows(), 2, "reopening must not create a second window");
    assert_eq!(app.focused_note_id(), Some(first.id));
}

#[tokio::test]
async fn test_delete_confirmed_removes_row_and_window() {
    let (mut app, service) = app().await;
    let note = service.create_note("yellow").await.unwrap();
    app.handle_app_action(Action::OpenNote(note.id)).await;

    app.handle_app_action(Action::DeleteConfirmed(note.id)).await;

    assert_eq!(app.open_windows(), 0);
    assert!(service.get_note(note.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_closing_earlier_window_keeps_focused_note() {
    let (mut app, service) = app().await;
    let a = service.create_note("yellow").await.unwrap();
    let b = service.create_note("yellow").await.unwrap();
    let c = service.create_note("yellow").await.unwrap();
    app.handle_app_action(Action::OpenNote(a.id)).await;
    app.handle_app_action(Action::OpenNote(b.id)).await;
    app.handle_app_action(Action::OpenNote(c.id)).await;
    assert_eq!(app.focused_note_id(), Some(c.id));

    app.handle_app_action(Action::CloseWindow(a.id)).await;

    assert_eq!(app.open_windows(), 2);
    assert_eq!(app.focused_note_id(), Some(c.id), "focus must stay on the same note");
}

#[tokio::test]
async fn test_close_window_keeps_stored_row() {
    let (mut app, service) = app().await;
    let note = service.create_note("yellow").await.unwrap();
    app.handle_app_action(Action::OpenNote(note.id)).await;
    app.handle_app_action(Action::SaveNote {
        id: note.id,
        content: "kept".to_string(),
        color: "yellow".to_string(),
    })
    .await;

    app.handle_app_action(Action::CloseWindow(note.id)).await;

    assert_eq!(app.open_windows(), 0);
    let stored = service.get_note(note.id).await.unwrap().unwrap();
    assert_eq!(stored.content, "kept");
}

#[tokio::test]
async fn test_focus_cycles_through_windows() {
    let (mut app, service) = app().await;
    let a = service.create_note("yellow").await.unwrap();
    let b = service.create_note("yellow").await.unwrap();
    app.handle_app_action(Action::OpenNote(a.id)).await;
    app.handle_app_action(Action::OpenNote(b.id)).await;

    app.handle_app_action(Action::FocusNext).await;
    assert_eq!(app.focused_note_id(), Some(a.id));
    app.handle_app_action(Action::FocusNext).await;
    assert_eq!(app.focused_note_id(), Some(b.id));
    app.handle_app_action(Action::FocusPrev).await;
    assert_eq!(app.focused_note_id(), Some(a.id));
}
