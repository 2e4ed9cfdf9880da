use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stickies::ui::components::dialogs::scroll_state::ScrollState;
use stickies::ui::components::DialogComponent;
use stickies::ui::core::{Action, Component, DialogType};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn delete_dialog() -> DialogComponent {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::DeleteConfirmation {
        note_id: 7,
        preview: "buy milk".to_string(),
    }));
    dialog
}

#[test]
fn test_delete_confirmation_confirm() {
    for code in [KeyCode::Enter, KeyCode::Char('y')] {
        let mut dialog = delete_dialog();
        let action = dialog.handle_key_events(key(code));
        assert!(matches!(action, Action::DeleteConfirmed(7)), "{:?} should confirm", code);
        assert!(!dialog.is_visible());
    }
}

#[test]
fn test_delete_confirmation_decline_has_no_side_effect() {
    for code in [KeyCode::Esc, KeyCode::Char('n')] {
        let mut dialog = delete_dialog();
        let action = dialog.handle_key_events(key(code));
        assert!(matches!(action, Action::HideDialog), "{:?} should only dismiss", code);
    }
}

#[test]
fn test_color_picker_starts_on_current_color() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::ColorPicker {
        note_id: 3,
        current: "green".to_string(),
    }));

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::ApplyColor { id, color } => {
            assert_eq!(id, 3);
            assert_eq!(color, "green");
        }
        other => panic!("expected ApplyColor, got {:?}", other),
    }
}

#[test]
fn test_color_picker_selection_moves_with_j() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::ColorPicker {
        note_id: 3,
        current: "green".to_string(),
    }));

    dialog.handle_key_events(key(KeyCode::Char('j')));
    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::ApplyColor { color, .. } => assert_eq!(color, "cyan"),
        other => panic!("expected ApplyColor, got {:?}", other),
    }
}

#[test]
fn test_color_picker_escape_cancels() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::ColorPicker {
        note_id: 3,
        current: "green".to_string(),
    }));

    let action = dialog.handle_key_events(key(KeyCode::Esc));
    assert!(matches!(action, Action::HideDialog));
}

#[test]
fn test_export_prefills_path_and_submits() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Export { note_id: 9 }));

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::ExportTo { id, path } => {
            assert_eq!(id, 9);
            assert_eq!(path, "note-9.txt");
        }
        other => panic!("expected ExportTo, got {:?}", other),
    }
}

#[test]
fn test_export_input_edits_at_cursor() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Export { note_id: 9 }));

    // Cursor starts at the end of the prefill
    dialog.handle_key_events(key(KeyCode::Backspace));
    dialog.handle_key_events(key(KeyCode::Backspace));
    dialog.handle_key_events(key(KeyCode::Backspace));
    dialog.handle_key_events(key(KeyCode::Char('m')));
    dialog.handle_key_events(key(KeyCode::Char('d')));

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::ExportTo { path, .. } => assert_eq!(path, "note-9.md"),
        other => panic!("expected ExportTo, got {:?}", other),
    }
}

#[test]
fn test_info_dialog_scroll_keys_keep_it_open() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Info("a note".to_string())));

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('j'))), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::PageDown)), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('q'))), Action::HideDialog));
}

#[test]
fn test_scroll_state_clamps_to_content() {
    let mut scroll = ScrollState::new();

    scroll.line_up();
    assert_eq!(scroll.offset(), 0, "cannot scroll above the top");

    scroll.page_down();
    assert_eq!(scroll.offset(), 10);

    scroll.to_bottom();
    assert_eq!(scroll.clamp_to(40, 25), 15, "bottom pins to the last page");

    scroll.to_top();
    assert_eq!(scroll.offset(), 0);
}
