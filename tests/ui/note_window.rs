use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stickies::ui::components::NoteWindow;
use stickies::ui::core::{Action, Component, DialogType};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_keystroke_emits_save_with_full_buffer() {
    let mut window = NoteWindow::new(4, "bc", "yellow");

    let action = window.handle_key_events(key(KeyCode::Char('a')));
    match action {
        Action::SaveNote { id, content, color } => {
            assert_eq!(id, 4);
            assert_eq!(content, "abc");
            assert_eq!(color, "yellow");
        }
        other => panic!("expected SaveNote, got {:?}", other),
    }
}

#[test]
fn test_enter_splits_line_and_saves() {
    let mut window = NoteWindow::new(1, "ab", "yellow");

    window.handle_key_events(key(KeyCode::Right));
    let action = window.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::SaveNote { content, .. } => assert_eq!(content, "a\nb"),
        other => panic!("expected SaveNote, got {:?}", other),
    }
}

#[test]
fn test_backspace_joins_lines() {
    let mut window = NoteWindow::new(1, "a\nb", "yellow");

    window.handle_key_events(key(KeyCode::Down));
    let action = window.handle_key_events(key(KeyCode::Backspace));
    match action {
        Action::SaveNote { content, .. } => assert_eq!(content, "ab"),
        other => panic!("expected SaveNote, got {:?}", other),
    }
}

#[test]
fn test_backspace_at_origin_does_not_save() {
    let mut window = NoteWindow::new(1, "ab", "yellow");

    let action = window.handle_key_events(key(KeyCode::Backspace));
    assert!(matches!(action, Action::None));
    assert_eq!(window.content(), "ab");
}

#[test]
fn test_multibyte_editing_keeps_char_boundaries() {
    let mut window = NoteWindow::new(1, "héllo", "yellow");

    window.handle_key_events(key(KeyCode::Right));
    window.handle_key_events(key(KeyCode::Right));
    let action = window.handle_key_events(key(KeyCode::Backspace));
    match action {
        Action::SaveNote { content, .. } => assert_eq!(content, "hllo"),
        other => panic!("expected SaveNote, got {:?}", other),
    }
}

#[test]
fn test_ctrl_d_requests_delete_confirmation_with_preview() {
    let mut window = NoteWindow::new(5, "note text", "yellow");

    let action = window.handle_key_events(ctrl('d'));
    match action {
        Action::ShowDialog(DialogType::DeleteConfirmation { note_id, preview }) => {
            assert_eq!(note_id, 5);
            assert_eq!(preview, "note text");
        }
        other => panic!("expected delete confirmation, got {:?}", other),
    }
    assert_eq!(window.content(), "note text", "requesting delete must not edit");
}

#[test]
fn test_ctrl_g_opens_color_picker_on_current_color() {
    let mut window = NoteWindow::new(5, "", "magenta");

    let action = window.handle_key_events(ctrl('g'));
    match action {
        Action::ShowDialog(DialogType::ColorPicker { note_id, current }) => {
            assert_eq!(note_id, 5);
            assert_eq!(current, "magenta");
        }
        other => panic!("expected color picker, got {:?}", other),
    }
}

#[test]
fn test_ctrl_w_closes_without_saving() {
    let mut window = NoteWindow::new(8, "text", "yellow");

    let action = window.handle_key_events(ctrl('w'));
    assert!(matches!(action, Action::CloseWindow(8)));
}
