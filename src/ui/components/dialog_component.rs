//! Modal dialog component.
//!
//! Container for the delete confirmation, color picker, export and
//! system (info/error/help) dialogs. Holds the shared input buffer,
//! selection and scroll state; rendering is delegated to the modules
//! under [`dialogs`].

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use crate::ui::components::dialogs::{
    color_picker_dialog, delete_confirmation_dialog, export_dialog, scroll_state::ScrollState, system_dialogs,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::utils::color::NOTE_COLORS;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub selected_color_index: usize,
    pub scroll: ScrollState,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            selected_color_index: 0,
            scroll: ScrollState::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.selected_color_index = 0;
        self.scroll.reset();
    }

    fn handle_submit(&mut self) -> Action {
        match &self.dialog_type {
            Some(DialogType::DeleteConfirmation { note_id, .. }) => {
                let action = Action::DeleteConfirmed(*note_id);
                self.clear_dialog();
                action
            }
            Some(DialogType::ColorPicker { note_id, .. }) => {
                let color = NOTE_COLORS[self.selected_color_index % NOTE_COLORS.len()].to_string();
                let action = Action::ApplyColor {
                    id: *note_id,
                    color,
                };
                self.clear_dialog();
                action
            }
            Some(DialogType::Export { note_id }) => {
                if self.input_buffer.is_empty() {
                    Action::None
                } else {
                    let action = Action::ExportTo {
                        id: *note_id,
                        path: self.input_buffer.clone(),
                    };
                    self.clear_dialog();
                    action
                }
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.dialog_type.is_none() {
            return Action::None;
        }

        match &self.dialog_type {
            Some(DialogType::Info(_)) | Some(DialogType::Error(_)) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll.line_up();
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll.line_down();
                    Action::None
                }
                KeyCode::PageUp => {
                    self.scroll.page_up();
                    Action::None
                }
                KeyCode::PageDown => {
                    self.scroll.page_down();
                    Action::None
                }
                KeyCode::Home => {
                    self.scroll.to_top();
                    Action::None
                }
                KeyCode::End => {
                    self.scroll.to_bottom();
                    Action::None
                }
                _ => Action::HideDialog, // Any other key dismisses the dialog
            },
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::F(1) => Action::HideDialog,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll.line_up();
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll.line_down();
                    Action::None
                }
                KeyCode::PageUp => {
                    self.scroll.page_up();
                    Action::None
                }
                KeyCode::PageDown => {
                    self.scroll.page_down();
                    Action::None
                }
                KeyCode::Home => {
                    self.scroll.to_top();
                    Action::None
                }
                KeyCode::End => {
                    self.scroll.to_bottom();
                    Action::None
                }
                _ => Action::None,
            },
            Some(DialogType::DeleteConfirmation { .. }) => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => self.handle_submit(),
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::ColorPicker { .. }) => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => self.handle_submit(),
                KeyCode::Down | KeyCode::Char('j') => {
                    self.selected_color_index = (self.selected_color_index + 1) % NOTE_COLORS.len();
                    Action::None
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected_color_index =
                        (self.selected_color_index + NOTE_COLORS.len() - 1) % NOTE_COLORS.len();
                    Action::None
                }
                _ => Action::None,
            },
            Some(DialogType::Export { .. }) => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => self.handle_submit(),
                KeyCode::Char(c) => {
                    let byte_pos: usize = self
                        .input_buffer
                        .chars()
                        .take(self.cursor_position)
                        .map(|ch| ch.len_utf8())
                        .sum();
                    self.input_buffer.insert(byte_pos, c);
                    self.cursor_position += 1;
                    Action::None
                }
                KeyCode::Backspace => {
                    if self.cursor_position > 0 {
                        let byte_pos: usize = self
                            .input_buffer
                            .chars()
                            .take(self.cursor_position)
                            .map(|ch| ch.len_utf8())
                            .sum();
                        let prev_char_len = self
                            .input_buffer
                            .chars()
                            .nth(self.cursor_position - 1)
                            .map(|ch| ch.len_utf8())
                            .unwrap_or(1);
                        self.input_buffer.remove(byte_pos - prev_char_len);
                        self.cursor_position -= 1;
                    }
                    Action::None
                }
                KeyCode::Delete => {
                    let char_count = self.input_buffer.chars().count();
                    if self.cursor_position < char_count {
                        let byte_pos: usize = self
                            .input_buffer
                            .chars()
                            .take(self.cursor_position)
                            .map(|ch| ch.len_utf8())
                            .sum();
                        self.input_buffer.remove(byte_pos);
                    }
                    Action::None
                }
                KeyCode::Left => {
                    if self.cursor_position > 0 {
                        self.cursor_position -= 1;
                    }
                    Action::None
                }
                KeyCode::Right => {
                    let char_count = self.input_buffer.chars().count();
                    if self.cursor_position < char_count {
                        self.cursor_position += 1;
                    }
                    Action::None
                }
                _ => Action::None,
            },
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                match &dialog_type {
                    DialogType::ColorPicker { current, .. } => {
                        self.selected_color_index =
                            NOTE_COLORS.iter().position(|c| *c == current.as_str()).unwrap_or(0);
                        self.input_buffer.clear();
                        self.cursor_position = 0;
                    }
                    DialogType::Export { note_id } => {
                        self.input_buffer = format!("note-{}.txt", note_id);
                        self.cursor_position = self.input_buffer.chars().count();
                    }
                    _ => {
                        self.input_buffer.clear();
                        self.cursor_position = 0;
                    }
                }
                self.scroll.reset();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if let Some(dialog_type) = self.dialog_type.clone() {
            match dialog_type {
                DialogType::DeleteConfirmation { note_id, preview } => {
                    delete_confirmation_dialog::render(f, rect, note_id, &preview);
                }
                DialogType::ColorPicker { .. } => {
                    color_picker_dialog::render(f, rect, self.selected_color_index);
                }
                DialogType::Export { note_id } => {
                    export_dialog::render(f, rect, note_id, &self.input_buffer, self.cursor_position);
                }
                DialogType::Info(message) => {
                    system_dialogs::render_info_dialog(f, rect, &message, &mut self.scroll);
                }
                DialogType::Error(message) => {
                    system_dialogs::render_error_dialog(f, rect, &message, &mut self.scroll);
                }
                DialogType::Help => {
                    system_dialogs::render_help_dialog(f, rect, &mut self.scroll);
                }
            }
        }
    }
}
