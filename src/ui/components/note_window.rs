//! Floating editable window showing a single note.
//!
//! Each window is bound to one store row by id. Every content mutation
//! emits [`Action::SaveNote`] so edits are persisted as they happen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::utils::{color, text};

pub struct NoteWindow {
    pub id: i32,
    pub color: String,
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    scroll: u16,
    focused: bool,
}

impl NoteWindow {
    pub fn new(id: i32, content: &str, note_color: &str) -> Self {
        let lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        Self {
            id,
            color: note_color.to_string(),
            lines,
            cursor_row: 0,
            cursor_col: 0,
            scroll: 0,
            focused: false,
        }
    }

    /// Current in-memory content, exactly as it will be persisted.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    pub fn set_color(&mut self, note_color: &str) {
        self.color = note_color.to_string();
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Truncated preview of this window's content, for dialogs.
    pub fn preview(&self) -> String {
        text::preview(&self.content())
    }

    fn save_action(&self) -> Action {
        Action::SaveNote {
            id: self.id,
            content: self.content(),
            color: self.color.clone(),
        }
    }

    fn current_line_len(&self) -> usize {
        self.lines.get(self.cursor_row).map_or(0, |l| l.chars().count())
    }

    fn clamp_col(&mut self) {
        self.cursor_col = self.cursor_col.min(self.current_line_len());
    }

    fn byte_index(line: &str, col: usize) -> usize {
        line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
    }

    fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.cursor_row];
        let idx = Self::byte_index(line, self.cursor_col);
        line.insert(idx, c);
        self.cursor_col += 1;
    }

    fn insert_newline(&mut self) {
        let line = &mut self.lines[self.cursor_row];
        let idx = Self::byte_index(line, self.cursor_col);
        let rest = line.split_off(idx);
        self.lines.insert(self.cursor_row + 1, rest);
        self.cursor_row += 1;
        self.cursor_col = 0;
    }

    fn backspace(&mut self) -> bool {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_row];
            let idx = Self::byte_index(line, self.cursor_col - 1);
            line.remove(idx);
            self.cursor_col -= 1;
            true
        } else if self.cursor_row > 0 {
            let current = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.current_line_len();
            self.lines[self.cursor_row].push_str(&current);
            true
        } else {
            false
        }
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor_col < self.current_line_len() {
            let line = &mut self.lines[self.cursor_row];
            let idx = Self::byte_index(line, self.cursor_col);
            line.remove(idx);
            true
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next);
            true
        } else {
            false
        }
    }
}

impl Component for NoteWindow {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('g') => Action::ShowDialog(DialogType::ColorPicker {
                    note_id: self.id,
                    current: self.color.clone(),
                }),
                KeyCode::Char('e') => Action::ShowDialog(DialogType::Export { note_id: self.id }),
                KeyCode::Char('d') => Action::ShowDialog(DialogType::DeleteConfirmation {
                    note_id: self.id,
                    preview: self.preview(),
                }),
                KeyCode::Char('s') => self.save_action(),
                KeyCode::Char('w') => Action::CloseWindow(self.id),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                self.save_action()
            }
            KeyCode::Enter => {
                self.insert_newline();
                self.save_action()
            }
            KeyCode::Backspace => {
                if self.backspace() {
                    self.save_action()
                } else {
                    Action::None
                }
            }
            KeyCode::Delete => {
                if self.delete_forward() {
                    self.save_action()
                } else {
                    Action::None
                }
            }
            KeyCode::Left => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                } else if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.cursor_col = self.current_line_len();
                }
                Action::None
            }
            KeyCode::Right => {
                if self.cursor_col < self.current_line_len() {
                    self.cursor_col += 1;
                } else if self.cursor_row + 1 < self.lines.len() {
                    self.cursor_row += 1;
                    self.cursor_col = 0;
                }
                Action::None
            }
            KeyCode::Up => {
                if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.clamp_col();
                }
                Action::None
            }
            KeyCode::Down => {
                if self.cursor_row + 1 < self.lines.len() {
                    self.cursor_row += 1;
                    self.clamp_col();
                }
                Action::None
            }
            KeyCode::Home => {
                self.cursor_col = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_col = self.current_line_len();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        f.render_widget(Clear, rect);

        let bg = color::note_background(&self.color);
        let fg = color::note_foreground();
        let style = Style::default().bg(bg).fg(fg);

        let border_style = if self.focused {
            Style::default().bg(bg).fg(ratatui::style::Color::Black)
        } else {
            Style::default().bg(bg).fg(ratatui::style::Color::DarkGray)
        };

        let title = if self.focused {
            format!(" Note {} * ", self.id)
        } else {
            format!(" Note {} ", self.id)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style)
            .style(style);

        let inner = block.inner(rect);
        let visible_height = inner.height.max(1) as usize;
        let visible_width = inner.width.max(1) as usize;

        // Keep the cursor inside the viewport
        if self.cursor_row < self.scroll as usize {
            self.scroll = self.cursor_row as u16;
        } else if self.cursor_row >= self.scroll as usize + visible_height {
            self.scroll = (self.cursor_row + 1 - visible_height) as u16;
        }
        let h_scroll = self.cursor_col.saturating_sub(visible_width - 1) as u16;

        let text = Text::from(self.lines.iter().map(|l| Line::from(l.as_str())).collect::<Vec<_>>());
        let paragraph = Paragraph::new(text).block(block).style(style).scroll((self.scroll, h_scroll));
        f.render_widget(paragraph, rect);

        if self.focused {
            let cx = inner.x + (self.cursor_col as u16).saturating_sub(h_scroll);
            let cy = inner.y + (self.cursor_row as u16).saturating_sub(self.scroll);
            f.set_cursor_position((cx, cy));
        }
    }
}
