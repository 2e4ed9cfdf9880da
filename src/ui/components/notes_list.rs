//! Centered list window enumerating all stored notes.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::notes::NotePreview;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;

pub struct NotesList {
    pub visible: bool,
    entries: Vec<NotePreview>,
    state: ListState,
}

impl NotesList {
    pub fn new() -> Self {
        Self {
            visible: false,
            entries: Vec::new(),
            state: ListState::default(),
        }
    }

    pub fn update_entries(&mut self, entries: Vec<NotePreview>) {
        self.entries = entries;
        if self.entries.is_empty() {
            self.state.select(None);
        } else {
            let selected = self.state.selected().unwrap_or(0).min(self.entries.len() - 1);
            self.state.select(Some(selected));
        }
    }

    fn selected_entry(&self) -> Option<&NotePreview> {
        self.state.selected().and_then(|i| self.entries.get(i))
    }

    fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = match self.state.selected() {
            Some(i) if i + 1 < self.entries.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let previous = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(previous));
    }
}

impl Default for NotesList {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for NotesList {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Enter => match self.selected_entry() {
                Some(entry) => Action::OpenNote(entry.id),
                None => Action::None,
            },
            KeyCode::Char('d') => match self.selected_entry() {
                Some(entry) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    note_id: entry.id,
                    preview: entry.preview.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Esc => Action::ToggleList,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.visible {
            return;
        }

        let area = LayoutManager::centered_rect(60, 60, rect);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 📋 Notes — Enter open • d delete • Esc close ")
            .style(Style::default().fg(Color::Cyan));

        let items: Vec<ListItem> = if self.entries.is_empty() {
            vec![ListItem::new("  (no notes yet — Ctrl+N creates one)")]
        } else {
            self.entries
                .iter()
                .map(|e| ListItem::new(format!(" {:>4}  {}", e.id, e.preview)))
                .collect()
        };

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, area, &mut self.state);
    }
}
