//! Top-level application component.
//!
//! Owns the open note windows, the notes list, the modal dialog and the
//! focus state. Key events are routed dialog-first, then to the list when
//! it is open, then to the focused note window. Actions produced by the
//! components come back here and are executed against the [`NoteService`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use crate::config::Config;
use crate::constants::{
    ERROR_NOTE_CREATE_FAILED, ERROR_NOTE_DELETE_FAILED, ERROR_NOTE_EXPORT_FAILED, ERROR_NOTE_LIST_FAILED,
    ERROR_NOTE_SAVE_FAILED, SUCCESS_NOTE_EXPORTED,
};
use crate::notes::NoteService;
use crate::ui::components::{DialogComponent, NoteWindow, NotesList, StatusBar};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;

pub struct AppComponent {
    service: NoteService,
    config: Config,

    windows: Vec<NoteWindow>,
    focused: usize,
    list: NotesList,
    dialog: DialogComponent,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(service: NoteService, config: Config) -> Self {
        Self {
            service,
            config,
            windows: Vec::new(),
            focused: 0,
            list: NotesList::new(),
            dialog: DialogComponent::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Number of open note windows.
    pub fn open_windows(&self) -> usize {
        self.windows.len()
    }

    /// Id of the currently focused note, if any window is open.
    pub fn focused_note_id(&self) -> Option<i32> {
        self.windows.get(self.focused).map(|w| w.id)
    }

    /// Reopen all stored notes, honoring the autoload setting.
    pub async fn load_notes(&mut self) -> anyhow::Result<()> {
        if !self.config.ui.autoload {
            log::info!("Autoload disabled, starting with an empty canvas");
            return Ok(());
        }

        let notes = self.service.get_all_notes().await?;
        log::info!("Loaded {} notes from storage", notes.len());
        for note in notes {
            self.windows.push(NoteWindow::new(note.id, &note.content, &note.color));
        }
        self.focused = self.windows.len().saturating_sub(1);
        Ok(())
    }

    pub async fn handle_event(&mut self, event: EventType) -> anyhow::Result<()> {
        if let EventType::Key(key) = event {
            let action = self.route_key(key);
            let action = self.dialog.update(action);
            self.handle_app_action(action).await;
        }
        Ok(())
    }

    fn window_index(&self, id: i32) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn focused_window(&mut self) -> Option<&mut NoteWindow> {
        let index = self.focused;
        self.windows.get_mut(index)
    }

    /// Drop the window for a note id, keeping `focused` on the same window
    /// the user had focused.
    fn remove_window(&mut self, id: i32) {
        if let Some(index) = self.window_index(id) {
            self.windows.remove(index);
            if index < self.focused {
                self.focused -= 1;
            }
            if self.focused >= self.windows.len() && !self.windows.is_empty() {
                self.focused = self.windows.len() - 1;
            }
        }
    }

    /// Route a key event to the right component. Dialogs take priority,
    /// then the list, then the focused window. Global shortcuts are only
    /// consulted before the note window for keys the editor never uses.
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if self.list.visible {
            let global = self.handle_global_key(key);
            if !matches!(global, Action::None) {
                return global;
            }
            return self.list.handle_key_events(key);
        }

        let global = self.handle_global_key(key);
        if !matches!(global, Action::None) {
            return global;
        }

        match self.focused_window() {
            Some(window) => window.handle_key_events(key),
            None => Action::None,
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('n') => Action::NewNote,
                KeyCode::Char('l') => Action::ToggleList,
                KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
                KeyCode::Char('q') | KeyCode::Char('c') => Action::Quit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::F(1) => Action::ShowDialog(DialogType::Help),
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrev,
            KeyCode::Esc => {
                if self.list.visible {
                    Action::ToggleList
                } else if self.windows.is_empty() {
                    Action::Quit
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    async fn refresh_list(&mut self) {
        match self.service.list_previews().await {
            Ok(previews) => self.list.update_entries(previews),
            Err(e) => {
                log::error!("Listing notes failed: {}", e);
                self.show_error(format!("{}: {}", ERROR_NOTE_LIST_FAILED, e));
            }
        }
    }

    fn show_error(&mut self, message: String) {
        self.dialog.update(Action::ShowDialog(DialogType::Error(message)));
    }

    fn show_info(&mut self, message: String) {
        self.dialog.update(Action::ShowDialog(DialogType::Info(message)));
    }

    /// Execute an action against the note service and mutate UI state.
    pub async fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::NewNote => match self.service.create_note(&self.config.ui.default_color).await {
                Ok(note) => {
                    self.windows.push(NoteWindow::new(note.id, &note.content, &note.color));
                    self.focused = self.windows.len() - 1;
                    self.list.visible = false;
                }
                Err(e) => {
                    log::error!("Note creation failed: {}", e);
                    self.show_error(format!("{}: {}", ERROR_NOTE_CREATE_FAILED, e));
                }
            },
            Action::OpenNote(id) => {
                // One window per note: focus the existing window if open
                if let Some(index) = self.window_index(id) {
                    self.focused = index;
                    self.list.visible = false;
                    return;
                }
                match self.service.get_note(id).await {
                    Ok(Some(note)) => {
                        self.windows.push(NoteWindow::new(note.id, &note.content, &note.color));
                        self.focused = self.windows.len() - 1;
                        self.list.visible = false;
                    }
                    Ok(None) => {
                        self.show_info(format!("Note {} no longer exists", id));
                        self.refresh_list().await;
                    }
                    Err(e) => {
                        log::error!("Opening note {} failed: {}", id, e);
                        self.show_error(format!("{}: {}", ERROR_NOTE_LIST_FAILED, e));
                    }
                }
            }
            Action::SaveNote { id, content, color } => {
                match self.service.save_note(id, &content, &color).await {
                    Ok(_) => {}
                    Err(crate::error::NoteError::NotFound(_)) => {
                        // Row vanished underneath the window; nothing to save
                        log::warn!("Save skipped, note {} is gone", id);
                    }
                    Err(e) => {
                        log::error!("Saving note {} failed: {}", id, e);
                        self.show_error(format!("{}: {}", ERROR_NOTE_SAVE_FAILED, e));
                    }
                }
            }
            Action::DeleteConfirmed(id) => match self.service.delete_note(id).await {
                Ok(_) => {
                    self.remove_window(id);
                    self.refresh_list().await;
                }
                Err(e) => {
                    log::error!("Deleting note {} failed: {}", id, e);
                    self.show_error(format!("{}: {}", ERROR_NOTE_DELETE_FAILED, e));
                }
            },
            Action::ApplyColor { id, color } => {
                let content = match self.window_index(id) {
                    Some(index) => self.windows[index].content(),
                    None => match self.service.get_note(id).await {
                        Ok(Some(note)) => note.content,
                        _ => return,
                    },
                };
                match self.service.set_color(id, &content, &color).await {
                    Ok(_) => {
                        if let Some(index) = self.window_index(id) {
                            self.windows[index].set_color(&color);
                        }
                    }
                    Err(e) => {
                        log::error!("Recoloring note {} failed: {}", id, e);
                        self.show_error(format!("{}: {}", ERROR_NOTE_SAVE_FAILED, e));
                    }
                }
            }
            Action::ExportTo { id, path } => {
                // Export what the user sees: the open window's buffer wins
                // over the stored row
                let content = match self.window_index(id) {
                    Some(index) => Some(self.windows[index].content()),
                    None => match self.service.get_note(id).await {
                        Ok(note) => note.map(|n| n.content),
                        Err(e) => {
                            self.show_error(format!("{}: {}", ERROR_NOTE_EXPORT_FAILED, e));
                            return;
                        }
                    },
                };
                let Some(content) = content else {
                    self.show_info(format!("Note {} no longer exists", id));
                    return;
                };
                match self.service.export_note(&content, std::path::Path::new(&path)) {
                    Ok(()) => self.show_info(format!("{} {}", SUCCESS_NOTE_EXPORTED, path)),
                    Err(e) => {
                        log::error!("Exporting note {} failed: {}", id, e);
                        self.show_error(format!("{}: {}", ERROR_NOTE_EXPORT_FAILED, e));
                    }
                }
            }
            Action::CloseWindow(id) => {
                self.remove_window(id);
            }
            Action::FocusNext => {
                if !self.windows.is_empty() {
                    self.focused = (self.focused + 1) % self.windows.len();
                }
            }
            Action::FocusPrev => {
                if !self.windows.is_empty() {
                    self.focused = (self.focused + self.windows.len() - 1) % self.windows.len();
                }
            }
            Action::ToggleList => {
                self.list.visible = !self.list.visible;
                if self.list.visible {
                    self.refresh_list().await;
                }
            }
            Action::ShowDialog(_) | Action::HideDialog => {
                // Already absorbed by the dialog component in handle_event
            }
            Action::None => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame, rect: ratatui::layout::Rect) {
        let areas = LayoutManager::main_layout(rect);
        let canvas = areas[0];
        let status = areas[1];

        let focused = self.focused;
        for (index, window) in self.windows.iter_mut().enumerate() {
            window.set_focused(index == focused);
        }

        // Unfocused windows first so the focused one ends up on top
        let width = self.config.ui.note_width;
        let height = self.config.ui.note_height;
        for (index, window) in self.windows.iter_mut().enumerate() {
            if index != focused {
                let area = LayoutManager::note_window_rect(index, canvas, width, height);
                window.render(f, area);
            }
        }
        if let Some(window) = self.windows.get_mut(focused) {
            let area = LayoutManager::note_window_rect(focused, canvas, width, height);
            window.render(f, area);
        }

        self.list.render(f, canvas);
        self.dialog.render(f, rect);

        let focused_id = self.focused_note_id();
        StatusBar::render(f, status, self.windows.len(), focused_id);
    }
}
