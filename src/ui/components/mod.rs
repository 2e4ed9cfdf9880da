//! UI components

pub mod dialog_component;
pub mod dialogs;
pub mod note_window;
pub mod notes_list;
pub mod status_bar;

pub use dialog_component::DialogComponent;
pub use note_window::NoteWindow;
pub use notes_list::NotesList;
pub use status_bar::StatusBar;
