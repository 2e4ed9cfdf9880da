mod app_component;
mod dialogs;
mod layout;
mod note_window;
