//! Dialog rendering modules

pub mod color_picker_dialog;
pub mod common;
pub mod delete_confirmation_dialog;
pub mod export_dialog;
pub mod scroll_state;
pub mod system_dialogs;
