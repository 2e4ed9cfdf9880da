//! Constants used throughout the application
//!
//! This module centralizes default values and UI text to improve
//! maintainability and consistency.

/// Color assigned to freshly created notes unless configured otherwise
pub const DEFAULT_NOTE_COLOR: &str = "yellow";

/// Maximum number of characters shown in a list preview before truncation
pub const PREVIEW_MAX_CHARS: usize = 30;

/// Ellipsis marker appended to truncated previews
pub const PREVIEW_ELLIPSIS: &str = "…";

// Note window geometry
/// Default note window width in columns
pub const NOTE_WINDOW_DEFAULT_WIDTH: u16 = 40;
/// Default note window height in rows
pub const NOTE_WINDOW_DEFAULT_HEIGHT: u16 = 12;
/// Minimum note window width in columns
pub const NOTE_WINDOW_MIN_WIDTH: u16 = 20;
/// Maximum note window width in columns
pub const NOTE_WINDOW_MAX_WIDTH: u16 = 120;
/// Minimum note window height in rows
pub const NOTE_WINDOW_MIN_HEIGHT: u16 = 6;
/// Maximum note window height in rows
pub const NOTE_WINDOW_MAX_HEIGHT: u16 = 40;

// Dialog titles
pub const DIALOG_TITLE_DELETE: &str = "⚠️  Confirm Delete";
pub const DIALOG_TITLE_COLOR: &str = "🎨 Change Color";
pub const DIALOG_TITLE_EXPORT: &str = "💾 Export Note";

// Success messages
pub const SUCCESS_NOTE_EXPORTED: &str = "✅ Note exported to";

// Error messages
pub const ERROR_NOTE_CREATE_FAILED: &str = "❌ Failed to create note";
pub const ERROR_NOTE_SAVE_FAILED: &str = "❌ Failed to save note";
pub const ERROR_NOTE_DELETE_FAILED: &str = "❌ Failed to delete note";
pub const ERROR_NOTE_EXPORT_FAILED: &str = "❌ Failed to export note";
pub const ERROR_NOTE_LIST_FAILED: &str = "❌ Failed to list notes";
