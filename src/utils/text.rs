//! Text helpers for list previews.

use crate::constants::{PREVIEW_ELLIPSIS, PREVIEW_MAX_CHARS};

/// Build a list preview from note content: the first
/// [`PREVIEW_MAX_CHARS`] characters followed by an ellipsis when the
/// content is longer, the content itself otherwise. Operates on chars,
/// never splitting a multi-byte character.
#[must_use]
pub fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}{PREVIEW_ELLIPSIS}")
    } else {
        head
    }
}
