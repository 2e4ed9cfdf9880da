//! Scroll position for dialogs with bodies taller than their viewport.

use ratatui::widgets::ScrollbarState;

const PAGE_STEP: usize = 10;

/// Line offset plus the scrollbar widget state, kept in sync so every
/// movement is reflected in the rendered scrollbar.
pub struct ScrollState {
    offset: usize,
    bar: ScrollbarState,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            bar: ScrollbarState::new(0),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line_up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn line_down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE_STEP));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE_STEP));
    }

    pub fn to_top(&mut self) {
        self.set(0);
    }

    /// Jump past the end; the next [`Self::clamp_to`] pins it to the last
    /// page.
    pub fn to_bottom(&mut self) {
        self.set(usize::MAX);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.bar = ScrollbarState::new(0);
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.bar = self.bar.position(offset);
    }

    /// Clamp the offset to the scrollable range for the given content and
    /// viewport, sync the scrollbar, and return the offset to render from.
    pub fn clamp_to(&mut self, total_lines: usize, visible_height: usize) -> usize {
        let max_scroll = total_lines.saturating_sub(visible_height);
        let clamped = self.offset.min(max_scroll);
        self.bar = self
            .bar
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(clamped);
        clamped
    }

    pub fn bar_mut(&mut self) -> &mut ScrollbarState {
        &mut self.bar
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
