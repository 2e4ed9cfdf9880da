//! One-line status bar at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct StatusBar;

impl StatusBar {
    pub fn render(f: &mut Frame, rect: Rect, open_notes: usize, focused_id: Option<i32>) {
        let focus = match focused_id {
            Some(id) => format!("Note {}", id),
            None => "—".to_string(),
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {} open • {} ", open_notes, focus),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::styled(
                " Ctrl+N new • Ctrl+L list • F1 help • Ctrl+Q quit",
                Style::default().fg(Color::Gray),
            ),
        ]);

        f.render_widget(Paragraph::new(line), rect);
    }
}
