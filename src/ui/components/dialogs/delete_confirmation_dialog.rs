//! Delete confirmation dialog

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::DIALOG_TITLE_DELETE;
use crate::ui::layout::LayoutManager;

pub fn render(f: &mut Frame, area: Rect, note_id: i32, preview: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let shown = if preview.is_empty() { "(empty note)" } else { preview };
    let message = format!(
        "Delete note {}?\n\n\"{}\"\n\nThis action cannot be undone!\n\nPress 'y'/Enter to confirm or 'n'/Esc to cancel",
        note_id, shown
    );

    let paragraph = Paragraph::new(message)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(DIALOG_TITLE_DELETE)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, dialog_area);
}
