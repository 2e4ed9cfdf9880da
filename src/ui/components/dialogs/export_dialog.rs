//! Export note dialog

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::common::{self, shortcuts};
use crate::constants::DIALOG_TITLE_EXPORT;
use crate::ui::layout::LayoutManager;

pub fn render(f: &mut Frame, area: Rect, note_id: i32, input_buffer: &str, cursor_position: usize) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} — note {}", DIALOG_TITLE_EXPORT, note_id))
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green));

    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let input = Paragraph::new(input_buffer)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" File path ")
                .style(Style::default().fg(Color::Gray)),
        )
        .style(Style::default().fg(Color::White));
    f.render_widget(input, chunks[0]);

    f.set_cursor_position((chunks[0].x + 1 + cursor_position as u16, chunks[0].y + 1));

    let instructions = common::create_instructions_paragraph(&[
        ("Enter", Color::Green, " Export"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[1]);
}
