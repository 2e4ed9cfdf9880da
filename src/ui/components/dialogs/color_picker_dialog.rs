//! Color picker dialog

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::common::{self, shortcuts};
use crate::constants::DIALOG_TITLE_COLOR;
use crate::ui::layout::LayoutManager;
use crate::utils::color::{self, NOTE_COLORS};

pub fn render(f: &mut Frame, area: Rect, selected_index: usize) {
    let height = NOTE_COLORS.len() as u16 + 4;
    let dialog_area = LayoutManager::centered_rect_lines(40, height, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(DIALOG_TITLE_COLOR)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan));

    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let lines: Vec<Line> = NOTE_COLORS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let swatch = Span::styled("  ", Style::default().bg(color::note_background(name)));
            let label = if i == selected_index {
                Span::styled(
                    format!(" ▶ {}", name),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!("   {}", name), Style::default().fg(Color::Gray))
            };
            Line::from(vec![swatch, label])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Left), chunks[0]);

    let instructions = common::create_instructions_paragraph(&[
        ("j/k", Color::Cyan, " Select"),
        shortcuts::SEPARATOR,
        ("Enter", Color::Green, " Apply"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[1]);
}
