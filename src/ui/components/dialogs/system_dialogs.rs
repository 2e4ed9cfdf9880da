use super::scroll_state::ScrollState;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation},
    Frame,
};

pub fn render_info_dialog(f: &mut Frame, area: Rect, message: &str, scroll: &mut ScrollState) {
    render_message_dialog(f, area, "ℹ️  Info", Color::Blue, 60, 10, message, scroll);
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, message: &str, scroll: &mut ScrollState) {
    render_message_dialog(f, area, "❌ Error", Color::Red, 70, 12, message, scroll);
}

#[allow(clippy::too_many_arguments)]
fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    theme_color: Color,
    percent_x: u16,
    height_lines: u16,
    message: &str,
    scroll: &mut ScrollState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(percent_x, height_lines, area);
    f.render_widget(Clear, dialog_area);

    let instructions = "Press any key to continue • j/k to scroll if needed";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().fg(theme_color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height as usize;

    let message_text = if total_lines > visible_height {
        let offset = scroll.clamp_to(total_lines, visible_height);
        let visible_lines: Vec<&str> = lines.iter().skip(offset).take(visible_height).copied().collect();
        visible_lines.join("\n")
    } else {
        message.to_string()
    };

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(ratatui::widgets::Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if total_lines > visible_height {
        f.render_stateful_widget(dialog_scrollbar(), content_area, scroll.bar_mut());
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut ScrollState) {
    let help_content = r"
STICKIES - Sticky Notes for the Terminal
========================================

GLOBAL
------
Ctrl+N      Create a new note
Ctrl+L      Toggle the notes list
Tab         Focus next note window
Shift+Tab   Focus previous note window
F1          Toggle this help panel
Ctrl+Q      Quit
Ctrl+C      Quit

NOTE WINDOW
-----------
(type)      Edit the note; every change is saved immediately
Enter       New line
Ctrl+G      Change note color
Ctrl+E      Export note to a file
Ctrl+D      Delete note (with confirmation)
Ctrl+W      Close this window (note stays in the store)
Arrows      Move the cursor
Home/End    Jump to start/end of line

NOTES LIST
----------
j/k or ↑↓   Move the selection
Enter       Open the selected note
d           Delete the selected note (with confirmation)
Esc         Close the list

HELP PANEL SCROLLING
--------------------
j/k         Scroll help content down/up
PageUp/Down Page through help content
Home        Jump to top of help
End         Jump to bottom of help

Notes are kept in a local database and reopened on startup.

Press 'Esc' or F1 to close this help panel
";

    let help_area = LayoutManager::centered_rect(80, 90, area);
    f.render_widget(Clear, help_area);

    let margin_x = 2;
    let margin_y = 1;
    let help_content_area = Rect::new(
        help_area.x + margin_x,
        help_area.y + margin_y,
        help_area.width.saturating_sub(margin_x * 2),
        help_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = help_content.lines().collect();
    let total_lines = lines.len();
    let visible_height = help_content_area.height.saturating_sub(2) as usize;

    let offset = scroll.clamp_to(total_lines, visible_height);
    let visible_lines: Vec<&str> = lines.iter().skip(offset).take(visible_height).copied().collect();
    let help_text = visible_lines.join("\n");

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("📖 Help - Press 'Esc' or F1 to close")
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_content_area);

    if total_lines > visible_height {
        f.render_stateful_widget(dialog_scrollbar(), help_content_area, scroll.bar_mut());
    }
}

fn dialog_scrollbar() -> Scrollbar<'static> {
    Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White))
}
