//! Question field.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::editor::LineEditor;
use crate::shared::{CYAN, LAVENDER, PURPLE, fade, rgb};

/// Placeholder shown while the field is empty.
pub const PLACEHOLDER: &str = "Ask the orb your question...";

/// Draw the question field and place the terminal cursor.
pub fn draw(frame: &mut Frame, editor: &LineEditor, area: Rect) {
    let has_question = !editor.text().trim().is_empty();
    let border = if has_question {
        fade(CYAN, 0.5)
    } else {
        fade(PURPLE, 0.4)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));

    let inner_width = usize::from(area.width.saturating_sub(2));
    let column = editor.cursor_column();
    let scroll = column.saturating_sub(inner_width.saturating_sub(1));

    let content = if editor.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(fade(PURPLE, 0.45))))
    } else {
        let visible: String = editor.text().chars().skip(scroll).collect();
        Line::from(Span::styled(visible, Style::default().fg(rgb(LAVENDER))))
    };
    frame.render_widget(Paragraph::new(content).block(block), area);

    let cursor_x = area.x + 1 + (column - scroll) as u16;
    let cursor_y = area.y + 1;
    if cursor_x < area.right().saturating_sub(1) {
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}
