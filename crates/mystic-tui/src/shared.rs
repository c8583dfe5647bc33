//! Shared layout helpers, palette, and the help popup.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Background behind everything.
pub const BACKGROUND: (u8, u8, u8) = (10, 10, 15);
/// Violet accent.
pub const PURPLE: (u8, u8, u8) = (168, 85, 247);
/// Cyan accent.
pub const CYAN: (u8, u8, u8) = (34, 211, 238);
/// Soft violet used for body text.
pub const LAVENDER: (u8, u8, u8) = (196, 181, 253);
/// Rose used for negative fortunes.
pub const ROSE: (u8, u8, u8) = (251, 113, 133);
/// Pale cyan used for positive fortunes.
pub const ICE: (u8, u8, u8) = (165, 243, 252);

/// Convert an RGB triple to a terminal color.
pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Blend `color` over the background; `amount` 0.0 is pure background, 1.0 pure color.
pub fn fade((r, g, b): (u8, u8, u8), amount: f32) -> Color {
    let (br, bg, bb) = BACKGROUND;
    let t = amount.clamp(0.0, 1.0);
    let mix = |from: u8, to: u8| (f32::from(from) + (f32::from(to) - f32::from(from)) * t) as u8;
    Color::Rgb(mix(br, r), mix(bg, g), mix(bb, b))
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A rectangle of at most `width` columns, horizontally centered in `r`.
pub fn centered_columns(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    Rect::new(r.x + (r.width - width) / 2, r.y, width, r.height)
}

/// Draw the help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    let help_text = vec![
        Line::from("Mystic 8").style(Style::default().bold()),
        Line::from(""),
        Line::from("  Type        Ask the orb a question"),
        Line::from("  Enter       Shake the orb"),
        Line::from("  Click       Shake the orb"),
        Line::from("  Esc         Clear the question / close help"),
        Line::from("  \u{2190} / \u{2192}       Move cursor"),
        Line::from("  Home / End  Jump to start / end"),
        Line::from(""),
        Line::from("  ?           Toggle this help (empty question)"),
        Line::from("  Ctrl+C      Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(rgb(CYAN))),
        )
        .style(Style::default().fg(Color::White).bg(rgb(BACKGROUND)));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
