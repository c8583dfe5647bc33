//! The magic 8-ball widget.
//!
//! Renders a glossy sphere with an inner window. The window shows the "8"
//! glyph when idle, a pulsing dot while the orb shakes, and the fortune inside
//! a triangle once revealed. The widget holds no state of its own; the shake
//! animation is driven by the frame number the caller passes in.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use mystic_core::Sentiment;

use crate::shared::{CYAN, ICE, LAVENDER, ROSE};

/// Largest sphere height in rows.
const MAX_DIAMETER: u16 = 15;
/// Below this height the sphere collapses to a single text line.
const MIN_DIAMETER: u16 = 5;
/// Inner window radius as a fraction of the sphere radius.
const WINDOW_RADIUS: f32 = 0.6;
/// Text box size as a fraction of the sphere, inscribed in the window.
const TEXT_EXTENT: f32 = 0.42;
/// Horizontal offsets (cells) of the shake keyframes.
const SHAKE_OFFSETS: [i32; 4] = [0, -2, 2, -1];
/// Frames of the pulsing dot.
const PULSE: [&str; 4] = ["\u{b7}", "\u{2022}", "\u{25cf}", "\u{2022}"];

/// Request emitted when the orb is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbEvent {
    /// Shake the orb and reveal a fortune.
    Shake,
}

/// Magic 8-ball widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrbWidget<'a> {
    fortune: Option<&'a str>,
    is_revealing: bool,
    disabled: bool,
    frame: u64,
}

impl<'a> OrbWidget<'a> {
    /// Accessible label for the orb.
    pub const LABEL: &'static str = "Shake the magic 8 ball";

    /// Create an idle, enabled orb.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the revealed fortune.
    pub fn fortune(mut self, fortune: Option<&'a str>) -> Self {
        self.fortune = fortune;
        self
    }

    /// Set whether the orb is shaking.
    pub fn revealing(mut self, is_revealing: bool) -> Self {
        self.is_revealing = is_revealing;
        self
    }

    /// Set whether the orb ignores activation.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the animation frame number.
    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    /// Activate the orb (click or Enter). Yields one event unless disabled or shaking.
    pub fn activate(&self) -> Option<OrbEvent> {
        if self.disabled || self.is_revealing {
            None
        } else {
            Some(OrbEvent::Shake)
        }
    }

    /// Whether the cell at (`column`, `row`) lies on the sphere drawn in `area`.
    pub fn hit_test(area: Rect, column: u16, row: u16) -> bool {
        let sphere = sphere_rect(area);
        if !sphere.contains(Position::new(column, row)) {
            return false;
        }
        if sphere.height < MIN_DIAMETER {
            return true;
        }
        let (dx, dy) = normalized(sphere, column - sphere.x, row - sphere.y);
        dx * dx + dy * dy <= 1.0
    }

    fn shake_offset(&self) -> i32 {
        if self.is_revealing {
            SHAKE_OFFSETS[(self.frame % SHAKE_OFFSETS.len() as u64) as usize]
        } else {
            0
        }
    }

    fn dim(&self, (r, g, b): (u8, u8, u8)) -> Color {
        if self.disabled {
            Color::Rgb(r / 2, g / 2, b / 2)
        } else {
            Color::Rgb(r, g, b)
        }
    }

    fn fortune_color(&self, fortune: &str) -> Color {
        let tint = match Sentiment::of(fortune) {
            Some(Sentiment::Negative) => ROSE,
            Some(Sentiment::Neutral) => LAVENDER,
            _ => ICE,
        };
        self.dim(tint)
    }

    fn body_color(&self, dx: f32, dy: f32) -> Color {
        let r2 = dx * dx + dy * dy;
        if r2 <= WINDOW_RADIUS * WINDOW_RADIUS {
            return self.window_color(dx, dy);
        }
        let highlight = (dx + 0.45).powi(2) + (dy + 0.55).powi(2);
        if highlight < 0.03 {
            return self.dim((110, 110, 120));
        }
        let light = ((-dx - dy) * 0.5 + 0.5).clamp(0.0, 1.0);
        let shade = (8.0 + 40.0 * light) as u8;
        self.dim((shade, shade, shade.saturating_add(6)))
    }

    fn window_color(&self, dx: f32, dy: f32) -> Color {
        if self.is_revealing {
            let quadrant = (dy.atan2(dx) / std::f32::consts::TAU * 4.0).floor() as i64;
            if (quadrant + self.frame as i64).rem_euclid(4) == 0 {
                return self.dim((30, 58, 138));
            }
        }
        self.dim((30, 27, 75))
    }

    fn render_compact(&self, area: Rect, buf: &mut Buffer) {
        let (text, color) = match (self.fortune, self.is_revealing) {
            (_, true) => (format!("( {} )", self.pulse()), self.dim(CYAN)),
            (Some(f), false) => (format!("( {} )", f.to_uppercase()), self.fortune_color(f)),
            (None, false) => ("( 8 )".to_string(), self.dim((200, 200, 210))),
        };
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color))
            .render(row, buf);
    }

    fn pulse(&self) -> &'static str {
        PULSE[(self.frame % PULSE.len() as u64) as usize]
    }
}

impl Widget for OrbWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sphere = sphere_rect(area);
        if sphere.height < MIN_DIAMETER {
            self.render_compact(area, buf);
            return;
        }

        let text_w = (f32::from(sphere.width) * TEXT_EXTENT).round() as u16;
        let text_h = ((f32::from(sphere.height) * TEXT_EXTENT).round() as u16).max(1);
        let wrapped = match (self.fortune, self.is_revealing) {
            (Some(fortune), false) => {
                let Some(lines) = fit_fortune(fortune, text_w, text_h) else {
                    self.render_compact(area, buf);
                    return;
                };
                Some(lines)
            }
            _ => None,
        };

        let max_x = i32::from(area.right()) - i32::from(sphere.width);
        let shifted_x = (i32::from(sphere.x) + self.shake_offset()).clamp(i32::from(area.x), max_x);
        let sphere = Rect {
            x: shifted_x as u16,
            ..sphere
        };

        for row in 0..sphere.height {
            for column in 0..sphere.width {
                let (dx, dy) = normalized(sphere, column, row);
                if dx * dx + dy * dy > 1.0 {
                    continue;
                }
                let color = self.body_color(dx, dy);
                if let Some(cell) = buf.cell_mut((sphere.x + column, sphere.y + row)) {
                    cell.set_char(' ').set_bg(color);
                }
            }
        }

        let text_area = Rect::new(
            sphere.x + (sphere.width - text_w) / 2,
            sphere.y + (sphere.height - text_h) / 2,
            text_w,
            text_h,
        );
        let center = Rect::new(sphere.x, sphere.y + sphere.height / 2, sphere.width, 1);

        match (self.fortune, wrapped) {
            (Some(fortune), Some(wrapped)) => {
                let color = self.fortune_color(fortune);
                let triangle = Style::default().fg(self.dim((139, 92, 246)));
                let mut lines = vec![Line::from("\u{25b2}").style(triangle)];
                lines.extend(
                    wrapped
                        .into_iter()
                        .map(|l| Line::from(l).style(Style::default().fg(color))),
                );
                let height = lines.len() as u16;
                let block = Rect::new(
                    text_area.x,
                    text_area.y + (text_area.height - height) / 2,
                    text_area.width,
                    height,
                );
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .render(block, buf);
            }
            _ if self.is_revealing => {
                Paragraph::new(self.pulse())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(self.dim(CYAN)).bold())
                    .render(center, buf);
            }
            _ => {
                Paragraph::new("8")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(self.dim((200, 200, 210))).bold())
                    .render(center, buf);
            }
        }

        if sphere.bottom() < area.bottom() {
            let label = Rect::new(area.x, sphere.bottom(), area.width, 1);
            Paragraph::new(Self::LABEL)
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.dim((90, 80, 120))))
                .render(label, buf);
        }
    }
}

/// The sphere's bounding box within `area`: `d` rows by `2d` columns, centered.
pub fn sphere_rect(area: Rect) -> Rect {
    let label_row = u16::from(area.height > MIN_DIAMETER);
    let diameter = (area.height - label_row)
        .min(area.width / 2)
        .min(MAX_DIAMETER);
    let width = diameter * 2;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - label_row - diameter) / 2,
        width,
        diameter,
    )
}

/// Cell center in sphere coordinates, both axes in -1.0..=1.0.
fn normalized(sphere: Rect, column: u16, row: u16) -> (f32, f32) {
    let dx = (f32::from(column) + 0.5) / f32::from(sphere.width) * 2.0 - 1.0;
    let dy = (f32::from(row) + 0.5) / f32::from(sphere.height) * 2.0 - 1.0;
    (dx, dy)
}

/// Wrapped fortune lines when they fit a `width` x `height` window below the
/// triangle marker. Words are never split.
fn fit_fortune(fortune: &str, width: u16, height: u16) -> Option<Vec<String>> {
    let width = usize::from(width);
    if fortune.split_whitespace().any(|w| w.chars().count() > width) {
        return None;
    }
    let lines = wrap_words(&fortune.to_uppercase(), width);
    (lines.len() < usize::from(height)).then_some(lines)
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
