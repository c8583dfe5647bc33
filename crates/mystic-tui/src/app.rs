//! Top-level application state: the session controller plus view state.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use mystic_core::{OrbConfig, SessionController, Starfield, TriggerOutcome};

use crate::editor::LineEditor;
use crate::shared::{CYAN, LAVENDER, PURPLE, centered_columns, fade, rgb};
use crate::views::{self, OrbWidget, StarfieldWidget};

/// Length of one shake keyframe.
const SHAKE_FRAME_MS: u128 = 125;
/// Widest the question field grows.
const INPUT_WIDTH: u16 = 56;
/// Title text.
const TITLE: &str = "M Y S T I C   8";
/// Subtitle text.
const SUBTITLE: &str = "P E E R   I N T O   T H E   V O I D";

/// Main application state.
pub struct OrbApp {
    /// Owner of the question, shaking flag, and revealed fortune.
    pub controller: SessionController,
    /// Question field contents and cursor.
    pub editor: LineEditor,
    /// Background particles, generated once.
    pub starfield: Starfield,
    /// Whether the help popup is visible.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    started: Instant,
    frame_interval: Duration,
    /// Area the orb was last drawn into, for mouse hit testing.
    orb_area: Rect,
}

impl OrbApp {
    /// Create the app. The starfield and the fortunes share one random stream.
    pub fn new(config: &OrbConfig, now: Instant) -> Self {
        let mut rng = config.rng();
        let starfield = Starfield::generate(&mut rng);
        Self {
            controller: SessionController::with_rng(rng),
            editor: LineEditor::new(),
            starfield,
            show_help: false,
            should_quit: false,
            started: now,
            frame_interval: config.frame_interval(),
            orb_area: Rect::default(),
        }
    }

    /// The orb widget as it should look at `now`.
    pub fn orb_widget(&self, now: Instant) -> OrbWidget<'static> {
        let elapsed = now.saturating_duration_since(self.started).as_millis();
        OrbWidget::new()
            .fortune(self.controller.revealed_fortune())
            .revealing(self.controller.is_revealing())
            .disabled(!self.controller.state().has_question())
            .frame((elapsed / SHAKE_FRAME_MS) as u64)
    }

    /// Activate the orb. Returns `None` when the orb is disabled or already shaking.
    pub fn shake(&mut self, now: Instant) -> Option<TriggerOutcome> {
        self.orb_widget(now).activate()?;
        Some(self.controller.trigger(now))
    }

    /// Advance timers: completes a due reveal.
    pub fn on_tick(&mut self, now: Instant) -> Option<&'static str> {
        self.controller.poll(now)
    }

    /// How long the event loop may block before the next frame or reveal.
    pub fn next_timeout(&self, now: Instant) -> Duration {
        match self.controller.time_until_reveal(now) {
            Some(remaining) => remaining.min(self.frame_interval),
            None => self.frame_interval,
        }
    }

    /// Tear down the session.
    pub fn shutdown(&mut self) {
        self.controller.shutdown();
    }

    fn sync_question(&mut self) {
        self.controller.set_question(self.editor.text());
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                } else if self.editor.clear() {
                    self.sync_question();
                }
            }
            KeyCode::Enter => {
                self.shake(now);
            }
            KeyCode::Backspace => {
                if self.editor.backspace() {
                    self.sync_question();
                }
            }
            KeyCode::Delete => {
                if self.editor.delete_char() {
                    self.sync_question();
                }
            }
            KeyCode::Left => self.editor.cursor_left(),
            KeyCode::Right => self.editor.cursor_right(),
            KeyCode::Home => self.editor.cursor_home(),
            KeyCode::End => self.editor.cursor_end(),
            KeyCode::Char('?') if self.editor.is_empty() => {
                self.show_help = !self.show_help;
            }
            KeyCode::Char(c) if !ctrl => {
                self.editor.push_char(c);
                self.sync_question();
            }
            _ => {}
        }
    }

    /// Handle a mouse event. A left click on the sphere shakes the orb.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && OrbWidget::hit_test(self.orb_area, mouse.column, mouse.row)
        {
            self.shake(now);
        }
    }

    /// Context-sensitive status bar text.
    pub fn status_hint(&self) -> &'static str {
        if self.controller.is_revealing() {
            "The orb is thinking...  Ctrl+C:quit"
        } else if self.controller.can_trigger() {
            "Enter/click:shake  Esc:clear  Ctrl+C:quit"
        } else {
            "type:ask  ?:help  Ctrl+C:quit"
        }
    }

    /// Draw the whole screen as it looks at `now`.
    pub fn draw(&mut self, frame: &mut Frame, now: Instant) {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        frame.render_widget(StarfieldWidget::new(&self.starfield, elapsed), frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Padding
                Constraint::Length(1), // Title
                Constraint::Length(1), // Subtitle
                Constraint::Length(1), // Padding
                Constraint::Length(3), // Question
                Constraint::Min(3),    // Orb
                Constraint::Length(1), // Instruction
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(shimmer(TITLE, elapsed)).alignment(Alignment::Center),
            chunks[1],
        );
        frame.render_widget(
            Paragraph::new(SUBTITLE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(fade(LAVENDER, 0.6))),
            chunks[2],
        );

        views::input::draw(frame, &self.editor, centered_columns(INPUT_WIDTH, chunks[4]));

        self.orb_area = chunks[5];
        frame.render_widget(self.orb_widget(now), chunks[5]);

        let instruction = if self.controller.state().has_question() {
            "Click the orb to reveal your fate"
        } else {
            "Enter your question above"
        };
        let pulse = ((elapsed * std::f32::consts::PI).sin() + 1.0) / 2.0;
        frame.render_widget(
            Paragraph::new(instruction)
                .alignment(Alignment::Center)
                .style(Style::default().fg(fade(LAVENDER, 0.3 + 0.4 * pulse))),
            chunks[6],
        );

        let status = Paragraph::new(self.status_hint())
            .style(Style::default().fg(Color::Black).bg(Color::White));
        frame.render_widget(status, chunks[7]);

        if self.show_help {
            crate::shared::draw_help_popup(frame);
        }
    }
}

/// Title with a purple/cyan gradient that slides over time.
fn shimmer(text: &str, elapsed: f32) -> Line<'static> {
    let spans: Vec<Span<'static>> = text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let t = ((i as f32 * 0.4 - elapsed * 1.5).sin() + 1.0) / 2.0;
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8;
            let color = (mix(PURPLE.0, CYAN.0), mix(PURPLE.1, CYAN.1), mix(PURPLE.2, CYAN.2));
            Span::styled(c.to_string(), Style::default().fg(rgb(color)).bold())
        })
        .collect();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mystic_core::{FORTUNES, IgnoreReason, Phase, REVEAL_DELAY};
    use ratatui::backend::TestBackend;

    fn app() -> (OrbApp, Instant) {
        let now = Instant::now();
        (OrbApp::new(&OrbConfig::default().with_seed(42), now), now)
    }

    fn press(app: &mut OrbApp, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_text(app: &mut OrbApp, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    fn screen(app: &mut OrbApp, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 32)).unwrap();
        terminal.draw(|f| app.draw(f, now)).unwrap();
        let buf = terminal.backend().buffer();
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn typing_updates_question() {
        let (mut app, now) = app();
        type_text(&mut app, "Will it rain?", now);
        assert_eq!(app.controller.question(), "Will it rain?");
        press(&mut app, KeyCode::Backspace, now);
        assert_eq!(app.controller.question(), "Will it rain");
        press(&mut app, KeyCode::Esc, now);
        assert_eq!(app.controller.question(), "");
    }

    #[test]
    fn enter_with_blank_question_does_nothing() {
        let (mut app, now) = app();
        type_text(&mut app, "   ", now);
        press(&mut app, KeyCode::Enter, now);
        assert!(!app.controller.is_revealing());
        assert_eq!(app.controller.revealed_fortune(), None);
        assert_eq!(app.shake(now), None);
    }

    #[test]
    fn enter_runs_a_reveal_cycle() {
        let (mut app, now) = app();
        type_text(&mut app, "Will it rain?", now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.controller.phase(), Phase::Revealing);
        assert_eq!(app.controller.revealed_fortune(), None);

        press(&mut app, KeyCode::Enter, now + Duration::from_millis(200));
        assert_eq!(app.controller.reveal_due(), Some(now + REVEAL_DELAY));

        assert_eq!(app.on_tick(now + Duration::from_millis(1000)), None);
        let fortune = app.on_tick(now + REVEAL_DELAY).unwrap();
        assert!(FORTUNES.contains(&fortune));
        assert_eq!(app.controller.phase(), Phase::Revealed);
    }

    #[test]
    fn controller_guard_still_applies() {
        let (mut app, now) = app();
        type_text(&mut app, "Twice?", now);
        app.shake(now);
        assert_eq!(
            app.controller.trigger(now),
            TriggerOutcome::Ignored(IgnoreReason::AlreadyRevealing)
        );
    }

    #[test]
    fn question_mark_toggles_help_only_when_empty() {
        let (mut app, now) = app();
        press(&mut app, KeyCode::Char('?'), now);
        assert!(app.show_help);
        press(&mut app, KeyCode::Esc, now);
        assert!(!app.show_help);

        type_text(&mut app, "Why", now);
        press(&mut app, KeyCode::Char('?'), now);
        assert!(!app.show_help);
        assert_eq!(app.controller.question(), "Why?");
    }

    #[test]
    fn ctrl_c_quits() {
        let (mut app, now) = app();
        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            now,
        );
        assert!(app.should_quit);
        assert_eq!(app.controller.question(), "");
    }

    #[test]
    fn timeout_shrinks_near_reveal() {
        let (mut app, now) = app();
        assert_eq!(app.next_timeout(now), Duration::from_millis(50));
        type_text(&mut app, "Now?", now);
        app.shake(now);
        let almost = now + REVEAL_DELAY - Duration::from_millis(10);
        assert_eq!(app.next_timeout(almost), Duration::from_millis(10));
    }

    #[test]
    fn draw_shows_title_placeholder_and_orb() {
        let (mut app, now) = app();
        let text = screen(&mut app, now);
        assert!(text.contains(TITLE));
        assert!(text.contains(views::input::PLACEHOLDER));
        assert!(text.contains("Enter your question above"));
        assert!(text.contains(OrbWidget::LABEL));
    }

    #[test]
    fn click_on_orb_shakes_it() {
        let (mut app, now) = app();
        type_text(&mut app, "Click?", now);
        screen(&mut app, now);

        let sphere = views::orb::sphere_rect(app.orb_area);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: sphere.x + sphere.width / 2,
            row: sphere.y + sphere.height / 2,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click, now);
        assert!(app.controller.is_revealing());
    }

    #[test]
    fn click_outside_orb_is_ignored() {
        let (mut app, now) = app();
        type_text(&mut app, "Miss?", now);
        screen(&mut app, now);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click, now);
        assert!(!app.controller.is_revealing());
    }

    #[test]
    fn revealed_fortune_is_drawn() {
        let (mut app, now) = app();
        type_text(&mut app, "Will it rain?", now);
        app.shake(now);
        let later = now + REVEAL_DELAY;
        let fortune = app.on_tick(later).unwrap();
        let text = screen(&mut app, later);
        let first_word = fortune.split_whitespace().next().unwrap().to_uppercase();
        assert!(text.contains(&first_word));
    }
}
