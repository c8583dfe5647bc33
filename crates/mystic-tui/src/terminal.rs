//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::Instant;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use crate::app::OrbApp;
use crate::error::TuiResult;

/// Launch the TUI application.
pub fn run(mut app: OrbApp) -> TuiResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);
    app.shutdown();

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop: advance timers, draw, then wait for input or the next frame.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut OrbApp,
) -> TuiResult<()> {
    loop {
        let now = Instant::now();
        if let Some(fortune) = app.on_tick(now) {
            tracing::info!(fortune, "the orb has spoken");
        }
        terminal.draw(|frame| app.draw(frame, now))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(app.next_timeout(Instant::now()))? {
            let event = event::read()?;
            handle_event(app, event);
        }
    }
}

/// Handle a crossterm event.
fn handle_event(app: &mut OrbApp, event: Event) {
    let now = Instant::now();
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key, now),
        Event::Mouse(mouse) => app.handle_mouse(mouse, now),
        Event::Resize(width, height) => tracing::debug!(width, height, "terminal resized"),
        _ => {}
    }
}
