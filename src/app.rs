//! Application struct and event loop.
//!
//! Owns the terminal and the [`AppState`]. Each iteration draws, blocks on a
//! single terminal event, and applies at most one navigation command.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::config::Config;
use crate::models::AlertCollection;
use crate::navigation::Command;
use crate::ui::{self, AppState, Theme};

/// Main application struct.
pub struct App {
    state: AppState,
}

impl App {
    pub fn new(config: &Config, alerts: AlertCollection) -> Self {
        let theme = Theme::resolve(&config.theme);
        Self {
            state: AppState::new(alerts, theme, config.title.clone()),
        }
    }

    /// Run the main event loop. Returns when the user quits.
    ///
    /// The terminal is restored on every exit path; an error from the loop
    /// takes precedence over one from the restore.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let result = self.run_on_alternate_screen();
        let restored = restore_terminal();
        result.and(restored)
    }

    fn run_on_alternate_screen(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        info!(alerts = self.state.alerts.len(), "entering interactive loop");
        self.event_loop(&mut terminal)
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.state.should_quit() {
            terminal.draw(|frame| ui::render(frame, &self.state))?;

            // Blocks until the next event; resize falls through to a redraw.
            match event::read()? {
                Event::Key(key) => {
                    if let Some(command) = command_for_key(key) {
                        self.state.apply(command);
                    }
                }
                Event::Resize(width, height) => debug!(width, height, "terminal resized"),
                _ => {}
            }
        }
        info!("quit requested");
        Ok(())
    }
}

/// Leave raw mode and the alternate screen. Every step is attempted; the
/// first failure is returned.
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let screen = leave_screen(&mut io::stdout());
    raw?;
    screen?;
    Ok(())
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

/// Decode a key press into a navigation command. Unmapped keys yield `None`.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Left | KeyCode::Up | KeyCode::Backspace | KeyCode::Delete => {
            Some(Command::Previous)
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Enter => Some(Command::Next),
        KeyCode::Esc
        | KeyCode::Char('q')
        | KeyCode::Char('Q')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn previous_keys() {
        for code in [KeyCode::Left, KeyCode::Up, KeyCode::Backspace, KeyCode::Delete] {
            assert_eq!(command_for_key(press(code)), Some(Command::Previous));
        }
    }

    #[test]
    fn next_keys() {
        for code in [KeyCode::Right, KeyCode::Down, KeyCode::Enter] {
            assert_eq!(command_for_key(press(code)), Some(Command::Next));
        }
    }

    #[test]
    fn quit_keys() {
        for c in ['q', 'Q', 'x', 'X'] {
            assert_eq!(command_for_key(press(KeyCode::Char(c))), Some(Command::Quit));
        }
        assert_eq!(command_for_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        for code in [KeyCode::Char('a'), KeyCode::Char('c'), KeyCode::Tab, KeyCode::Home] {
            assert_eq!(command_for_key(press(code)), None);
        }
    }

    #[test]
    fn key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(command_for_key(release), None);
    }

    #[test]
    fn leave_screen_restores_screen_and_cursor() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "{:?}", written);
        assert!(written.contains("\x1b[?25h"), "{:?}", written);
    }

    #[test]
    fn app_starts_on_first_alert() {
        let alerts = AlertCollection::new(vec![
            crate::models::Alert::default(),
            crate::models::Alert::default(),
        ]);
        let app = App::new(&Config::default(), alerts);
        assert_eq!(app.state.nav.position(), Some((1, 2)));
        assert_eq!(app.state.theme.name, "default");
    }
}
