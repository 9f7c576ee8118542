//! Renderer module: split into focused submodules.
//!
//! - `alert`: The active alert (headline banner, issuer, times, areas, text)
//! - `status_bar`: Bottom status bar with position and keybinds

mod alert;
mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::state::AppState;

/// Top-level render function: alert pane above a one-line status bar.
pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Alert pane
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    alert::render_alert(frame, chunks[0], state);
    status_bar::render_status_bar(frame, chunks[1], state);
}
