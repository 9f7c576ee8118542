//! Status bar at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::state::AppState;
use crate::utils::truncate_str;

pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;

    // Helper to create a keybind badge
    let badge = |key: &str| -> Span {
        Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(t.bg_dark)
                .bg(t.accent)
                .add_modifier(Modifier::BOLD),
        )
    };
    let hint = |text: &str| -> Span { Span::styled(text.to_string(), t.muted_style()) };

    let status = state.status_text();
    let mut spans = vec![Span::styled(
        format!(" {} ", truncate_str(&status, area.width.saturating_sub(2) as usize)),
        t.title_style(),
    )];

    if state.nav.count() > 1 {
        spans.push(badge("←↑"));
        spans.push(hint(" Prev "));
        spans.push(badge("→↓"));
        spans.push(hint(" Next "));
    }
    spans.push(badge("q"));
    spans.push(hint(" Quit "));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
