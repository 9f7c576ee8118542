//! Alert pane: the active alert, or a placeholder when there is none.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::{ALERT_PANE_PADDING, MIN_WRAP_WIDTH, NO_ALERTS_LABEL};
use crate::models::Alert;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use crate::utils::{display_headline, format_timestamp};

pub fn render_alert(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(t.border_style());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner = Rect {
        x: inner.x + ALERT_PANE_PADDING.min(inner.width),
        width: inner.width.saturating_sub(ALERT_PANE_PADDING * 2),
        ..inner
    };

    let Some(alert) = state.active_alert() else {
        let top = inner.height / 2;
        let mut lines = vec![Line::raw(""); top as usize];
        lines.push(Line::from(Span::styled(NO_ALERTS_LABEL, t.dim_style())));
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        return;
    };

    let lines = alert_lines(alert, t, inner.width as usize);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Screen lines for one alert, description and instruction pre-wrapped to `width`.
pub fn alert_lines<'a>(alert: &'a Alert, t: &Theme, width: usize) -> Vec<Line<'a>> {
    let wrap_width = width.max(MIN_WRAP_WIDTH);
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" *** {} *** ", display_headline(&alert.headline)),
            t.headline_style(),
        )),
        Line::from(vec![
            Span::styled("Issued by ", t.body_style()),
            Span::styled(alert.issuer.as_str(), t.emphasis_style()),
            Span::styled(" on ", t.body_style()),
            Span::styled(format_timestamp(alert.effective), t.emphasis_style()),
        ]),
        Line::from(vec![
            Span::styled("Effective until ", t.body_style()),
            Span::styled(format_timestamp(alert.expires), t.expiry_style()),
            Span::styled(".", t.body_style()),
        ]),
        Line::raw(""),
    ];

    if !alert.areas.is_empty() {
        let mut spans = vec![Span::styled("For ", t.body_style())];
        for (i, name) in alert.area_names().enumerate() {
            if i > 0 {
                spans.push(Span::styled(", ", t.body_style()));
            }
            spans.push(Span::styled(name, t.emphasis_style()));
        }
        spans.push(Span::styled(".", t.body_style()));
        lines.push(Line::from(spans));
        lines.push(Line::raw(""));
    }

    push_wrapped(&mut lines, &alert.description, wrap_width, t.body_style());
    push_wrapped(&mut lines, &alert.instruction, wrap_width, t.emphasis_style());

    lines
}

/// Wrapped paragraph followed by a blank line; nothing for empty text.
fn push_wrapped(lines: &mut Vec<Line<'_>>, text: &str, width: usize, style: Style) {
    if text.trim().is_empty() {
        return;
    }
    for line in textwrap::wrap(text, width) {
        lines.push(Line::from(Span::styled(line.into_owned(), style)));
    }
    lines.push(Line::raw(""));
}
