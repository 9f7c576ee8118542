use crate::constants::NO_ALERTS_LABEL;
use crate::models::{Alert, AlertCollection};
use crate::navigation::{Command, Navigator};

use super::theme::Theme;

/// Everything the render pass reads, threaded through the event loop.
///
/// The collection is fixed for the run; only the navigator moves.
#[derive(Debug)]
pub struct AppState {
    pub alerts: AlertCollection,
    pub nav: Navigator,
    pub theme: Theme,
    /// Label at the left of the status bar.
    pub title: String,
}

impl AppState {
    pub fn new(alerts: AlertCollection, theme: Theme, title: String) -> Self {
        let nav = Navigator::new(alerts.len());
        Self {
            alerts,
            nav,
            theme,
            title,
        }
    }

    /// The alert under the cursor, or `None` when there is nothing to show.
    pub fn active_alert(&self) -> Option<&Alert> {
        self.nav.active_index().and_then(|i| self.alerts.get(i))
    }

    pub fn apply(&mut self, command: Command) {
        self.nav.apply(command);
    }

    pub fn should_quit(&self) -> bool {
        self.nav.is_exited()
    }

    /// `"<title> | i of n"` or `"<title> | No active alerts"`.
    pub fn status_text(&self) -> String {
        let position = match self.nav.position() {
            Some((current, total)) => format!("{} of {}", current, total),
            None => NO_ALERTS_LABEL.to_string(),
        };
        if self.title.is_empty() {
            position
        } else {
            format!("{} | {}", self.title, position)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_alert(headline: &str) -> Alert {
        Alert {
            headline: headline.to_string(),
            ..Alert::default()
        }
    }

    fn make_state(n: usize) -> AppState {
        let alerts = (0..n).map(|i| make_alert(&format!("alert {}", i))).collect();
        AppState::new(
            AlertCollection::new(alerts),
            Theme::default_dark(),
            "Canada Alert System".to_string(),
        )
    }

    #[test]
    fn active_alert_follows_navigation() {
        let mut s = make_state(3);
        assert_eq!(s.active_alert().unwrap().headline, "alert 0");
        s.apply(Command::Next);
        s.apply(Command::Next);
        assert_eq!(s.active_alert().unwrap().headline, "alert 2");
        s.apply(Command::Previous);
        assert_eq!(s.active_alert().unwrap().headline, "alert 1");
    }

    #[test]
    fn status_text_shows_position() {
        let mut s = make_state(3);
        assert_eq!(s.status_text(), "Canada Alert System | 1 of 3");
        s.apply(Command::Next);
        assert_eq!(s.status_text(), "Canada Alert System | 2 of 3");
    }

    #[test]
    fn empty_state() {
        let mut s = make_state(0);
        assert!(s.active_alert().is_none());
        assert_eq!(s.status_text(), "Canada Alert System | No active alerts");
        s.apply(Command::Next);
        s.apply(Command::Previous);
        assert!(s.active_alert().is_none());
        assert!(!s.should_quit());
    }

    #[test]
    fn blank_title_omits_separator() {
        let mut s = make_state(2);
        s.title.clear();
        assert_eq!(s.status_text(), "1 of 2");
    }

    #[test]
    fn quit_ends_session() {
        let mut s = make_state(2);
        s.apply(Command::Quit);
        assert!(s.should_quit());
        assert!(s.active_alert().is_none());
    }
}
