//! Which alert is active, and how input commands move it.
//!
//! ```text
//!   Empty ──Quit──▶ Exited ◀──Quit── Browsing(i)
//!   Browsing(i) ──Previous──▶ Browsing(max(i-1, 0))
//!   Browsing(i) ──Next──────▶ Browsing(min(i+1, count-1))
//! ```

use tracing::trace;

/// A discrete user intent, already decoded from the raw key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero alerts loaded; nothing to select.
    Empty,
    /// Index of the active alert, always `< count`.
    Browsing(usize),
    /// Terminal state: the user asked to leave.
    Exited,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    count: usize,
    selection: Selection,
}

impl Navigator {
    pub fn new(count: usize) -> Self {
        let selection = if count == 0 {
            Selection::Empty
        } else {
            Selection::Browsing(0)
        };
        Self { count, selection }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Index of the active alert, if one is selected.
    pub fn active_index(&self) -> Option<usize> {
        match self.selection {
            Selection::Browsing(i) => Some(i),
            _ => None,
        }
    }

    /// One-based position and total, for the status indicator.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.active_index().map(|i| (i + 1, self.count))
    }

    pub fn is_exited(&self) -> bool {
        self.selection == Selection::Exited
    }

    /// Apply one command. `Exited` absorbs everything.
    pub fn apply(&mut self, command: Command) {
        let next = match (self.selection, command) {
            (Selection::Exited, _) => Selection::Exited,
            (_, Command::Quit) => Selection::Exited,
            (Selection::Empty, _) => Selection::Empty,
            (Selection::Browsing(i), Command::Previous) => Selection::Browsing(i.saturating_sub(1)),
            (Selection::Browsing(i), Command::Next) => {
                Selection::Browsing((i + 1).min(self.count - 1))
            }
        };
        trace!(?command, from = ?self.selection, to = ?next, "navigation");
        self.selection = next;
    }
}
