//! Pure text transforms used by the renderer.

use chrono::NaiveDateTime;
use unicode_width::UnicodeWidthChar;

use crate::constants::{DISPLAY_TIMESTAMP_FORMAT, UNSET_TIMESTAMP_LABEL};

/// Headline as shown on screen. Storage keeps the feed's casing.
pub fn display_headline(headline: &str) -> String {
    headline.to_uppercase()
}

/// `YYYY-MM-DD hh:mm`, or a placeholder for an unset timestamp.
pub fn format_timestamp(ts: Option<NaiveDateTime>) -> String {
    match ts {
        Some(ts) => ts.format(DISPLAY_TIMESTAMP_FORMAT).to_string(),
        None => UNSET_TIMESTAMP_LABEL.to_string(),
    }
}

/// Truncate to `max_width` terminal columns, appending "..." if truncated.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    let (budget, ellipsis) = if max_width > 3 {
        (max_width - 3, "...")
    } else {
        (max_width, "")
    };

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ellipsis);
    out
}
