//! Turns a parsed feed tree into an [`AlertCollection`].
//!
//! Structural problems (no alert list, wrong top-level type) fail the load.
//! Everything below that degrades: a missing or mistyped field becomes an
//! empty string, a bad timestamp becomes `None`, an unreadable geocode list
//! becomes empty.

use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::{debug, info};

use super::schema::{get_array, get_str, locate_entries, FieldNames};
use super::FeedError;
use crate::constants::*;
use crate::models::{Alert, AlertArea, AlertCollection};

/// Applies the inclusion filters and field extraction rules.
#[derive(Debug, Clone)]
pub struct Normalizer {
    excluded_language: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_LANGUAGE)
    }
}

impl Normalizer {
    pub fn new(excluded_language: impl Into<String>) -> Self {
        Self {
            excluded_language: excluded_language.into(),
        }
    }

    /// Normalize a whole feed. One alert is produced per retained
    /// information block of every retained entry, in document order.
    pub fn normalize(&self, root: &Value) -> Result<AlertCollection, FeedError> {
        let (schema, entries) = locate_entries(root)?;
        let fields = schema.fields();

        let mut alerts = Vec::new();
        let mut dropped_entries = 0usize;
        let mut dropped_blocks = 0usize;

        for entry in entries {
            if !is_actual(entry, fields) {
                dropped_entries += 1;
                continue;
            }

            let blocks = get_array(entry, fields.infos).unwrap_or(&[]);
            for block in blocks {
                if !self.keeps_language(block, fields) {
                    dropped_blocks += 1;
                    continue;
                }
                alerts.push(extract_alert(block, fields));
            }
        }

        info!(
            %schema,
            entries = entries.len(),
            alerts = alerts.len(),
            dropped_entries,
            dropped_blocks,
            "normalized feed"
        );

        Ok(AlertCollection::new(alerts))
    }

    /// Keep a block only when it names a language and that language is not
    /// the excluded one.
    fn keeps_language(&self, block: &Value, fields: &FieldNames) -> bool {
        let language = get_str(block, fields.language, "").trim();
        !language.is_empty() && !language.eq_ignore_ascii_case(&self.excluded_language)
    }
}

fn is_actual(entry: &Value, fields: &FieldNames) -> bool {
    get_str(entry, fields.status, "")
        .trim()
        .eq_ignore_ascii_case(STATUS_ACTUAL)
}

fn extract_alert(block: &Value, fields: &FieldNames) -> Alert {
    Alert {
        headline: get_str(block, fields.headline, "").to_string(),
        description: get_str(block, fields.description, "").to_string(),
        instruction: get_str(block, fields.instruction, "").to_string(),
        issuer: get_str(block, fields.issuer, "").to_string(),
        effective: timestamp_field(block, fields.effective),
        expires: timestamp_field(block, fields.expires),
        areas: get_array(block, fields.areas)
            .unwrap_or(&[])
            .iter()
            .map(|area| extract_area(area, fields))
            .collect(),
    }
}

fn extract_area(area: &Value, fields: &FieldNames) -> AlertArea {
    let geocodes = get_array(area, fields.geocodes)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| geocode_value(item, fields))
                .collect()
        })
        .unwrap_or_default();

    AlertArea {
        name: get_str(area, fields.area_name, "").to_string(),
        geocodes,
    }
}

/// A geocode is a bare integer, a numeric string, or an object whose
/// value key holds one of those.
fn geocode_value(item: &Value, fields: &FieldNames) -> Option<i64> {
    let item = match item {
        Value::Object(_) => fields
            .geocode_value
            .iter()
            .find_map(|name| item.get(*name))?,
        _ => item,
    };
    match item {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn timestamp_field(block: &Value, names: &[&str]) -> Option<NaiveDateTime> {
    let raw = get_str(block, names, "");
    if raw.is_empty() {
        return None;
    }
    let parsed = parse_feed_timestamp(raw);
    if parsed.is_none() {
        debug!(value = raw, "unparsable timestamp left unset");
    }
    parsed
}

/// Parse the `YYYY-MM-DDThh:mm:ss` prefix of a feed timestamp.
///
/// Any trailing offset (`-05:00`, `Z`, fractional seconds) is ignored; the
/// wall-clock value is kept as published.
pub fn parse_feed_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let prefix = raw.trim().get(..FEED_TIMESTAMP_PREFIX_LEN)?;
    NaiveDateTime::parse_from_str(prefix, FEED_TIMESTAMP_FORMAT).ok()
}
