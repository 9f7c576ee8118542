//! Feed generation detection and typed field access.
//!
//! The provider has shipped the feed in more than one shape. Each generation
//! gets a [`FieldNames`] table; the normalizer only ever asks a [`Schema`] for
//! candidate names and reads nodes through [`get_str`] / [`get_array`].

use std::fmt;

use serde_json::Value;

use super::FeedError;

/// Candidate JSON keys per logical field, tried in order.
#[derive(Debug)]
pub struct FieldNames {
    pub status: &'static [&'static str],
    pub infos: &'static [&'static str],
    pub language: &'static [&'static str],
    pub headline: &'static [&'static str],
    pub description: &'static [&'static str],
    pub instruction: &'static [&'static str],
    pub issuer: &'static [&'static str],
    pub effective: &'static [&'static str],
    pub expires: &'static [&'static str],
    pub areas: &'static [&'static str],
    pub area_name: &'static [&'static str],
    pub geocodes: &'static [&'static str],
    /// Key holding the number when a geocode is an object.
    pub geocode_value: &'static [&'static str],
}

const CAPITALIZED_FIELDS: FieldNames = FieldNames {
    status: &["Status"],
    infos: &["Information"],
    language: &["Language"],
    headline: &["Headline"],
    description: &["Description"],
    instruction: &["Instruction"],
    issuer: &["SenderName"],
    effective: &["Effective"],
    expires: &["Expires"],
    areas: &["Areas", "Area"],
    area_name: &["Description", "AreaDesc", "Name"],
    geocodes: &["Geocodes", "Geocode"],
    geocode_value: &["Value", "value"],
};

const FLAT_FIELDS: FieldNames = FieldNames {
    status: &["status"],
    infos: &["infos"],
    language: &["language"],
    headline: &["headline"],
    description: &["description"],
    instruction: &["instruction"],
    issuer: &["sender_name", "senderName", "sender"],
    effective: &["effective"],
    expires: &["expires"],
    areas: &["areas"],
    area_name: &["name", "description", "area_desc"],
    geocodes: &["geocodes"],
    geocode_value: &["value", "Value"],
};

/// A known feed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// `[ { "Status", "Information": [ { "Language", ..., "Areas": [...] } ] } ]`
    Capitalized,
    /// `{ "alerts": [ { "status", "infos": [ { "language", ..., "areas": [...] } ] } ] }`
    Flat,
}

impl Schema {
    pub fn fields(self) -> &'static FieldNames {
        match self {
            Schema::Capitalized => &CAPITALIZED_FIELDS,
            Schema::Flat => &FLAT_FIELDS,
        }
    }

    /// Guess the generation from the first entry that is an object.
    fn sniff(entries: &[Value]) -> Option<Self> {
        let first = entries.iter().find_map(Value::as_object)?;
        if first.contains_key("Information") || first.contains_key("Status") {
            Some(Schema::Capitalized)
        } else if first.contains_key("infos") || first.contains_key("status") {
            Some(Schema::Flat)
        } else {
            None
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Capitalized => write!(f, "capitalized"),
            Schema::Flat => write!(f, "flat"),
        }
    }
}

/// Find the list of raw alert entries and the generation it follows.
///
/// The list is either the root array or an array under `alerts` / `Alerts`.
/// Anything else is [`FeedError::InvalidShape`].
pub fn locate_entries(root: &Value) -> Result<(Schema, &[Value]), FeedError> {
    let (container_guess, entries) = match root {
        Value::Array(items) => (Schema::Capitalized, items.as_slice()),
        Value::Object(map) => {
            let (guess, node) = if let Some(node) = map.get("alerts") {
                (Schema::Flat, node)
            } else if let Some(node) = map.get("Alerts") {
                (Schema::Capitalized, node)
            } else {
                return Err(FeedError::InvalidShape(
                    "top-level object has no `alerts` list".to_string(),
                ));
            };
            let items = node.as_array().ok_or_else(|| {
                FeedError::InvalidShape(format!(
                    "alert list is {}, expected an array",
                    type_name(node)
                ))
            })?;
            (guess, items.as_slice())
        }
        other => {
            return Err(FeedError::InvalidShape(format!(
                "top-level value is {}, expected an array or object",
                type_name(other)
            )))
        }
    };

    let schema = Schema::sniff(entries).unwrap_or(container_guess);
    Ok((schema, entries))
}

/// First candidate key holding a string, else `default`.
pub fn get_str<'a>(node: &'a Value, names: &[&str], default: &'a str) -> &'a str {
    names
        .iter()
        .find_map(|name| node.get(*name).and_then(Value::as_str))
        .unwrap_or(default)
}

/// First candidate key holding an array.
pub fn get_array<'a>(node: &'a Value, names: &[&str]) -> Option<&'a [Value]> {
    names
        .iter()
        .find_map(|name| node.get(*name).and_then(Value::as_array))
        .map(Vec::as_slice)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
