//! Read-side rows shared by comments and replies.
//!
//! Both collections arrive as a list of rows carrying `id`, `username`, `date`,
//! `content` and a nullable `deleted_at`. Soft-deleted rows keep their place
//! but their content is swapped for a placeholder.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::errors::InvariantError;

const REQUIRED_KEYS: [&str; 5] = ["id", "username", "date", "content", "deleted_at"];

const DELETED_AT: &str = "deleted_at";

/// One visible comment or reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
}

/// Validation codes and placeholder text for one kind of entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EntryRules {
    pub collection: &'static str,
    pub placeholder: &'static str,
    pub missing: InvariantError,
    pub mistyped: InvariantError,
}

/// Validate every row of `payload[rules.collection]` and mask deleted content.
///
/// Presence is checked across all rows before any type check. Every value
/// must be a string, except `deleted_at` which may also be `null`.
pub(crate) fn read_entries(payload: &Value, rules: EntryRules) -> Result<Vec<EntryView>, InvariantError> {
    let rows = payload
        .get(rules.collection)
        .and_then(Value::as_array)
        .ok_or(rules.mistyped)?;

    let rows = rows
        .iter()
        .map(|row| {
            row.as_object()
                .filter(|fields| REQUIRED_KEYS.iter().all(|key| fields.contains_key(*key)))
                .ok_or(rules.missing)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if !rows.iter().all(|fields| has_valid_types(fields)) {
        return Err(rules.mistyped);
    }

    Ok(rows
        .into_iter()
        .map(|fields| {
            let text = |key: &str| {
                fields
                    .get(key)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned()
            };
            let deleted = fields.get(DELETED_AT).is_some_and(|value| !value.is_null());

            EntryView {
                id: text("id"),
                username: text("username"),
                date: text("date"),
                content: if deleted {
                    rules.placeholder.to_owned()
                } else {
                    text("content")
                },
            }
        })
        .collect())
}

fn has_valid_types(fields: &Map<String, Value>) -> bool {
    fields.iter().all(|(key, value)| match value {
        Value::String(_) => true,
        Value::Null => key == DELETED_AT,
        _ => false,
    })
}
