use serde::{Deserialize, Deserializer, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use super::generation::GeneratedPassword;

/// A generated password recorded in the history list.
///
/// Stored as `{id, password, strength, score, suggestions, timestamp, settings}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    #[serde(flatten)]
    pub generated: GeneratedPassword,
    /// UNIX timestamp (seconds) of when the entry was recorded.
    #[serde(deserialize_with = "unix_or_rfc3339")]
    pub timestamp: i64,
}

pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

impl HistoryEntry {
    pub fn new(generated: GeneratedPassword, timestamp: i64) -> Self {
        Self {
            id: new_entry_id(),
            generated,
            timestamp,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTimestamp {
    Unix(i64),
    Text(String),
}

/// Older records carry an RFC 3339 string such as `2024-05-01T10:00:00.000Z`.
fn unix_or_rfc3339<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match StoredTimestamp::deserialize(deserializer)? {
        StoredTimestamp::Unix(secs) => Ok(secs),
        StoredTimestamp::Text(text) => OffsetDateTime::parse(&text, &Rfc3339)
            .map(|t| t.unix_timestamp())
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{}': {}", text, e))),
    }
}
