//! History Manager for SecureGen.
//!
//! Implements `HistoryManagerTrait`: a capped, most-recent-first list of
//! generated passwords kept under the `passwordHistory` key, plus the
//! one-shot `lastUsedSettings` record written when an entry is reused.

use std::sync::Arc;

use serde_json::{json, Value};
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::database::KeyValueStore;
use crate::services::strength_scorer::score_password;
use crate::types::errors::{HistoryError, StorageError};
use crate::types::generation::{GeneratedPassword, GenerationConfig};
use crate::types::history::{new_entry_id, HistoryEntry};

pub const HISTORY_KEY: &str = "passwordHistory";
pub const LAST_USED_SETTINGS_KEY: &str = "lastUsedSettings";

/// Maximum number of entries kept; older entries are evicted on append.
pub const HISTORY_CAPACITY: usize = 10;

/// The stored history as read, with a count of what could not be read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistorySnapshot {
    pub entries: Vec<HistoryEntry>,
    /// Entries skipped because they did not parse.
    pub dropped: usize,
    /// The whole record was unreadable and was read as empty.
    pub unreadable: bool,
}

impl HistorySnapshot {
    fn unreadable() -> Self {
        Self {
            unreadable: true,
            ..Self::default()
        }
    }

    /// One-line message for the user when stored history was lost on read.
    pub fn notice(&self) -> Option<String> {
        if self.unreadable {
            Some("Stored password history could not be read and was reset".to_string())
        } else if self.dropped > 0 {
            Some(format!(
                "{} unreadable history entr{} skipped",
                self.dropped,
                if self.dropped == 1 { "y was" } else { "ies were" }
            ))
        } else {
            None
        }
    }
}

/// Trait defining history management operations.
pub trait HistoryManagerTrait {
    fn append(&self, entry: HistoryEntry) -> Result<(), HistoryError>;
    fn record(&self, generated: &GeneratedPassword) -> Result<HistoryEntry, HistoryError>;
    fn list(&self) -> Vec<HistoryEntry>;
    fn snapshot(&self) -> HistorySnapshot;
    fn remove(&self, index: usize) -> Result<HistoryEntry, HistoryError>;
    fn clear(&self) -> Result<(), HistoryError>;
    fn reuse_config(&self, index: usize) -> Result<GenerationConfig, HistoryError>;
    fn take_last_used(&self) -> Option<GenerationConfig>;
}

/// Fills in what older records lack: an id, a numeric score with its
/// suggestions, and a UNIX timestamp in place of an RFC 3339 string.
/// Returns whether the stored form changed.
fn upgrade_record(mut record: Value) -> Result<(HistoryEntry, bool), serde_json::Error> {
    let mut changed = false;
    if let Some(fields) = record.as_object_mut() {
        if !fields.contains_key("id") {
            fields.insert("id".to_string(), json!(new_entry_id()));
            changed = true;
        }
        if !fields.contains_key("score") || !fields.contains_key("suggestions") {
            if let Some(password) = fields.get("password").and_then(Value::as_str) {
                let report = score_password(password);
                fields.insert("score".to_string(), json!(report.score));
                fields.insert("strength".to_string(), json!(report.label));
                fields.insert("suggestions".to_string(), json!(report.suggestions));
                changed = true;
            }
        }
        changed |= fields.get("timestamp").is_some_and(Value::is_string);
    }
    let entry = serde_json::from_value(record)?;
    Ok((entry, changed))
}

/// History manager backed by a shared key-value store.
pub struct HistoryManager {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryManager {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn now() -> i64 {
        OffsetDateTime::now_utc().unix_timestamp()
    }

    fn load(&self) -> Vec<HistoryEntry> {
        self.read().entries
    }

    /// Reads the stored list one entry at a time.
    ///
    /// Entries that fail to parse are skipped. Upgraded older entries are
    /// written back so their ids stay stable across reads.
    fn read(&self) -> HistorySnapshot {
        let raw = match self.store.get(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return HistorySnapshot::default(),
            Err(e) => {
                warn!(error = %e, "failed to read password history; treating as empty");
                return HistorySnapshot::unreadable();
            }
        };

        let records = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "corrupt password history record; treating as empty");
                return HistorySnapshot::unreadable();
            }
        };

        let mut snapshot = HistorySnapshot::default();
        let mut upgraded = false;
        for (index, record) in records.into_iter().enumerate() {
            match upgrade_record(record) {
                Ok((entry, changed)) => {
                    upgraded |= changed;
                    snapshot.entries.push(entry);
                }
                Err(e) => {
                    warn!(error = %e, index, "skipping unreadable history entry");
                    snapshot.dropped += 1;
                }
            }
        }

        if upgraded {
            match self.persist(&snapshot.entries) {
                Ok(()) => debug!(count = snapshot.entries.len(), "upgraded stored history entries"),
                Err(e) => warn!(error = %e, "failed to write back upgraded history"),
            }
        }
        snapshot
    }

    fn persist(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        let json = serde_json::to_string(entries)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        self.store.set(HISTORY_KEY, &json)?;
        Ok(())
    }
}

impl HistoryManagerTrait for HistoryManager {
    /// Inserts `entry` at the front and drops anything past the capacity.
    fn append(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let mut entries = self.load();
        entries.insert(0, entry);
        entries.truncate(HISTORY_CAPACITY);
        self.persist(&entries)
    }

    fn record(&self, generated: &GeneratedPassword) -> Result<HistoryEntry, HistoryError> {
        let entry = HistoryEntry::new(generated.clone(), Self::now());
        self.append(entry.clone())?;
        debug!(id = %entry.id, "recorded password in history");
        Ok(entry)
    }

    fn list(&self) -> Vec<HistoryEntry> {
        self.load()
    }

    fn snapshot(&self) -> HistorySnapshot {
        self.read()
    }

    /// Removes the entry at `index`. An out-of-range index leaves history untouched.
    fn remove(&self, index: usize) -> Result<HistoryEntry, HistoryError> {
        let mut entries = self.load();
        if index >= entries.len() {
            return Err(HistoryError::NotFound(index));
        }
        let removed = entries.remove(index);
        self.persist(&entries)?;
        Ok(removed)
    }

    fn clear(&self) -> Result<(), HistoryError> {
        self.store.remove(HISTORY_KEY)?;
        Ok(())
    }

    /// Returns the configuration of the entry at `index` and stores it as the
    /// last-used settings for the next generator start.
    fn reuse_config(&self, index: usize) -> Result<GenerationConfig, HistoryError> {
        let entries = self.load();
        let config = *entries
            .get(index)
            .ok_or(HistoryError::NotFound(index))?
            .generated
            .config();

        let json = serde_json::to_string(&config)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        self.store.set(LAST_USED_SETTINGS_KEY, &json)?;
        Ok(config)
    }

    /// Returns and removes the last-used settings record, if any.
    fn take_last_used(&self) -> Option<GenerationConfig> {
        let raw = match self.store.get(LAST_USED_SETTINGS_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "failed to read last used settings");
                return None;
            }
        };

        if let Err(e) = self.store.remove(LAST_USED_SETTINGS_KEY) {
            warn!(error = %e, "failed to remove last used settings");
        }

        match serde_json::from_str::<GenerationConfig>(&raw) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(error = %e, "corrupt last used settings record; ignoring");
                None
            }
        }
    }
}
