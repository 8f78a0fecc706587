//! SecureGen persistence layer.
//!
//! Provides SQLite connection management, schema migrations and the
//! key-value store the managers persist their JSON records in.
//!
//! # Usage
//!
//! ```no_run
//! use securegen::database::{Database, KeyValueStore, SqliteStore};
//!
//! let db = Database::open("securegen.db").expect("failed to open database");
//! let store = SqliteStore::new(db);
//! store.set("lastUsedSettings", "{}").expect("write failed");
//! ```

pub mod connection;
pub mod kv_store;
pub mod migrations;

pub use connection::Database;
pub use kv_store::{KeyValueStore, MemoryStore, SqliteStore};
