//! App Core for SecureGen.
//!
//! Central struct holding the store, managers and services. It is created
//! once by a binary and passed explicitly to every call site.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::database::{Database, KeyValueStore, SqliteStore};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::session_manager::{SessionManager, SessionManagerTrait};
use crate::platform;
use crate::services::generation_service::{GenerationOutcome, GenerationService};
use crate::services::generator::PasswordGenerator;
use crate::services::remote_generator::{HttpRemoteGenerator, RemoteGenerator};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::strength_scorer::score_password;
use crate::types::errors::{AppError, StorageError};
use crate::types::generation::GenerationConfig;
use crate::types::history::HistoryEntry;
use crate::types::strength::StrengthReport;

/// Result of asking for the history list.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryAccess {
    /// `notice` is set when stored entries could not be read.
    Granted {
        entries: Vec<HistoryEntry>,
        notice: Option<String>,
    },
    /// No session; the caller should send the user to the login flow.
    LoginRequired,
}

/// Central application struct holding all managers and services.
pub struct App<R: RemoteGenerator = HttpRemoteGenerator> {
    pub store: Arc<dyn KeyValueStore>,
    pub settings_engine: SettingsEngine,
    pub session_manager: SessionManager,
    pub history_manager: HistoryManager,
    pub generation: GenerationService<R>,
}

impl App<HttpRemoteGenerator> {
    /// Opens the SQLite store and loads settings.
    ///
    /// `None` paths fall back to the platform data and config directories.
    /// Unreadable settings are logged and replaced by defaults.
    pub fn open(db_path: Option<PathBuf>, settings_path: Option<String>) -> Result<Self, AppError> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        if let Err(e) = settings_engine.load() {
            warn!(error = %e, path = settings_engine.get_config_path(), "failed to load settings; using defaults");
        }

        let db_path = db_path.unwrap_or_else(platform::get_database_path);
        let store: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::new(Self::open_database(&db_path)?));

        let remote_settings = &settings_engine.get_settings().remote;
        let remote = if remote_settings.enabled {
            match HttpRemoteGenerator::new(remote_settings) {
                Ok(remote) => Some(remote),
                Err(e) => {
                    warn!(error = %e, "remote generator could not be built; using local generation");
                    None
                }
            }
        } else {
            None
        };

        let generation = GenerationService::new(PasswordGenerator::new(), remote);
        Ok(Self::from_parts(store, settings_engine, generation))
    }

    fn open_database(path: &Path) -> Result<Database, AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StorageError::DatabaseError(format!("Failed to create data directory: {}", e))
                })?;
            }
        }
        let db = Database::open(path).map_err(StorageError::from)?;
        info!(path = %path.display(), "opened database");
        Ok(db)
    }
}

impl<R: RemoteGenerator> App<R> {
    /// Wires an App from already-built parts. The session is rehydrated from `store`.
    pub fn from_parts(
        store: Arc<dyn KeyValueStore>,
        settings_engine: SettingsEngine,
        generation: GenerationService<R>,
    ) -> Self {
        let session_manager = SessionManager::new(store.clone());
        let history_manager = HistoryManager::new(store.clone());

        Self {
            store,
            settings_engine,
            session_manager,
            history_manager,
            generation,
        }
    }

    /// Startup sequence: probe the remote endpoint. Returns whether it will be used.
    pub async fn startup(&mut self) -> bool {
        self.generation.probe().await
    }

    /// Generates a password and, when someone is logged in, records it in history.
    ///
    /// A history write failure is logged; the password is still returned.
    pub async fn generate(&mut self, config: &GenerationConfig) -> GenerationOutcome {
        let outcome = self.generation.generate(config).await;

        if let Some(generated) = outcome.password() {
            if self.session_manager.is_authenticated() {
                if let Err(e) = self.history_manager.record(generated) {
                    warn!(error = %e, "failed to record password in history");
                }
            }
        }
        outcome
    }

    pub fn score(&self, password: &str) -> StrengthReport {
        score_password(password)
    }

    pub fn history(&self) -> HistoryAccess {
        if !self.session_manager.is_authenticated() {
            return HistoryAccess::LoginRequired;
        }
        let snapshot = self.history_manager.snapshot();
        HistoryAccess::Granted {
            notice: snapshot.notice(),
            entries: snapshot.entries,
        }
    }

    pub fn delete_history(&self, index: usize) -> Result<HistoryEntry, AppError> {
        self.require_session()?;
        Ok(self.history_manager.remove(index)?)
    }

    pub fn clear_history(&self) -> Result<(), AppError> {
        self.require_session()?;
        Ok(self.history_manager.clear()?)
    }

    /// Stores the configuration of entry `index` for the next generator start.
    pub fn reuse_settings(&self, index: usize) -> Result<GenerationConfig, AppError> {
        self.require_session()?;
        Ok(self.history_manager.reuse_config(index)?)
    }

    /// Configuration the generator opens with: a pending reuse record (consumed),
    /// else the configured defaults.
    pub fn initial_config(&self) -> GenerationConfig {
        self.history_manager
            .take_last_used()
            .unwrap_or(self.settings_engine.get_settings().generator)
    }

    fn require_session(&self) -> Result<(), AppError> {
        if self.session_manager.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::LoginRequired)
        }
    }
}
