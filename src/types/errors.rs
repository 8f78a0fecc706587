use std::fmt;

// === GenerationError ===

/// Errors that refuse or abort password generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No category or symbol sub-group produced any character.
    NoCharacterSet,
    /// The requested length is outside the supported range.
    InvalidLength(usize),
    /// The random source could not produce bytes.
    RandomSource(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::NoCharacterSet => {
                write!(f, "No character set selected: enable at least one character type")
            }
            GenerationError::InvalidLength(len) => write!(
                f,
                "Invalid password length: {} (must be between {} and {})",
                len,
                crate::types::generation::MIN_PASSWORD_LENGTH,
                crate::types::generation::MAX_PASSWORD_LENGTH
            ),
            GenerationError::RandomSource(msg) => write!(f, "Random source failed: {}", msg),
        }
    }
}

impl std::error::Error for GenerationError {}

// === StorageError ===

/// Errors raised by the key-value store.
#[derive(Debug)]
pub enum StorageError {
    /// Database operation failed.
    DatabaseError(String),
    /// A value could not be serialized for storage.
    SerializationError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::DatabaseError(e.to_string())
    }
}

// === HistoryError ===

/// Errors related to password history operations.
#[derive(Debug)]
pub enum HistoryError {
    /// No history entry exists at the given index.
    NotFound(usize),
    /// Persisting the history failed.
    StorageError(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::NotFound(index) => write!(f, "History entry not found: {}", index),
            HistoryError::StorageError(msg) => write!(f, "History storage error: {}", msg),
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<StorageError> for HistoryError {
    fn from(e: StorageError) -> Self {
        HistoryError::StorageError(e.to_string())
    }
}

// === SessionError ===

/// Errors related to the user session.
#[derive(Debug)]
pub enum SessionError {
    /// The identity is missing a required field.
    InvalidIdentity(String),
    /// Registration password and confirmation differ.
    PasswordMismatch,
    /// Persisting the session failed.
    StorageError(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidIdentity(msg) => write!(f, "Invalid identity: {}", msg),
            SessionError::PasswordMismatch => write!(f, "Passwords do not match"),
            SessionError::StorageError(msg) => write!(f, "Session storage error: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<StorageError> for SessionError {
    fn from(e: StorageError) -> Self {
        SessionError::StorageError(e.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// File system I/O error.
    IoError(String),
    /// JSON serialization/deserialization error.
    SerializationError(String),
    /// The settings key path does not exist.
    InvalidKey(String),
    /// The value has the wrong shape for the key.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => write!(f, "Invalid settings value: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

// === RemoteError ===

/// Errors from the optional remote generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The HTTP client could not be built or the request could not be sent.
    RequestFailed(String),
    /// The endpoint answered with a non-success status.
    BadStatus(u16),
    /// The response body was not the expected JSON.
    InvalidResponse(String),
    /// The request did not complete within the configured timeout.
    Timeout(u64),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::RequestFailed(msg) => write!(f, "Remote request failed: {}", msg),
            RemoteError::BadStatus(status) => {
                write!(f, "Remote endpoint returned status {}", status)
            }
            RemoteError::InvalidResponse(msg) => write!(f, "Invalid remote response: {}", msg),
            RemoteError::Timeout(secs) => write!(f, "Remote request timed out after {}s", secs),
        }
    }
}

impl std::error::Error for RemoteError {}

// === AppError ===

/// Errors surfaced by the application shell.
#[derive(Debug)]
pub enum AppError {
    /// The operation needs a logged-in user.
    LoginRequired,
    History(HistoryError),
    Session(SessionError),
    Settings(SettingsError),
    Storage(StorageError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::LoginRequired => write!(f, "Login required: please log in to access history"),
            AppError::History(e) => write!(f, "{}", e),
            AppError::Session(e) => write!(f, "{}", e),
            AppError::Settings(e) => write!(f, "{}", e),
            AppError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::LoginRequired => None,
            AppError::History(e) => Some(e),
            AppError::Session(e) => Some(e),
            AppError::Settings(e) => Some(e),
            AppError::Storage(e) => Some(e),
        }
    }
}

impl From<HistoryError> for AppError {
    fn from(e: HistoryError) -> Self {
        AppError::History(e)
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::Session(e)
    }
}

impl From<SettingsError> for AppError {
    fn from(e: SettingsError) -> Self {
        AppError::Settings(e)
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        AppError::Storage(e)
    }
}
