// SecureGen platform abstraction
// Provides platform-specific paths for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Overrides the data directory when set to a non-empty path.
pub const DATA_DIR_ENV: &str = "SECUREGEN_DATA_DIR";

/// File name of the SQLite database inside the data directory.
pub const DATABASE_FILE: &str = "securegen.db";

/// Returns the platform-specific configuration directory for SecureGen.
///
/// - **Linux**: `~/.config/securegen` (or `$XDG_CONFIG_HOME/securegen`)
/// - **macOS**: `~/Library/Application Support/SecureGen`
/// - **Windows**: `%APPDATA%/SecureGen`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the data directory holding the SQLite database.
///
/// `$SECUREGEN_DATA_DIR` wins when set; otherwise:
/// - **Linux**: `~/.local/share/securegen` (or `$XDG_DATA_HOME/securegen`)
/// - **macOS**: `~/Library/Application Support/SecureGen`
/// - **Windows**: `%APPDATA%/SecureGen`
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Default location of the SQLite database.
pub fn get_database_path() -> PathBuf {
    get_data_dir().join(DATABASE_FILE)
}
