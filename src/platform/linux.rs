// SecureGen platform paths for Linux
// Config: ~/.config/securegen
// Data:   ~/.local/share/securegen

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Uses `$XDG_CONFIG_HOME/securegen` if set, otherwise `~/.config/securegen`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("securegen"),
        _ => home_dir().join(".config").join("securegen"),
    }
}

/// Uses `$XDG_DATA_HOME/securegen` if set, otherwise `~/.local/share/securegen`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("securegen"),
        _ => home_dir().join(".local").join("share").join("securegen"),
    }
}
