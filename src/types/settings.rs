use serde::{Deserialize, Serialize};

use super::generation::GenerationConfig;

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppSettings {
    /// Configuration the generator starts with.
    pub generator: GenerationConfig,
    pub remote: RemoteSettings,
    pub logging: LoggingSettings,
}

/// Optional remote generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RemoteSettings {
    pub enabled: bool,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://securegen-api.example.com".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Log filter and output format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "securegen=info".to_string(),
            json: false,
        }
    }
}
