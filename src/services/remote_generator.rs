//! Client for the optional remote generation endpoint.
//!
//! `GET /health` decides whether remote generation is attempted at all;
//! `POST /generate` returns `{"password": "..."}` for a generation request.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::errors::RemoteError;
use crate::types::generation::{GenerationConfig, SymbolGroups};
use crate::types::settings::RemoteSettings;

/// Trait defining the remote generation endpoint.
#[allow(async_fn_in_trait)]
pub trait RemoteGenerator {
    /// Succeeds only when the endpoint answers the health probe with a 2xx status.
    async fn health_check(&self) -> Result<(), RemoteError>;

    /// Requests a password for `config`. The result is not scored.
    async fn generate(&self, config: &GenerationConfig) -> Result<String, RemoteError>;
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RemoteGenerateRequest {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    /// `null` when symbols are disabled.
    #[serde(rename = "symbolGroups")]
    pub symbol_groups: Option<SymbolGroups>,
}

impl From<&GenerationConfig> for RemoteGenerateRequest {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            length: config.length,
            uppercase: config.uppercase,
            lowercase: config.lowercase,
            numbers: config.numbers,
            symbols: config.symbols,
            symbol_groups: config.symbols.then_some(config.symbol_groups),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RemoteGenerateResponse {
    password: String,
}

/// HTTP implementation using `reqwest`.
pub struct HttpRemoteGenerator {
    client: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl HttpRemoteGenerator {
    pub fn new(settings: &RemoteSettings) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| RemoteError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            timeout_secs: settings.timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_send_error(&self, e: reqwest::Error) -> RemoteError {
        if e.is_timeout() {
            RemoteError::Timeout(self.timeout_secs)
        } else {
            RemoteError::RequestFailed(e.to_string())
        }
    }

    /// Bounds a whole request, body included, by the configured timeout.
    async fn bounded<T, F>(&self, fut: F) -> Result<T, RemoteError>
    where
        F: std::future::Future<Output = Result<T, RemoteError>>,
    {
        tokio::time::timeout(Duration::from_secs(self.timeout_secs), fut)
            .await
            .map_err(|_| RemoteError::Timeout(self.timeout_secs))?
    }
}

impl RemoteGenerator for HttpRemoteGenerator {
    async fn health_check(&self) -> Result<(), RemoteError> {
        let url = format!("{}/health", self.base_url);
        self.bounded(async {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| self.map_send_error(e))?;

            if !response.status().is_success() {
                return Err(RemoteError::BadStatus(response.status().as_u16()));
            }
            Ok(())
        })
        .await
    }

    async fn generate(&self, config: &GenerationConfig) -> Result<String, RemoteError> {
        let url = format!("{}/generate", self.base_url);
        let request = RemoteGenerateRequest::from(config);
        self.bounded(async {
            let response = self
                .client
                .post(&url)
                .json(&request)
                .send()
                .await
                .map_err(|e| self.map_send_error(e))?;

            if !response.status().is_success() {
                return Err(RemoteError::BadStatus(response.status().as_u16()));
            }

            let body: RemoteGenerateResponse = response
                .json()
                .await
                .map_err(|e| RemoteError::InvalidResponse(e.to_string()))?;

            if body.password.is_empty() {
                return Err(RemoteError::InvalidResponse("empty password".to_string()));
            }
            Ok(body.password)
        })
        .await
    }
}
