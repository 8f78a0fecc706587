//! Remote-then-local generation strategy.
//!
//! Validation runs first; a refused configuration never reaches the remote
//! endpoint. Remote generation is attempted only after a successful health
//! probe, and the first remote failure switches the service to local
//! generation for the rest of its lifetime. Every password is scored locally
//! before it is returned.

use tracing::{debug, info, warn};

use crate::services::generator::{PasswordGenerator, PasswordGeneratorTrait};
use crate::services::remote_generator::RemoteGenerator;
use crate::services::strength_scorer::{StrengthScorer, StrengthScorerTrait};
use crate::types::errors::GenerationError;
use crate::types::generation::{GeneratedPassword, GenerationConfig};

/// How one generation request was satisfied.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// Produced by the remote endpoint.
    Remote(GeneratedPassword),
    /// Produced locally. `fallback_reason` is set when a remote attempt failed first.
    Local {
        password: GeneratedPassword,
        fallback_reason: Option<String>,
    },
    /// Nothing was generated.
    Refused(GenerationError),
}

impl GenerationOutcome {
    pub fn password(&self) -> Option<&GeneratedPassword> {
        match self {
            GenerationOutcome::Remote(p) => Some(p),
            GenerationOutcome::Local { password, .. } => Some(password),
            GenerationOutcome::Refused(_) => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            GenerationOutcome::Local {
                fallback_reason: Some(_),
                ..
            }
        )
    }

    /// `"remote"`, `"local"` or `"refused"`.
    pub fn source(&self) -> &'static str {
        match self {
            GenerationOutcome::Remote(_) => "remote",
            GenerationOutcome::Local { .. } => "local",
            GenerationOutcome::Refused(_) => "refused",
        }
    }
}

/// Remote availability as known to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteMode {
    /// No remote configured.
    Disabled,
    /// Configured but not yet probed; generation stays local until a probe succeeds.
    Unprobed,
    Available,
    /// Probe or a request failed; local generation for the rest of the session.
    Unavailable,
}

pub struct GenerationService<R: RemoteGenerator> {
    remote: Option<R>,
    mode: RemoteMode,
    generator: PasswordGenerator,
    scorer: StrengthScorer,
}

impl<R: RemoteGenerator> GenerationService<R> {
    pub fn new(generator: PasswordGenerator, remote: Option<R>) -> Self {
        let mode = if remote.is_some() {
            RemoteMode::Unprobed
        } else {
            RemoteMode::Disabled
        };
        Self {
            remote,
            mode,
            generator,
            scorer: StrengthScorer,
        }
    }

    /// Local generation only.
    pub fn local(generator: PasswordGenerator) -> Self {
        Self::new(generator, None)
    }

    pub fn mode(&self) -> RemoteMode {
        self.mode
    }

    pub fn uses_remote(&self) -> bool {
        self.mode == RemoteMode::Available
    }

    /// Probes the remote health endpoint once. Returns whether remote generation is on.
    pub async fn probe(&mut self) -> bool {
        if self.mode != RemoteMode::Unprobed {
            return self.uses_remote();
        }
        let Some(remote) = self.remote.as_ref() else {
            self.mode = RemoteMode::Disabled;
            return false;
        };

        match remote.health_check().await {
            Ok(()) => {
                info!("remote generator healthy");
                self.mode = RemoteMode::Available;
                true
            }
            Err(e) => {
                info!(error = %e, "remote generator unavailable; using local generation");
                self.mode = RemoteMode::Unavailable;
                false
            }
        }
    }

    pub async fn generate(&mut self, config: &GenerationConfig) -> GenerationOutcome {
        if let Err(e) = PasswordGenerator::validate(config) {
            debug!(error = %e, "generation refused");
            return GenerationOutcome::Refused(e);
        }

        let mut fallback_reason = None;
        if self.mode == RemoteMode::Available {
            if let Some(remote) = self.remote.as_ref() {
                match remote.generate(config).await {
                    Ok(password) => {
                        let report = self.scorer.score(&password);
                        return GenerationOutcome::Remote(GeneratedPassword::new(password, report, *config));
                    }
                    Err(e) => {
                        warn!(error = %e, "remote generation failed; falling back to local generation");
                        self.mode = RemoteMode::Unavailable;
                        fallback_reason = Some(e.to_string());
                    }
                }
            }
        }

        match self.generator.generate_password(config) {
            Ok(password) => GenerationOutcome::Local {
                password,
                fallback_reason,
            },
            Err(e) => {
                warn!(error = %e, "local generation failed");
                GenerationOutcome::Refused(e)
            }
        }
    }
}
