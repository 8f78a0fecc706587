//! Local password generator.
//!
//! Samples each position independently and uniformly from the character pool
//! using a pluggable [`RandomSource`]. The default source is the operating
//! system CSPRNG exposed by `ring`.

use ring::rand::{SecureRandom, SystemRandom};
use zeroize::Zeroize;

use crate::services::charset::build_charset;
use crate::services::strength_scorer::{StrengthScorer, StrengthScorerTrait};
use crate::types::errors::GenerationError;
use crate::types::generation::{GeneratedPassword, GenerationConfig, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Source of random bytes used for sampling.
pub trait RandomSource {
    fn fill(&self, dest: &mut [u8]) -> Result<(), GenerationError>;
}

/// Random source backed by `ring::rand::SystemRandom`.
pub struct SystemRandomSource {
    rng: SystemRandom,
}

impl SystemRandomSource {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    fn fill(&self, dest: &mut [u8]) -> Result<(), GenerationError> {
        self.rng
            .fill(dest)
            .map_err(|_| GenerationError::RandomSource("system random source unavailable".to_string()))
    }
}

/// Trait defining password generation operations.
pub trait PasswordGeneratorTrait {
    /// Samples `length` characters from `charset` with replacement.
    fn generate(&self, charset: &[char], length: usize) -> Result<String, GenerationError>;

    /// Builds the pool for `config`, generates a password and scores it.
    fn generate_password(&self, config: &GenerationConfig) -> Result<GeneratedPassword, GenerationError>;
}

pub struct PasswordGenerator {
    source: Box<dyn RandomSource>,
    scorer: StrengthScorer,
}

impl PasswordGenerator {
    /// Creates a generator using the system CSPRNG.
    pub fn new() -> Self {
        Self::with_source(Box::new(SystemRandomSource::new()))
    }

    pub fn with_source(source: Box<dyn RandomSource>) -> Self {
        Self {
            source,
            scorer: StrengthScorer,
        }
    }

    /// Checks length range and pool emptiness without generating anything.
    pub fn validate(config: &GenerationConfig) -> Result<Vec<char>, GenerationError> {
        if !config.length_in_range() {
            return Err(GenerationError::InvalidLength(config.length));
        }
        let charset = build_charset(config);
        if charset.is_empty() {
            return Err(GenerationError::NoCharacterSet);
        }
        Ok(charset)
    }

    /// Draws one unbiased index below `bound` (1..=256) per output slot.
    ///
    /// Bytes at or above the largest multiple of `bound` are rejected so every
    /// index is equally likely.
    fn sample_indices(&self, bound: usize, count: usize) -> Result<Vec<usize>, GenerationError> {
        let zone = 256 - (256 % bound);
        let mut indices = Vec::with_capacity(count);
        let mut buf = vec![0u8; count.max(16) * 2];

        while indices.len() < count {
            self.source.fill(&mut buf)?;
            for &byte in buf.iter() {
                if (byte as usize) < zone {
                    indices.push(byte as usize % bound);
                    if indices.len() == count {
                        break;
                    }
                }
            }
        }

        buf.zeroize();
        Ok(indices)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGeneratorTrait for PasswordGenerator {
    fn generate(&self, charset: &[char], length: usize) -> Result<String, GenerationError> {
        if charset.is_empty() {
            return Err(GenerationError::NoCharacterSet);
        }
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            return Err(GenerationError::InvalidLength(length));
        }
        // Pools are built from fixed ASCII lists and never exceed 256 entries.
        if charset.len() > 256 {
            return Err(GenerationError::RandomSource(format!(
                "character pool too large: {}",
                charset.len()
            )));
        }

        let mut indices = self.sample_indices(charset.len(), length)?;
        let password: String = indices.iter().map(|&i| charset[i]).collect();
        indices.zeroize();
        Ok(password)
    }

    fn generate_password(&self, config: &GenerationConfig) -> Result<GeneratedPassword, GenerationError> {
        let charset = Self::validate(config)?;
        let password = self.generate(&charset, config.length)?;
        let report = self.scorer.score(&password);
        Ok(GeneratedPassword::new(password, report, *config))
    }
}
