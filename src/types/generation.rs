use serde::{Deserialize, Deserializer, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::strength::{StrengthLabel, StrengthReport};

/// Shortest password the generator will produce.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Longest password the generator will produce.
pub const MAX_PASSWORD_LENGTH: usize = 32;

pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Symbol sub-groups that can be toggled independently when symbols are enabled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct SymbolGroups {
    pub punctuation: bool,
    pub brackets: bool,
    pub math: bool,
    pub special: bool,
    pub other: bool,
}

impl Default for SymbolGroups {
    fn default() -> Self {
        Self {
            punctuation: true,
            brackets: true,
            math: true,
            special: true,
            other: true,
        }
    }
}

impl SymbolGroups {
    /// All sub-groups disabled.
    pub fn none() -> Self {
        Self {
            punctuation: false,
            brackets: false,
            math: false,
            special: false,
            other: false,
        }
    }

    pub fn any_enabled(&self) -> bool {
        self.punctuation || self.brackets || self.math || self.special || self.other
    }
}

/// Settings that drive one password generation.
///
/// Serialized with the same keys the history records and the remote endpoint use
/// (`length`, `uppercase`, `lowercase`, `numbers`, `symbols`, `symbolGroups`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct GenerationConfig {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    #[serde(
        rename = "symbolGroups",
        default,
        deserialize_with = "symbol_groups_or_default"
    )]
    pub symbol_groups: SymbolGroups,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            symbol_groups: SymbolGroups::default(),
        }
    }
}

impl GenerationConfig {
    /// Returns true if at least one of the four top-level categories is enabled.
    pub fn has_any_category(&self) -> bool {
        self.uppercase || self.lowercase || self.numbers || self.symbols
    }

    pub fn length_in_range(&self) -> bool {
        (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&self.length)
    }
}

/// `symbolGroups` may be absent or `null` in older records.
fn symbol_groups_or_default<'de, D>(deserializer: D) -> Result<SymbolGroups, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<SymbolGroups>::deserialize(deserializer)?.unwrap_or_default())
}

/// A password together with its strength assessment and the settings that produced it.
///
/// Fields are private so the value cannot change after creation. The password
/// text and suggestions are wiped from memory on drop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct GeneratedPassword {
    password: String,
    #[zeroize(skip)]
    strength: StrengthLabel,
    score: u8,
    suggestions: Vec<String>,
    #[zeroize(skip)]
    settings: GenerationConfig,
}

impl GeneratedPassword {
    pub fn new(password: String, report: StrengthReport, settings: GenerationConfig) -> Self {
        Self {
            password,
            strength: report.label,
            score: report.score,
            suggestions: report.suggestions,
            settings,
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn label(&self) -> StrengthLabel {
        self.strength
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// The configuration this password was generated with.
    pub fn config(&self) -> &GenerationConfig {
        &self.settings
    }

    pub fn report(&self) -> StrengthReport {
        StrengthReport {
            score: self.score,
            label: self.strength,
            suggestions: self.suggestions.clone(),
        }
    }
}
