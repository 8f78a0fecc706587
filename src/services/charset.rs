//! Character pools for password generation.

use crate::types::generation::GenerationConfig;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";

pub const PUNCTUATION: &str = ".,;:";
pub const BRACKETS: &str = "[]{}()<>";
pub const MATH: &str = "+-=_*";
pub const SPECIAL: &str = "!@#$%^&";
pub const OTHER: &str = "~`|\\/?\"'";

/// Builds the flat character pool allowed by `config`.
///
/// Order is uppercase, lowercase, digits, then the enabled symbol sub-groups.
/// Sub-group flags are ignored unless `symbols` is set. An empty result means
/// nothing was selected and generation must be refused.
pub fn build_charset(config: &GenerationConfig) -> Vec<char> {
    let mut charset = String::new();
    if config.uppercase {
        charset.push_str(UPPERCASE);
    }
    if config.lowercase {
        charset.push_str(LOWERCASE);
    }
    if config.numbers {
        charset.push_str(DIGITS);
    }

    if config.symbols {
        let groups = &config.symbol_groups;
        if groups.punctuation {
            charset.push_str(PUNCTUATION);
        }
        if groups.brackets {
            charset.push_str(BRACKETS);
        }
        if groups.math {
            charset.push_str(MATH);
        }
        if groups.special {
            charset.push_str(SPECIAL);
        }
        if groups.other {
            charset.push_str(OTHER);
        }
    }

    charset.chars().collect()
}
