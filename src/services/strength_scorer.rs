//! Heuristic password strength scorer.
//!
//! Length and character-class bonuses are added, pattern penalties are
//! subtracted, and the total is clamped to 0..=100 before labelling. The
//! suggestion list follows the order of the checks below.

use crate::types::strength::{StrengthLabel, StrengthReport};

const SEQUENTIAL_DIGITS: [&str; 8] = ["123", "234", "345", "456", "567", "678", "789", "890"];

/// Trait defining strength scoring.
pub trait StrengthScorerTrait {
    fn score(&self, password: &str) -> StrengthReport;
}

/// Stateless scorer; identical input always yields an identical report.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrengthScorer;

impl StrengthScorerTrait for StrengthScorer {
    fn score(&self, password: &str) -> StrengthReport {
        score_password(password)
    }
}

/// Scores `password`. See the module docs for the rules.
pub fn score_password(password: &str) -> StrengthReport {
    let chars: Vec<char> = password.chars().collect();
    let mut score: i32 = 0;
    let mut suggestions: Vec<String> = Vec::new();

    let len = chars.len();
    if len >= 16 {
        score += 25;
    } else if len >= 12 {
        score += 20;
    } else if len >= 8 {
        score += 10;
    } else {
        score += 5;
        suggestions.push("Password is too short".to_string());
    }

    let has_upper = chars.iter().any(|c| c.is_ascii_uppercase());
    let has_lower = chars.iter().any(|c| c.is_ascii_lowercase());
    let has_digit = chars.iter().any(|c| c.is_ascii_digit());
    let has_symbol = chars.iter().any(|c| !c.is_ascii_alphanumeric());

    if has_upper {
        score += 10;
    }
    if has_lower {
        score += 10;
    }
    if has_digit {
        score += 10;
    }
    if has_symbol {
        score += 15;
    }

    if !has_upper {
        suggestions.push("Add uppercase letters".to_string());
    }
    if !has_lower {
        suggestions.push("Add lowercase letters".to_string());
    }
    if !has_digit {
        suggestions.push("Add numbers".to_string());
    }
    if !has_symbol {
        suggestions.push("Add symbols".to_string());
    }

    let variety = [has_upper, has_lower, has_digit, has_symbol]
        .iter()
        .filter(|&&present| present)
        .count();
    if variety < 3 {
        suggestions.push("Use more types of characters".to_string());
    }

    if has_triple_repeat(&chars) {
        score -= 10;
        suggestions.push("Avoid repeated characters".to_string());
    }

    if is_single_class(&chars) {
        score -= 15;
        suggestions.push("Mix character types".to_string());
    }

    if has_letter_sequence(&chars) {
        score -= 10;
        suggestions.push("Avoid sequential characters".to_string());
    }

    if SEQUENTIAL_DIGITS.iter().any(|seq| password.contains(seq)) {
        score -= 10;
        suggestions.push("Avoid sequential numbers".to_string());
    }

    let score = score.clamp(0, 100) as u8;

    StrengthReport {
        score,
        label: StrengthLabel::from_score(score),
        suggestions,
    }
}

/// Same character three or more times in a row. Line terminators never count.
fn has_triple_repeat(chars: &[char]) -> bool {
    chars
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2] && !is_line_terminator(w[0]))
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Non-empty and made only of ASCII letters, or only of ASCII digits.
fn is_single_class(chars: &[char]) -> bool {
    !chars.is_empty()
        && (chars.iter().all(|c| c.is_ascii_alphabetic()) || chars.iter().all(|c| c.is_ascii_digit()))
}

/// Three consecutive ascending letters (`abc` .. `xyz`), case-insensitive, no wrap.
fn has_letter_sequence(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        let a = w[0].to_ascii_lowercase();
        let b = w[1].to_ascii_lowercase();
        let c = w[2].to_ascii_lowercase();
        a.is_ascii_lowercase()
            && b.is_ascii_lowercase()
            && c.is_ascii_lowercase()
            && (b as u32) == (a as u32) + 1
            && (c as u32) == (b as u32) + 1
    })
}
