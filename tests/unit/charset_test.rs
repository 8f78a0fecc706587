//! Unit tests for character pool construction.

use securegen::services::charset::*;
use securegen::types::generation::{GenerationConfig, SymbolGroups};

fn config(uppercase: bool, lowercase: bool, numbers: bool, symbols: bool) -> GenerationConfig {
    GenerationConfig {
        uppercase,
        lowercase,
        numbers,
        symbols,
        ..GenerationConfig::default()
    }
}

#[test]
fn test_categories_in_order() {
    let charset: String = build_charset(&config(true, true, true, false)).into_iter().collect();
    assert_eq!(charset, format!("{}{}{}", UPPERCASE, LOWERCASE, DIGITS));
}

#[test]
fn test_all_disabled_is_empty() {
    assert!(build_charset(&config(false, false, false, false)).is_empty());
}

#[test]
fn test_symbols_with_no_groups_is_empty() {
    let mut cfg = config(false, false, false, true);
    cfg.symbol_groups = SymbolGroups::none();
    assert!(build_charset(&cfg).is_empty());
}

#[test]
fn test_single_symbol_group() {
    let mut cfg = config(false, false, false, true);
    cfg.symbol_groups = SymbolGroups {
        brackets: true,
        ..SymbolGroups::none()
    };
    let charset: String = build_charset(&cfg).into_iter().collect();
    assert_eq!(charset, "[]{}()<>");
}

#[test]
fn test_groups_ignored_when_symbols_disabled() {
    let cfg = config(false, true, false, false);
    let charset = build_charset(&cfg);
    assert_eq!(charset.len(), 26);
    assert!(charset.iter().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn test_other_group_contents() {
    let mut cfg = config(false, false, false, true);
    cfg.symbol_groups = SymbolGroups {
        other: true,
        ..SymbolGroups::none()
    };
    let charset = build_charset(&cfg);
    assert_eq!(charset, vec!['~', '`', '|', '\\', '/', '?', '"', '\'']);
}
