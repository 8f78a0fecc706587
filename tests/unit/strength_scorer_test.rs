//! Unit tests for the strength scorer, driven by rstest tables.

use rstest::rstest;
use securegen::services::strength_scorer::{score_password, StrengthScorer, StrengthScorerTrait};
use securegen::types::strength::StrengthLabel;

#[rstest]
#[case("aaaa1111", 20, StrengthLabel::Weak)]
#[case("Tr0ub4dor&3xQ", 65, StrengthLabel::Strong)]
#[case("Passw0rd!", 55, StrengthLabel::Medium)]
#[case("aaaAAA111", 30, StrengthLabel::Weak)]
#[case("Xk9#mP2$vL7&nQ4!", 70, StrengthLabel::Strong)]
#[case("password", 5, StrengthLabel::VeryWeak)]
#[case("abc", 0, StrengthLabel::VeryWeak)]
#[case("123456", 0, StrengthLabel::VeryWeak)]
#[case("", 5, StrengthLabel::VeryWeak)]
fn test_known_scores(#[case] password: &str, #[case] score: u8, #[case] label: StrengthLabel) {
    let report = score_password(password);
    assert_eq!(report.score, score, "score for {:?}", password);
    assert_eq!(report.label, label, "label for {:?}", password);
}

#[rstest]
#[case(100, StrengthLabel::VeryStrong)]
#[case(80, StrengthLabel::VeryStrong)]
#[case(79, StrengthLabel::Strong)]
#[case(60, StrengthLabel::Strong)]
#[case(59, StrengthLabel::Medium)]
#[case(40, StrengthLabel::Medium)]
#[case(39, StrengthLabel::Weak)]
#[case(20, StrengthLabel::Weak)]
#[case(19, StrengthLabel::VeryWeak)]
#[case(0, StrengthLabel::VeryWeak)]
fn test_label_boundaries(#[case] score: u8, #[case] label: StrengthLabel) {
    assert_eq!(StrengthLabel::from_score(score), label);
}

#[test]
fn test_aaaa1111_suggestions() {
    let report = score_password("aaaa1111");
    assert_eq!(
        report.suggestions,
        vec![
            "Add uppercase letters",
            "Add symbols",
            "Use more types of characters",
            "Avoid repeated characters",
        ]
    );
}

#[test]
fn test_strong_password_has_no_suggestions() {
    assert!(score_password("Tr0ub4dor&3xQ").suggestions.is_empty());
}

#[test]
fn test_empty_password_suggestions() {
    let report = score_password("");
    assert_eq!(
        report.suggestions,
        vec![
            "Password is too short",
            "Add uppercase letters",
            "Add lowercase letters",
            "Add numbers",
            "Add symbols",
            "Use more types of characters",
        ]
    );
}

#[test]
fn test_penalties_follow_check_order() {
    let report = score_password("abc");
    assert_eq!(
        report.suggestions,
        vec![
            "Password is too short",
            "Add uppercase letters",
            "Add numbers",
            "Add symbols",
            "Use more types of characters",
            "Mix character types",
            "Avoid sequential characters",
        ]
    );
}

#[test]
fn test_sequential_numbers_penalty() {
    let with_run = score_password("Zq!x7890");
    let without_run = score_password("Zq!x7190");
    assert_eq!(with_run.score + 10, without_run.score);
    assert!(with_run
        .suggestions
        .contains(&"Avoid sequential numbers".to_string()));
}

#[test]
fn test_non_ascii_counts_as_symbol() {
    let report = score_password("Abcdéfg1");
    assert!(!report.suggestions.contains(&"Add symbols".to_string()));
}

#[test]
fn test_length_counts_characters_not_bytes() {
    // eight characters, sixteen bytes
    let report = score_password("éééééééé");
    assert!(!report.suggestions.contains(&"Password is too short".to_string()));
}

#[test]
fn test_trait_matches_free_function() {
    let scorer = StrengthScorer;
    assert_eq!(scorer.score("Tr0ub4dor&3xQ"), score_password("Tr0ub4dor&3xQ"));
}
