//! Property-based tests for password generation.
//!
//! For any configuration with at least one usable character, the generated
//! password has exactly the requested length and only uses pool characters.

use proptest::prelude::*;
use securegen::services::charset::build_charset;
use securegen::services::generator::{PasswordGenerator, PasswordGeneratorTrait};
use securegen::types::errors::GenerationError;
use securegen::types::generation::{GenerationConfig, SymbolGroups};

fn arb_symbol_groups() -> impl Strategy<Value = SymbolGroups> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(punctuation, brackets, math, special, other)| SymbolGroups {
            punctuation,
            brackets,
            math,
            special,
            other,
        },
    )
}

fn arb_config(lengths: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = GenerationConfig> {
    (
        lengths,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        arb_symbol_groups(),
    )
        .prop_map(|(length, uppercase, lowercase, numbers, symbols, symbol_groups)| {
            GenerationConfig {
                length,
                uppercase,
                lowercase,
                numbers,
                symbols,
                symbol_groups,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn generated_password_matches_length_and_pool(config in arb_config(4..=32)) {
        let generator = PasswordGenerator::new();
        let charset = build_charset(&config);

        match generator.generate_password(&config) {
            Ok(generated) => {
                prop_assert!(!charset.is_empty());
                prop_assert_eq!(generated.password().chars().count(), config.length);
                prop_assert!(generated.password().chars().all(|c| charset.contains(&c)));
                prop_assert!(generated.score() <= 100);
                prop_assert_eq!(generated.config(), &config);
            }
            Err(e) => {
                prop_assert!(charset.is_empty());
                prop_assert_eq!(e, GenerationError::NoCharacterSet);
            }
        }
    }

    #[test]
    fn out_of_range_lengths_are_always_refused(
        config in prop_oneof![arb_config(0..=3), arb_config(33..=64)]
    ) {
        let err = PasswordGenerator::new().generate_password(&config).unwrap_err();
        prop_assert_eq!(err, GenerationError::InvalidLength(config.length));
    }

    #[test]
    fn pool_never_contains_disabled_categories(config in arb_config(4..=32)) {
        let charset = build_charset(&config);
        if !config.uppercase {
            prop_assert!(!charset.iter().any(|c| c.is_ascii_uppercase()));
        }
        if !config.lowercase {
            prop_assert!(!charset.iter().any(|c| c.is_ascii_lowercase()));
        }
        if !config.numbers {
            prop_assert!(!charset.iter().any(|c| c.is_ascii_digit()));
        }
        if !config.symbols {
            prop_assert!(charset.iter().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
