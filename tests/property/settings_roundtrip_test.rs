//! Property-based tests for settings persistence.
//!
//! Arbitrary valid `AppSettings` survive a save/load cycle through the
//! SettingsEngine, and reusing a history entry reproduces its configuration.

use std::sync::Arc;

use proptest::prelude::*;
use securegen::database::MemoryStore;
use securegen::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use securegen::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use securegen::services::strength_scorer::score_password;
use securegen::types::generation::{GeneratedPassword, GenerationConfig, SymbolGroups};
use securegen::types::settings::{AppSettings, LoggingSettings, RemoteSettings};
use tempfile::TempDir;

fn arb_generation_config() -> impl Strategy<Value = GenerationConfig> {
    (
        4usize..=32,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<[bool; 5]>(),
    )
        .prop_map(|(length, uppercase, lowercase, numbers, symbols, groups)| GenerationConfig {
            length,
            uppercase,
            lowercase,
            numbers,
            symbols,
            symbol_groups: SymbolGroups {
                punctuation: groups[0],
                brackets: groups[1],
                math: groups[2],
                special: groups[3],
                other: groups[4],
            },
        })
}

fn arb_settings() -> impl Strategy<Value = AppSettings> {
    (
        arb_generation_config(),
        any::<bool>(),
        "https://[a-z]{3,12}\\.example\\.com",
        1u64..=120,
        prop_oneof![Just("securegen=info"), Just("securegen=debug"), Just("warn")],
        any::<bool>(),
    )
        .prop_map(|(generator, enabled, base_url, timeout_secs, level, json)| AppSettings {
            generator,
            remote: RemoteSettings {
                enabled,
                base_url,
                timeout_secs,
            },
            logging: LoggingSettings {
                level: level.to_string(),
                json,
            },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn settings_survive_save_and_load(settings in arb_settings()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json").to_string_lossy().to_string();

        let mut engine = SettingsEngine::new(Some(path.clone()));
        engine.set_value("generator", serde_json::to_value(settings.generator).unwrap()).unwrap();
        engine.set_value("remote", serde_json::to_value(&settings.remote).unwrap()).unwrap();
        engine.set_value("logging", serde_json::to_value(&settings.logging).unwrap()).unwrap();

        let mut reloaded = SettingsEngine::new(Some(path));
        prop_assert_eq!(reloaded.load().unwrap(), settings);
    }

    #[test]
    fn reused_config_is_identical(config in arb_generation_config()) {
        let history = HistoryManager::new(Arc::new(MemoryStore::new()));
        let generated = GeneratedPassword::new(
            "Stored-Pass1".to_string(),
            score_password("Stored-Pass1"),
            config,
        );
        history.record(&generated).unwrap();

        prop_assert_eq!(history.reuse_config(0).unwrap(), config);
        prop_assert_eq!(history.take_last_used(), Some(config));
    }
}
