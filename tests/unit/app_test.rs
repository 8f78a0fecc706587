//! Unit tests for the App shell: session gating of history, recording on
//! generate, and the initial generator configuration.

use std::sync::Arc;

use securegen::app::{App, HistoryAccess};
use securegen::database::{KeyValueStore, MemoryStore};
use securegen::managers::history_manager::HISTORY_KEY;
use securegen::managers::session_manager::SessionManagerTrait;
use securegen::services::generation_service::GenerationService;
use securegen::services::generator::PasswordGenerator;
use securegen::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use securegen::types::errors::{AppError, HistoryError};
use securegen::types::generation::GenerationConfig;
use securegen::types::session::UserSession;
use tempfile::TempDir;

fn setup() -> (App, Arc<MemoryStore>, TempDir) {
    let tmp = TempDir::new().unwrap();
    let settings_path = tmp.path().join("settings.json").to_string_lossy().to_string();
    let store = Arc::new(MemoryStore::new());
    let app = App::from_parts(
        store.clone(),
        SettingsEngine::new(Some(settings_path)),
        GenerationService::local(PasswordGenerator::new()),
    );
    (app, store, tmp)
}

fn login(app: &mut App) {
    app.session_manager
        .login(UserSession {
            id: "1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
        })
        .unwrap();
}

#[tokio::test]
async fn test_generate_without_session_does_not_record() {
    let (mut app, store, _tmp) = setup();

    let outcome = app.generate(&GenerationConfig::default()).await;
    assert!(outcome.password().is_some());
    assert!(store.get(HISTORY_KEY).unwrap().is_none());
    assert_eq!(app.history(), HistoryAccess::LoginRequired);
}

#[tokio::test]
async fn test_generate_with_session_records_history() {
    let (mut app, _store, _tmp) = setup();
    login(&mut app);

    let outcome = app.generate(&GenerationConfig::default()).await;
    let generated = outcome.password().unwrap();

    match app.history() {
        HistoryAccess::Granted { entries, .. } => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].generated.password(), generated.password());
            assert_eq!(entries[0].generated.score(), generated.score());
        }
        HistoryAccess::LoginRequired => panic!("expected access"),
    }
}

#[tokio::test]
async fn test_refused_generation_records_nothing() {
    let (mut app, _store, _tmp) = setup();
    login(&mut app);

    let config = GenerationConfig {
        length: 2,
        ..GenerationConfig::default()
    };
    assert!(app.generate(&config).await.password().is_none());
    assert_eq!(
        app.history(),
        HistoryAccess::Granted {
            entries: Vec::new(),
            notice: None,
        }
    );
}

#[test]
fn test_history_mutations_require_session() {
    let (app, _store, _tmp) = setup();
    assert!(matches!(app.delete_history(0), Err(AppError::LoginRequired)));
    assert!(matches!(app.clear_history(), Err(AppError::LoginRequired)));
    assert!(matches!(app.reuse_settings(0), Err(AppError::LoginRequired)));
}

#[tokio::test]
async fn test_delete_and_clear_with_session() {
    let (mut app, _store, _tmp) = setup();
    login(&mut app);
    app.generate(&GenerationConfig::default()).await;
    app.generate(&GenerationConfig::default()).await;

    app.delete_history(1).unwrap();
    assert!(matches!(
        app.delete_history(1),
        Err(AppError::History(HistoryError::NotFound(1)))
    ));

    app.clear_history().unwrap();
    assert_eq!(
        app.history(),
        HistoryAccess::Granted {
            entries: Vec::new(),
            notice: None,
        }
    );
}

#[tokio::test]
async fn test_reuse_feeds_initial_config_once() {
    let (mut app, _store, _tmp) = setup();
    login(&mut app);

    let config = GenerationConfig {
        length: 8,
        symbols: false,
        ..GenerationConfig::default()
    };
    app.generate(&config).await;

    assert_eq!(app.reuse_settings(0).unwrap(), config);
    assert_eq!(app.initial_config(), config);
    assert_eq!(app.initial_config(), GenerationConfig::default());
}

#[test]
fn test_initial_config_follows_settings() {
    let (mut app, _store, _tmp) = setup();
    app.settings_engine
        .set_value("generator.length", serde_json::json!(20))
        .unwrap();
    assert_eq!(app.initial_config().length, 20);
}

#[test]
fn test_score_matches_scorer() {
    let (app, _store, _tmp) = setup();
    let report = app.score("aaaa1111");
    assert_eq!(report.score, 20);
}

#[tokio::test]
async fn test_open_with_sqlite_keeps_session_across_restarts() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("data").join("securegen.db");
    let settings_path = tmp.path().join("settings.json").to_string_lossy().to_string();

    {
        let mut app = App::open(Some(db_path.clone()), Some(settings_path.clone())).unwrap();
        assert!(!app.startup().await);
        login(&mut app);
        app.generate(&GenerationConfig::default()).await;
    }

    let app = App::open(Some(db_path), Some(settings_path)).unwrap();
    assert!(app.session_manager.is_authenticated());
    match app.history() {
        HistoryAccess::Granted { entries, .. } => assert_eq!(entries.len(), 1),
        HistoryAccess::LoginRequired => panic!("session should be restored"),
    }
}

#[test]
fn test_corrupt_history_is_reported_to_the_caller() {
    let (mut app, store, _tmp) = setup();
    login(&mut app);
    store.set(HISTORY_KEY, "{not json").unwrap();

    match app.history() {
        HistoryAccess::Granted { entries, notice } => {
            assert!(entries.is_empty());
            assert!(notice.unwrap().contains("could not be read"));
        }
        HistoryAccess::LoginRequired => panic!("expected access"),
    }
}
