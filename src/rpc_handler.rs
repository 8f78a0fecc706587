//! RPC method handler for the SecureGen JSON-lines protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches a method call to the managers and services
//! held by the `App`.

use serde_json::{json, Value};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::app::{App, HistoryAccess};
use crate::managers::session_manager::SessionManagerTrait;
use crate::services::generation_service::GenerationOutcome;
use crate::services::remote_generator::RemoteGenerator;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::generation::{GeneratedPassword, GenerationConfig};
use crate::types::session::UserSession;

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn index_param(params: &Value) -> Result<usize, String> {
    params
        .get("index")
        .and_then(|v| v.as_u64())
        .map(|i| i as usize)
        .ok_or_else(|| "missing index".to_string())
}

/// Overlays the request params on `base`, so callers may send only the fields they change.
pub fn config_from_params(base: &GenerationConfig, params: &Value) -> Result<GenerationConfig, String> {
    let mut merged = serde_json::to_value(base).map_err(|e| e.to_string())?;
    if let (Some(target), Some(overrides)) = (merged.as_object_mut(), params.as_object()) {
        for (key, value) in overrides {
            if key == "symbolGroups" {
                if let (Some(groups), Some(group_overrides)) = (
                    target.get_mut("symbolGroups").and_then(|g| g.as_object_mut()),
                    value.as_object(),
                ) {
                    for (group, flag) in group_overrides {
                        groups.insert(group.clone(), flag.clone());
                    }
                    continue;
                }
            }
            target.insert(key.clone(), value.clone());
        }
    }
    serde_json::from_value(merged).map_err(|e| format!("invalid config: {}", e))
}

fn password_json(generated: &GeneratedPassword) -> Value {
    json!({
        "password": generated.password(),
        "strength": generated.label(),
        "score": generated.score(),
        "suggestions": generated.suggestions(),
        "settings": generated.config(),
    })
}

/// Dispatch a method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method<R: RemoteGenerator>(
    app: &Mutex<App<R>>,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Password ───
        "password.generate" => {
            let mut a = app.lock().await;
            let base = a.settings_engine.get_settings().generator;
            let config = config_from_params(&base, params)?;
            match a.generate(&config).await {
                GenerationOutcome::Refused(e) => Err(e.to_string()),
                outcome => {
                    let mut result = match outcome.password() {
                        Some(generated) => password_json(generated),
                        None => json!({}),
                    };
                    result["source"] = json!(outcome.source());
                    if let GenerationOutcome::Local {
                        fallback_reason: Some(reason),
                        ..
                    } = &outcome
                    {
                        result["fallbackReason"] = json!(reason);
                    }
                    Ok(result)
                }
            }
        }
        "password.score" => {
            let password = str_param(params, "password")?;
            let a = app.lock().await;
            let report = a.score(password);
            Ok(json!({
                "score": report.score,
                "strength": report.label,
                "suggestions": report.suggestions,
            }))
        }

        // ─── History ───
        "history.list" => {
            let a = app.lock().await;
            match a.history() {
                HistoryAccess::Granted { entries, notice } => Ok(json!({
                    "loginRequired": false,
                    "entries": entries,
                    "notice": notice,
                })),
                HistoryAccess::LoginRequired => Ok(json!({"loginRequired": true, "entries": []})),
            }
        }
        "history.delete" => {
            let index = index_param(params)?;
            let a = app.lock().await;
            let removed = a.delete_history(index).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "id": removed.id}))
        }
        "history.clear" => {
            let a = app.lock().await;
            a.clear_history().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "history.reuse" => {
            let index = index_param(params)?;
            let a = app.lock().await;
            let config = a.reuse_settings(index).map_err(|e| e.to_string())?;
            Ok(json!(config))
        }

        // ─── Session ───
        "session.current" => {
            let a = app.lock().await;
            Ok(json!(a.session_manager.current_user()))
        }
        "session.login" => {
            let email = str_param(params, "email")?;
            let name = str_param(params, "name")?;
            let id = params
                .get("id")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            let user = UserSession {
                id,
                email: email.to_string(),
                name: name.to_string(),
            };
            let mut a = app.lock().await;
            a.session_manager.login(user.clone()).map_err(|e| e.to_string())?;
            Ok(json!(user))
        }
        "session.register" => {
            let name = str_param(params, "name")?;
            let email = str_param(params, "email")?;
            let password = str_param(params, "password")?;
            let confirm = str_param(params, "confirmPassword")?;
            let mut a = app.lock().await;
            let user = a
                .session_manager
                .register(name, email, password, confirm)
                .map_err(|e| e.to_string())?;
            Ok(json!(user))
        }
        "session.logout" => {
            let mut a = app.lock().await;
            a.session_manager.logout().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().await;
            Ok(json!(a.settings_engine.get_settings()))
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().await;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().await;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Generator ───
        "generator.initial_config" => {
            let a = app.lock().await;
            Ok(json!(a.initial_config()))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
