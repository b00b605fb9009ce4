use std::collections::HashMap;
use std::fs;
use std::time::Duration;
use tracing::{info, warn};

const DEFAULT_ENV_FILE: &str = "api.env";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Immutable per-process configuration, loaded once at startup and shared
/// with every handler through axum state. Missing backend addresses are kept
/// as `None` so each request can fail with a structured error instead of
/// taking the process down.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub solr_server: Option<String>,
    pub solr_user: Option<String>,
    pub solr_pass: Option<String>,
    pub backup_server: Option<String>,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn load() -> Self {
        let env_file =
            std::env::var("API_ENV_FILE").unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
        let file_values = parse_env_file(&env_file);

        let timeout_secs = lookup("REQUEST_TIMEOUT_SECS", &file_values)
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let config = Self {
            solr_server: lookup("PROD_SERVER", &file_values),
            solr_user: lookup("SOLR_USER", &file_values),
            solr_pass: lookup("SOLR_PASS", &file_values),
            backup_server: lookup("BACK_SERVER", &file_values),
            request_timeout: Duration::from_secs(timeout_secs),
        };

        if config.solr_server.is_none() {
            warn!("PROD_SERVER is not set; primary queries will fail per request");
        }
        if config.backup_server.is_none() {
            warn!("BACK_SERVER is not set; fallback queries will fail per request");
        }

        config
    }
}

/// Process environment wins over the env file.
fn lookup(key: &str, file_values: &HashMap<String, String>) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| file_values.get(key).cloned())
}

/// key=value lines; `#` comments and blank lines are skipped, the split is on
/// the first `=` and both sides are trimmed. A missing file is not an error.
fn parse_env_file(path: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => {
            info!("Loaded environment file {}", path);
            contents
        }
        Err(_) => return values,
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            if !key.is_empty() && !value.is_empty() {
                values.insert(key.to_string(), value.to_string());
            }
        }
    }

    values
}
