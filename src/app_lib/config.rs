//! Client configuration: the backend base URL, where the session is kept and
//! how long a request may take. Defaults come from build-time environment
//! variables, then runtime environment variables override them, and the CLI
//! applies its own flags last. Blank values never override.

use std::{env, path::PathBuf, time::Duration};

/// Default request timeout applied to every API call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const SESSION_DIR: &str = ".dasbor";
const SESSION_FILE: &str = "session.json";
const FALLBACK_SESSION_FILE: &str = ".dasbor-session.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub server_url: String,
    pub session_file: PathBuf,
    pub timeout: Duration,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    #[must_use]
    pub fn load() -> Self {
        let server_url = option_env!("DASBOR_SERVER_URL").unwrap_or("");

        let mut config = Self {
            server_url: normalize_base_url(server_url),
            session_file: default_session_file(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        apply_runtime_overrides(&mut config, runtime_config());

        config
    }

    /// Replaces the base URL, keeping the no-trailing-slash form.
    #[must_use]
    pub fn with_server_url(mut self, server_url: &str) -> Self {
        if let Some(value) = normalize_runtime_value(server_url) {
            self.server_url = normalize_base_url(&value);
        }
        self
    }

    #[must_use]
    pub fn with_session_file(mut self, path: PathBuf) -> Self {
        self.session_file = path;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Default)]
struct RuntimeConfig {
    server_url: Option<String>,
    session_file: Option<String>,
    timeout_secs: Option<u64>,
}

fn runtime_config() -> RuntimeConfig {
    let read = |key: &str| env::var(key).ok().and_then(|value| normalize_runtime_value(&value));

    RuntimeConfig {
        server_url: read("DASBOR_SERVER_URL"),
        session_file: read("DASBOR_SESSION_FILE"),
        timeout_secs: read("DASBOR_TIMEOUT_SECS").and_then(|value| value.parse().ok()),
    }
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.server_url {
        config.server_url = normalize_base_url(&value);
    }
    if let Some(value) = runtime.session_file {
        config.session_file = PathBuf::from(value);
    }
    if let Some(value) = runtime.timeout_secs.filter(|secs| *secs > 0) {
        config.timeout = Duration::from_secs(value);
    }
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn default_session_file() -> PathBuf {
    match env::var_os("HOME").filter(|home| !home.is_empty()) {
        Some(home) => PathBuf::from(home).join(SESSION_DIR).join(SESSION_FILE),
        None => PathBuf::from(FALLBACK_SESSION_FILE),
    }
}

/// Joins a base URL and a request path with exactly one slash.
#[must_use]
pub fn api_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
