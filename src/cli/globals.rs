use crate::{
    app_lib::AppConfig,
    features::auth::AuthContext,
    session::store::FileStore,
};
use anyhow::{Context, Result};
use std::{path::PathBuf, sync::Arc, time::Duration};

/// Flags shared by every subcommand. Unset values keep the environment and
/// build-time defaults from `AppConfig::load`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    pub server_url: Option<String>,
    pub session_file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

impl GlobalArgs {
    #[must_use]
    pub fn config(&self) -> AppConfig {
        let mut config = AppConfig::load();

        if let Some(server_url) = &self.server_url {
            config = config.with_server_url(server_url);
        }
        if let Some(session_file) = &self.session_file {
            config = config.with_session_file(session_file.clone());
        }
        if let Some(timeout) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(timeout));
        }

        config
    }

    /// Builds the auth context over the on-disk session.
    ///
    /// # Errors
    /// Returns an error if no server URL is configured or the HTTP client
    /// cannot be built.
    pub fn auth_context(&self) -> Result<AuthContext> {
        let config = self.config();
        if config.server_url.is_empty() {
            anyhow::bail!("missing server URL: pass --server-url or set DASBOR_SERVER_URL");
        }

        let store = Arc::new(FileStore::new(config.session_file.clone()));
        AuthContext::init(&config, store).context("failed to build the API client")
    }
}
