use std::path::{Path, PathBuf};

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Environment variable overriding the server URL
pub const SERVER_URL_ENV: &str = "CITYDESK_API_URL";

/// Client configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self { app: builder.build()? })
    }

    /// Defaults, then `config.toml`, then the environment.
    ///
    /// Anything invalid is logged and skipped so the app still starts.
    pub fn load() -> Self {
        Self::load_from(Self::config_file_path().as_deref())
    }

    /// [`Config::load`] with an explicit config file location.
    pub fn load_from(config_file: Option<&Path>) -> Self {
        let mut app = AppConfig::default();

        if let Some(path) = config_file.filter(|p| p.exists()) {
            match AppConfig::from_toml_file(path) {
                Ok(file_config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    app = file_config;
                }
                Err(e) => tracing::warn!("Ignoring config file {}: {}", path.display(), e),
            }
        }

        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            match AppConfig::builder().server_url(url).build() {
                Ok(env_config) => app = env_config,
                Err(e) => tracing::warn!("Ignoring {}: {}", SERVER_URL_ENV, e),
            }
        }

        tracing::debug!("Using server {}", app.server_url);
        Self { app }
    }

    /// `<config_dir>/citydesk/config.toml`
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("citydesk").join("config.toml"))
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.server_url(), path.trim_start_matches('/'))
    }

    pub fn server_url(&self) -> &str {
        &self.app.server_url
    }
}
