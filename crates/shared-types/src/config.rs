use serde::{Deserialize, Serialize};

/// Backend used when no configuration overrides it.
pub const DEFAULT_API_BASE_URL: &str = "https://kronotrack-backend-latest.onrender.com";

/// Connection settings for the remote Kronotrack API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Log verbosity. `None` means "pick by build profile".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: Option<String>,
}

impl LoggingConfig {
    /// Resolve the effective level name: the configured value when it is
    /// one of the known names, otherwise `debug` for debug builds and
    /// `warn` for release builds.
    pub fn effective_level(&self, debug_build: bool) -> &str {
        match self.level.as_deref().map(str::trim) {
            Some(level @ ("trace" | "debug" | "info" | "warn" | "error")) => level,
            _ if debug_build => "debug",
            _ => "warn",
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parse a `config.toml` document. A malformed document yields the
    /// defaults; the parse error is logged.
    pub fn from_toml_str(contents: &str) -> Self {
        match toml::from_str::<AppConfig>(contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "config.toml is malformed, using defaults");
                AppConfig::default()
            }
        }
    }

    /// Replace the API base URL when `url` is set and non-blank.
    pub fn with_base_url_override(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}
