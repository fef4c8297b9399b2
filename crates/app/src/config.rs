use shared_types::AppConfig;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::Level;

const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Settings baked in at build time.
pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::from_toml_str(CONFIG_TOML).with_base_url_override(option_env!("KRONOTRACK_API_URL"))
});

/// Log level for the Dioxus logger.
pub fn log_level(config: &AppConfig) -> Level {
    let name = config.logging.effective_level(cfg!(debug_assertions));
    Level::from_str(name).unwrap_or(Level::INFO)
}
