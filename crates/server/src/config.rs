use shared_types::PortalConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides `[api] base_url`.
const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Parse `config.toml` contents, falling back to defaults on error.
pub fn parse_config(contents: &str) -> PortalConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config, using defaults");
        PortalConfig::default()
    })
}

/// Read `config.toml` and the environment, and store the result in the
/// global `OnceLock`. Only the first call has effect.
///
/// A missing or unparseable file leaves every setting at its default.
pub fn load_config() -> &'static PortalConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let file_config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::warn!(path = CONFIG_PATH, error = %e, "Config file not found, using defaults");
                PortalConfig::default()
            }
        };

        let config = file_config.with_base_url_override(std::env::var(API_BASE_URL_ENV).ok());
        tracing::info!(
            base_url = %config.api.base_url,
            timeout_secs = config.api.timeout_secs,
            telemetry = config.features.telemetry,
            "Portal config loaded"
        );
        config
    })
}

/// The loaded configuration, loading it on first use.
pub fn portal_config() -> &'static PortalConfig {
    load_config()
}
