use shared_types::{AppConfig, ContactInfo};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides [`CONFIG_PATH`].
const CONFIG_PATH_VAR: &str = "CONTACT_CONFIG_PATH";

/// Parse `config.toml` contents. Malformed input falls back to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Read the config file and store it in the global `OnceLock`. Safe to call
/// multiple times; only the first call has effect.
///
/// If the file is missing or unparseable, every setting takes its default.
pub fn load_config() {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| CONFIG_PATH.to_string());

        let config = match std::fs::read_to_string(&path) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::warn!(%path, error = %e, "config not found, using defaults");
                AppConfig::default()
            }
        };
        tracing::info!(
            url = %config.contact.url,
            is_netlify = config.contact.is_netlify,
            "contact form configured"
        );
        config
    });
}

/// Contact form settings. Returns defaults if `load_config()` hasn't been
/// called yet.
pub fn contact_info() -> &'static ContactInfo {
    static DEFAULT: OnceLock<ContactInfo> = OnceLock::new();
    match CONFIG.get() {
        Some(config) => &config.contact,
        None => DEFAULT.get_or_init(ContactInfo::default),
    }
}
