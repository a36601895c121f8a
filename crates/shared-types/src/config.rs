use serde::{Deserialize, Serialize};

/// Where the contact form posts and whether the host expects Netlify's
/// form attributes.
///
/// Loaded from `config.toml` at server startup and handed to the client
/// via a server function. Missing keys fall back to a plain POST to the
/// bundled intake endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub is_netlify: bool,
    /// Redirect target of the intake endpoint after a POST.
    #[serde(default = "default_thanks_path")]
    pub thanks_path: String,
}

pub const DEFAULT_CONTACT_URL: &str = "/api/contact";
pub const DEFAULT_THANKS_PATH: &str = "/thanks";

fn default_url() -> String {
    DEFAULT_CONTACT_URL.to_string()
}

fn default_thanks_path() -> String {
    DEFAULT_THANKS_PATH.to_string()
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            url: default_url(),
            is_netlify: false,
            thanks_path: default_thanks_path(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub contact: ContactInfo,
}
