use std::env;
use tracing::warn;

pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_ANTHROPIC_VERSION: &str = "2023-06-01";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` means the service runs in fallback-only mode.
    pub anthropic_api_key: Option<String>,
    pub anthropic_base_url: String,
    pub anthropic_model: String,
    pub anthropic_version: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            anthropic_base_url: DEFAULT_ANTHROPIC_BASE_URL.to_string(),
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            anthropic_version: DEFAULT_ANTHROPIC_VERSION.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            anthropic_api_key: env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            anthropic_base_url: env::var("ANTHROPIC_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_ANTHROPIC_BASE_URL.to_string()),
            anthropic_model: env::var("ANTHROPIC_MODEL")
                .unwrap_or_else(|_| DEFAULT_ANTHROPIC_MODEL.to_string()),
            anthropic_version: env::var("ANTHROPIC_VERSION")
                .unwrap_or_else(|_| DEFAULT_ANTHROPIC_VERSION.to_string()),
            port: match env::var("PORT") {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    warn!("PORT={} is not a valid port, using {}", raw, DEFAULT_PORT);
                    DEFAULT_PORT
                }),
                Err(_) => DEFAULT_PORT,
            },
        };

        if !config.is_ai_configured() {
            warn!("ANTHROPIC_API_KEY not set - serving static fallback content only");
        }

        config
    }

    pub fn is_ai_configured(&self) -> bool {
        self.anthropic_api_key.is_some()
    }

    pub fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.anthropic_base_url)
    }
}
