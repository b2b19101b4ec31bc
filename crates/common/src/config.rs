use std::time::Duration;

use crate::error::ConfigError;

/// Default homework status endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Secrets the bot cannot run without.
#[derive(Clone)]
pub struct Credentials {
    /// OAuth token for the homework status endpoint
    pub endpoint_token: String,

    /// Telegram bot token
    pub notifier_token: String,

    /// Telegram chat that receives every notification
    pub recipient_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("endpoint_token", &"***")
            .field("notifier_token", &"***")
            .field("recipient_id", &self.recipient_id)
            .finish()
    }
}

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Credentials,

    /// Homework status endpoint URL
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between two polling cycles in seconds (default: 600)
    pub poll_interval_secs: u64,

    /// Upper bound for a single HTTP request in seconds (default: 30)
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as missing. Every absent credential is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let endpoint_token = get("PRACTICUM_TOKEN");
        let notifier_token = get("TELEGRAM_TOKEN");
        let recipient_id = get("TELEGRAM_CHAT_ID");

        let credentials = match (endpoint_token, notifier_token, recipient_id) {
            (Some(endpoint_token), Some(notifier_token), Some(recipient_id)) => Credentials {
                endpoint_token,
                notifier_token,
                recipient_id,
            },
            (endpoint_token, notifier_token, recipient_id) => {
                let missing = [
                    ("PRACTICUM_TOKEN", endpoint_token.is_none()),
                    ("TELEGRAM_TOKEN", notifier_token.is_none()),
                    ("TELEGRAM_CHAT_ID", recipient_id.is_none()),
                ]
                .into_iter()
                .filter_map(|(key, absent)| absent.then_some(key))
                .collect();
                return Err(ConfigError::MissingCredentials(missing));
            }
        };

        Ok(Self {
            credentials,
            endpoint: get("HOMEWORK_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            poll_interval_secs: parse_u64(get("POLL_INTERVAL_SECS"), "POLL_INTERVAL_SECS", 600)?,
            request_timeout_secs: parse_u64(
                get("REQUEST_TIMEOUT_SECS"),
                "REQUEST_TIMEOUT_SECS",
                30,
            )?,
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_u64(value: Option<String>, key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}
