use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{Notifier, NotifyError};

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct BotApiResponse {
    ok: bool,
    description: Option<String>,
}

/// Telegram Bot API channel (`sendMessage`).
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
    token: String,
}

impl TelegramNotifier {
    /// `api_url` is the Bot API base, normally `https://api.telegram.org`.
    pub fn new(api_url: &str, token: String, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.token)
    }
}

impl Notifier for TelegramNotifier {
    async fn send(&self, recipient: &str, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(&SendMessageRequest {
                chat_id: recipient,
                text,
            })
            .send()
            .await
            // The request URL embeds the bot token; keep it out of the error.
            .map_err(|e| NotifyError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let body: Option<BotApiResponse> = response.json().await.ok();

        match body {
            Some(BotApiResponse { ok: true, .. }) if status.is_success() => {
                tracing::debug!(recipient, "Telegram message delivered");
                Ok(())
            }
            Some(BotApiResponse { description, .. }) => Err(NotifyError::Rejected {
                status: status.as_u16(),
                description: description.unwrap_or_else(|| "no description".to_string()),
            }),
            None => Err(NotifyError::Rejected {
                status: status.as_u16(),
                description: "unreadable Bot API response".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_url_strips_trailing_slash() {
        let notifier = TelegramNotifier::new(
            "https://api.telegram.org/",
            "42:abc".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            notifier.send_message_url(),
            "https://api.telegram.org/bot42:abc/sendMessage"
        );
    }
}
