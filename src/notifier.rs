use crate::config::Config;
use crate::errors::AppError;
use serde_json::json;
use std::time::Duration;

/// Production Telegram Bot API endpoint.
const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Best-effort Telegram notifier.
///
/// Delivery is fire-and-forget: every failure is logged and swallowed, so a
/// notification problem can never affect the submitter's response.
#[derive(Clone)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a new `TelegramNotifier` from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                AppError::ClientInit(format!("Failed to create Telegram client: {}", e))
            })?;

        Ok(Self {
            client,
            api_base: TELEGRAM_API_BASE.to_string(),
            bot_token: config.telegram_bot_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        })
    }

    /// Overrides the API base URL so tests can point the notifier at a mock
    /// server instead of the real Bot API.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Sends a message to the configured chat.
    ///
    /// Never fails from the caller's point of view: transport errors and
    /// non-2xx answers alike are logged at warn and dropped.
    pub async fn notify(&self, text: &str) {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.bot_token);
        let body = json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": "HTML",
        });

        match self.client.post(&url).json(&body).send().await {
            Ok(response) if !response.status().is_success() => {
                let status = response.status();
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                tracing::warn!("Telegram API returned {}: {}", status, error_text);
            }
            Ok(_) => {
                tracing::debug!(
                    "✓ Telegram notification delivered ({} chars)",
                    text.chars().count()
                );
            }
            Err(e) => {
                // The request URL embeds the bot token; strip it before logging.
                tracing::warn!("Telegram delivery failed: {}", e.without_url());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            crm_url: "https://example.com/servlet".to_string(),
            crm_org_id: "00Dtest".to_string(),
            success_redirect_url: "https://example.com/thanks".to_string(),
            error_redirect_url: "https://example.com/oops".to_string(),
            telegram_bot_token: "123456:ABC-test".to_string(),
            telegram_chat_id: "-100123".to_string(),
            app_domain: None,
            port: 3000,
        }
    }

    #[tokio::test]
    async fn test_notifier_creation() {
        let notifier = TelegramNotifier::new(&test_config());
        assert!(notifier.is_ok());
    }

    #[tokio::test]
    async fn test_api_base_override() {
        let notifier = TelegramNotifier::new(&test_config())
            .unwrap()
            .with_api_base("http://127.0.0.1:9");
        assert_eq!(notifier.api_base, "http://127.0.0.1:9");
    }
}
