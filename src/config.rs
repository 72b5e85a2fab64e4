use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crm_url: String,
    pub crm_org_id: String,
    pub success_redirect_url: String,
    pub error_redirect_url: String,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub app_domain: Option<String>, // Informational only, kept for deploy tooling
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // config.env is the historical file name; .env works as a fallback.
        // Real environment variables win over both.
        dotenvy::from_filename("config.env").ok();
        dotenvy::dotenv().ok();

        let config = Self {
            crm_url: std::env::var("SF_SALESFORCE_URL")
                .map_err(|_| anyhow::anyhow!("SF_SALESFORCE_URL environment variable required"))
                .and_then(|value| {
                    if value.trim().is_empty() {
                        anyhow::bail!("SF_SALESFORCE_URL cannot be empty");
                    }
                    let parsed = url::Url::parse(&value)
                        .map_err(|e| anyhow::anyhow!("SF_SALESFORCE_URL is not a valid URL: {}", e))?;
                    if parsed.scheme() != "http" && parsed.scheme() != "https" {
                        anyhow::bail!("SF_SALESFORCE_URL must be an http:// or https:// URL");
                    }
                    Ok(value)
                })?,
            crm_org_id: std::env::var("SF_ORG_ID")
                .map_err(|_| anyhow::anyhow!("SF_ORG_ID environment variable required"))
                .and_then(|value| {
                    if value.trim().is_empty() {
                        anyhow::bail!("SF_ORG_ID cannot be empty");
                    }
                    Ok(value)
                })?,
            success_redirect_url: std::env::var("SF_RETURN_URL_SUCCESS")
                .map_err(|_| anyhow::anyhow!("SF_RETURN_URL_SUCCESS environment variable required"))
                .and_then(|value| {
                    if value.trim().is_empty() {
                        anyhow::bail!("SF_RETURN_URL_SUCCESS cannot be empty");
                    }
                    let parsed = url::Url::parse(&value).map_err(|e| {
                        anyhow::anyhow!("SF_RETURN_URL_SUCCESS is not a valid URL: {}", e)
                    })?;
                    if parsed.scheme() != "http" && parsed.scheme() != "https" {
                        anyhow::bail!("SF_RETURN_URL_SUCCESS must be an http:// or https:// URL");
                    }
                    Ok(value)
                })?,
            error_redirect_url: std::env::var("SF_RETURN_URL_ERROR")
                .map_err(|_| anyhow::anyhow!("SF_RETURN_URL_ERROR environment variable required"))
                .and_then(|value| {
                    if value.trim().is_empty() {
                        anyhow::bail!("SF_RETURN_URL_ERROR cannot be empty");
                    }
                    let parsed = url::Url::parse(&value).map_err(|e| {
                        anyhow::anyhow!("SF_RETURN_URL_ERROR is not a valid URL: {}", e)
                    })?;
                    if parsed.scheme() != "http" && parsed.scheme() != "https" {
                        anyhow::bail!("SF_RETURN_URL_ERROR must be an http:// or https:// URL");
                    }
                    Ok(value)
                })?,
            telegram_bot_token: std::env::var("TG_BOT_TOKEN")
                .map_err(|_| anyhow::anyhow!("TG_BOT_TOKEN environment variable required"))
                .and_then(|token| {
                    if token.trim().is_empty() {
                        anyhow::bail!("TG_BOT_TOKEN cannot be empty");
                    }
                    Ok(token)
                })?,
            telegram_chat_id: std::env::var("TG_CHAT_ID")
                .map_err(|_| anyhow::anyhow!("TG_CHAT_ID environment variable required"))
                .and_then(|chat_id| {
                    if chat_id.trim().is_empty() {
                        anyhow::bail!("TG_CHAT_ID cannot be empty");
                    }
                    Ok(chat_id)
                })?,
            app_domain: std::env::var("APP_DOMAIN")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("CRM endpoint: {}", config.crm_url);
        tracing::debug!("Success redirect: {}", config.success_redirect_url);
        tracing::debug!("Error redirect: {}", config.error_redirect_url);
        tracing::debug!("Telegram chat: {}", config.telegram_chat_id);
        if let Some(ref domain) = config.app_domain {
            tracing::info!("Public domain configured: {}", domain);
        }
        tracing::debug!("Server port: {}", config.port);

        Ok(config)
    }
}
