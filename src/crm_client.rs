use crate::config::Config;
use crate::errors::AppError;
use crate::models::CrmRecord;
use reqwest::StatusCode;
use std::time::Duration;

/// Outcome of a completed CRM exchange, whatever the status code.
#[derive(Debug)]
pub struct CrmOutcome {
    pub status: StatusCode,
    pub body: String,
}

/// Client for the CRM web-to-lead ingestion endpoint.
///
/// The endpoint accepts a form-encoded POST and answers with a redirect or
/// an HTML page; the body is only ever used for logging.
#[derive(Clone)]
pub struct CrmClient {
    client: reqwest::Client,
    endpoint_url: String,
}

impl CrmClient {
    /// Creates a new `CrmClient` from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::ClientInit(format!("Failed to create CRM client: {}", e)))?;

        Ok(Self {
            client,
            endpoint_url: config.crm_url.clone(),
        })
    }

    /// Forwards a lead record to the CRM in a single attempt.
    ///
    /// Any completed HTTP exchange, 4xx and 5xx included, comes back as an
    /// `Ok(CrmOutcome)`; only transport-level failures (connect, DNS, TLS,
    /// timeout, interrupted body read) become `AppError::CrmUnreachable`.
    ///
    /// # Arguments
    ///
    /// * `record` - The form-encoded lead record to submit.
    pub async fn forward(&self, record: &CrmRecord) -> Result<CrmOutcome, AppError> {
        tracing::info!("Forwarding lead to CRM: {}", self.endpoint_url);

        let response = self
            .client
            .post(&self.endpoint_url)
            .form(record)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!("CRM responded with status {}", status);

        Ok(CrmOutcome { status, body })
    }
}
