//! src/email/resend/mod.rs
use crate::configuration::EmailSettings;
use crate::email::{EmailProvider, OutgoingEmail, SendError, SetupError};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

mod request;
use request::SendEmailRequest;

/// Resend's HTTP API.
#[derive(Debug)]
pub struct Resend {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl Resend {
    pub fn new(
        base_url: String,
        api_key: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, SetupError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the HTTP client")?;

        Ok(Self {
            http_client,
            base_url,
            api_key,
        })
    }

    pub fn from_settings(settings: &EmailSettings) -> Result<Self, SetupError> {
        let api_key = settings
            .credentials
            .resend_api_key()
            .ok_or(SetupError::MissingCredential("RESEND_API_KEY"))?;

        Self::new(
            settings.api_url.clone(),
            api_key.clone(),
            settings.timeout(),
        )
    }
}

#[async_trait]
impl EmailProvider for Resend {
    #[tracing::instrument(name = "Sending an email through Resend", skip_all, fields(subject = %email.subject))]
    async fn send(&self, email: &OutgoingEmail) -> Result<(), SendError> {
        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));
        let body = SendEmailRequest::from(email);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await
            .context("Failed to reach Resend")
            .map_err(SendError::Delivery)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let payload = response.text().await.unwrap_or_default();
        tracing::error!(%status, %payload, "Resend rejected the email");
        Err(SendError::Delivery(anyhow::anyhow!(
            "Resend answered with {}",
            status
        )))
    }
}
