//! src/email/mod.rs
use crate::configuration::{EmailSettings, ProviderKind};
use crate::domain::EmailAddress;
use async_trait::async_trait;
use std::sync::Arc;

mod resend;
pub use resend::Resend;

mod smtp;
pub use smtp::Smtp;

/// A display name paired with an address, rendered as `Name <address>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    pub name: Option<String>,
    pub address: EmailAddress,
}

impl Mailbox {
    pub fn new(name: impl Into<String>, address: EmailAddress) -> Self {
        Self {
            name: Some(name.into()),
            address,
        }
    }
}

impl From<EmailAddress> for Mailbox {
    fn from(address: EmailAddress) -> Self {
        Self {
            name: None,
            address,
        }
    }
}

impl std::fmt::Display for Mailbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.address),
            None => write!(f, "{}", self.address),
        }
    }
}

/// A provider-neutral message, built with [`EmailBuilder`].
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub sender: Mailbox,
    pub to: Vec<Mailbox>,
    pub reply_to: Option<EmailAddress>,
    pub subject: String,
    pub html_content: String,
    pub text_content: String,
}

pub struct EmailBuilder {
    sender: Mailbox,
    to: Vec<Mailbox>,
    reply_to: Option<EmailAddress>,
    subject: String,
    html_content: String,
    text_content: String,
}

impl EmailBuilder {
    pub fn new(sender: Mailbox) -> Self {
        Self {
            sender,
            to: vec![],
            reply_to: None,
            subject: String::new(),
            html_content: String::new(),
            text_content: String::new(),
        }
    }

    pub fn to(mut self, recipient: impl Into<Mailbox>) -> Self {
        self.to.push(recipient.into());
        self
    }

    pub fn reply_to(mut self, address: EmailAddress) -> Self {
        self.reply_to = Some(address);
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn html_content(mut self, html_content: impl Into<String>) -> Self {
        self.html_content = html_content.into();
        self
    }

    pub fn text_content(mut self, text_content: impl Into<String>) -> Self {
        self.text_content = text_content.into();
        self
    }

    pub fn build(self) -> OutgoingEmail {
        OutgoingEmail {
            sender: self.sender,
            to: self.to,
            reply_to: self.reply_to,
            subject: self.subject,
            html_content: self.html_content,
            text_content: self.text_content,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SendError {
    #[error("The email provider is not configured: {0}")]
    Configuration(String),
    #[error("The email provider failed to deliver the message")]
    Delivery(#[source] anyhow::Error),
    #[error("The message could not be handed to the email provider")]
    InvalidMessage(#[source] anyhow::Error),
}

#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), SendError>;
}

/// Stands in for a provider whose credential is missing, so a bad deployment
/// surfaces as a per-request configuration error instead of a crash.
#[derive(Debug)]
pub struct Unconfigured {
    reason: String,
}

impl Unconfigured {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl EmailProvider for Unconfigured {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), SendError> {
        Err(SendError::Configuration(self.reason.clone()))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SetupError {
    #[error("{0} is not set")]
    MissingCredential(&'static str),
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

/// Builds the provider selected in the settings, falling back to
/// [`Unconfigured`] when it cannot be set up.
pub fn provider_from_settings(settings: &EmailSettings) -> Arc<dyn EmailProvider> {
    let provider: Result<Arc<dyn EmailProvider>, SetupError> = match settings.provider {
        ProviderKind::Resend => Resend::from_settings(settings).map(|p| Arc::new(p) as Arc<dyn EmailProvider>),
        ProviderKind::Smtp => Smtp::from_settings(settings).map(|p| Arc::new(p) as Arc<dyn EmailProvider>),
    };

    match provider {
        Ok(provider) => {
            tracing::info!(provider = ?settings.provider, "Email provider ready");
            provider
        }
        Err(e) => {
            tracing::error!(
                provider = ?settings.provider,
                error.cause_chain = ?e,
                "Email provider is unavailable, every submission will fail until it is configured"
            );
            Arc::new(Unconfigured::new(e.to_string()))
        }
    }
}
