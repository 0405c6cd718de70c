//! src/email/smtp.rs
use crate::configuration::EmailSettings;
use crate::email::{EmailProvider, Mailbox, OutgoingEmail, SendError, SetupError};
use anyhow::Context;
use async_trait::async_trait;
use lettre::message::{header::ContentType, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

/// Authenticated SMTP relay, e.g. Gmail with an app password.
pub struct Smtp {
    host: String,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl std::fmt::Debug for Smtp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Smtp").field("host", &self.host).finish()
    }
}

impl Smtp {
    pub fn from_settings(settings: &EmailSettings) -> Result<Self, SetupError> {
        let (user, password) = settings
            .credentials
            .smtp_login()
            .ok_or(SetupError::MissingCredential("EMAIL_USER / EMAIL_APP_PASSWORD"))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.smtp_host)
            .with_context(|| format!("Failed to create SMTP transport for {}", settings.smtp_host))?
            .credentials(Credentials::new(
                user.to_string(),
                password.expose_secret().to_string(),
            ))
            .timeout(Some(settings.timeout()))
            .build();

        Ok(Self {
            host: settings.smtp_host.clone(),
            transport,
        })
    }
}

fn mailbox(mailbox: &Mailbox) -> Result<lettre::message::Mailbox, anyhow::Error> {
    let address = mailbox
        .address
        .as_ref()
        .parse::<lettre::Address>()
        .with_context(|| format!("Invalid address: {}", mailbox.address))?;
    Ok(lettre::message::Mailbox::new(mailbox.name.clone(), address))
}

pub(crate) fn build_message(email: &OutgoingEmail) -> Result<Message, anyhow::Error> {
    let mut builder = Message::builder()
        .from(mailbox(&email.sender)?)
        .subject(email.subject.as_str());

    for recipient in &email.to {
        builder = builder.to(mailbox(recipient)?);
    }
    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(mailbox(&Mailbox::from(reply_to.clone()))?);
    }

    builder
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(email.text_content.clone()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(email.html_content.clone()),
                ),
        )
        .context("Failed to build the email")
}

#[async_trait]
impl EmailProvider for Smtp {
    #[tracing::instrument(name = "Sending an email over SMTP", skip_all, fields(host = %self.host, subject = %email.subject))]
    async fn send(&self, email: &OutgoingEmail) -> Result<(), SendError> {
        let message = build_message(email).map_err(SendError::InvalidMessage)?;

        self.transport
            .send(message)
            .await
            .context("SMTP relay refused the email")
            .map_err(SendError::Delivery)?;

        Ok(())
    }
}
