//! src/dispatch.rs
use crate::configuration::{EmailSettings, ProviderKind};
use crate::domain::{ContactSubmission, EmailAddress, NewsletterSubmission};
use crate::email::{EmailBuilder, EmailProvider, Mailbox, OutgoingEmail, SendError};
use crate::templates;
use std::sync::Arc;

/// Fixed addresses and display names the dispatcher writes with.
#[derive(Debug, Clone)]
pub struct Mailboxes {
    pub owner: EmailAddress,
    pub owner_name: String,
    pub sender: EmailAddress,
    pub contact_sender_name: String,
}

impl TryFrom<&EmailSettings> for Mailboxes {
    type Error = String;

    fn try_from(settings: &EmailSettings) -> Result<Self, Self::Error> {
        // An SMTP relay only accepts mail from the account it logged in as.
        let sender = match (settings.provider, settings.credentials.smtp_login()) {
            (ProviderKind::Smtp, Some((user, _))) => user,
            _ => settings.sender_email.as_str(),
        };

        Ok(Self {
            owner: EmailAddress::parse(settings.owner_email.clone())
                .map_err(|e| format!("email.owner_email {:?}: {}", settings.owner_email, e))?,
            owner_name: settings.owner_name.clone(),
            sender: EmailAddress::parse(sender.to_string())
                .map_err(|e| format!("Sender address {:?}: {}", sender, e))?,
            contact_sender_name: settings.contact_sender_name.clone(),
        })
    }
}

#[derive(Debug)]
pub enum Delivery {
    Sent,
    Failed(SendError),
    /// Never attempted because an earlier step failed.
    Skipped,
}

impl Delivery {
    pub fn is_sent(&self) -> bool {
        matches!(self, Delivery::Sent)
    }
}

/// Both steps of a contact submission. Only the notification decides the
/// outcome, the acknowledgment is a courtesy to the visitor.
#[derive(Debug)]
pub struct ContactDispatch {
    notification: Delivery,
    acknowledgment: Delivery,
}

impl ContactDispatch {
    /// The owner was not reached, so the visitor is never acknowledged.
    pub fn notification_failed(e: SendError) -> Self {
        Self {
            notification: Delivery::Failed(e),
            acknowledgment: Delivery::Skipped,
        }
    }

    pub fn notified(acknowledgment: Delivery) -> Self {
        Self {
            notification: Delivery::Sent,
            acknowledgment,
        }
    }

    pub fn notification(&self) -> &Delivery {
        &self.notification
    }

    pub fn acknowledgment(&self) -> &Delivery {
        &self.acknowledgment
    }

    pub fn primary_sent(&self) -> bool {
        self.notification.is_sent()
    }

    pub fn secondary_sent(&self) -> bool {
        self.acknowledgment.is_sent()
    }

    pub fn into_result(self) -> Result<(), SendError> {
        match self.notification {
            Delivery::Failed(e) => Err(e),
            Delivery::Sent => Ok(()),
            // Unreachable: neither constructor leaves the notification skipped.
            Delivery::Skipped => Err(SendError::InvalidMessage(anyhow::anyhow!(
                "The owner notification was never attempted"
            ))),
        }
    }
}

pub struct Dispatcher {
    provider: Arc<dyn EmailProvider>,
    mailboxes: Mailboxes,
}

impl Dispatcher {
    pub fn new(provider: Arc<dyn EmailProvider>, mailboxes: Mailboxes) -> Self {
        Self {
            provider,
            mailboxes,
        }
    }

    fn notification(&self, submission: &ContactSubmission) -> OutgoingEmail {
        let rendered = templates::contact_notification(submission);
        EmailBuilder::new(Mailbox::new(
            &self.mailboxes.contact_sender_name,
            self.mailboxes.sender.clone(),
        ))
        .to(self.mailboxes.owner.clone())
        .reply_to(submission.email.clone())
        .subject(rendered.subject)
        .html_content(rendered.html)
        .text_content(rendered.text)
        .build()
    }

    fn acknowledgment(&self, submission: &ContactSubmission) -> OutgoingEmail {
        let rendered = templates::contact_acknowledgment(submission, &self.mailboxes.owner_name);
        EmailBuilder::new(self.personal_sender())
            .to(Mailbox::new(
                submission.name.as_ref(),
                submission.email.clone(),
            ))
            .subject(rendered.subject)
            .html_content(rendered.html)
            .text_content(rendered.text)
            .build()
    }

    fn welcome(&self, submission: &NewsletterSubmission) -> OutgoingEmail {
        let rendered = templates::newsletter_welcome(&self.mailboxes.owner_name);
        EmailBuilder::new(self.personal_sender())
            .to(submission.email.clone())
            .subject(rendered.subject)
            .html_content(rendered.html)
            .text_content(rendered.text)
            .build()
    }

    fn personal_sender(&self) -> Mailbox {
        Mailbox::new(&self.mailboxes.owner_name, self.mailboxes.sender.clone())
    }

    /// Notifies the owner, then acknowledges the visitor if that worked.
    #[tracing::instrument(name = "Dispatching a contact submission", skip_all)]
    pub async fn send_contact(&self, submission: &ContactSubmission) -> ContactDispatch {
        if let Err(e) = self.provider.send(&self.notification(submission)).await {
            tracing::error!(error.cause_chain = ?e, "Failed to notify the owner");
            return ContactDispatch::notification_failed(e);
        }

        let acknowledgment = match self.provider.send(&self.acknowledgment(submission)).await {
            Ok(()) => Delivery::Sent,
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Failed to send the auto-reply");
                Delivery::Failed(e)
            }
        };

        ContactDispatch::notified(acknowledgment)
    }

    #[tracing::instrument(name = "Dispatching a newsletter welcome", skip_all)]
    pub async fn send_welcome(&self, submission: &NewsletterSubmission) -> Result<(), SendError> {
        self.provider
            .send(&self.welcome(submission))
            .await
            .map_err(|e| {
                tracing::error!(error.cause_chain = ?e, "Failed to send the welcome email");
                e
            })
    }
}
