//! src/forms.rs
//!
//! Validate, dispatch, and map the result onto an [`Outcome`]. Shared by the
//! form surface and the JSON API.
use crate::dispatch::Dispatcher;
use crate::domain::{ContactSubmission, NewsletterSubmission, ValidationError};
use crate::email::SendError;
use crate::outcome::{self, Outcome};
use crate::routes::{error_chain_fmt, ContactForm, NewsletterForm};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

#[derive(thiserror::Error)]
pub enum FormError {
    #[error("{rejection}")]
    Validation {
        rejection: &'static str,
        #[source]
        source: ValidationError,
    },
    #[error("{}", outcome::SERVICE_UNAVAILABLE)]
    Configuration(#[source] SendError),
    #[error("{}", outcome::DELIVERY_FAILED)]
    Delivery(#[source] SendError),
    #[error("{}", outcome::UNEXPECTED)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<SendError> for FormError {
    fn from(e: SendError) -> Self {
        match e {
            SendError::Configuration(_) => FormError::Configuration(e),
            SendError::Delivery(_) => FormError::Delivery(e),
            SendError::InvalidMessage(inner) => FormError::Unexpected(inner),
        }
    }
}

impl FormError {
    /// The curated line shown to the visitor. Never carries internal detail.
    pub fn outcome(&self) -> Outcome {
        Outcome::failure(self.to_string())
    }
}

impl ResponseError for FormError {
    fn status_code(&self) -> StatusCode {
        match self {
            FormError::Validation { .. } => StatusCode::BAD_REQUEST,
            FormError::Configuration(_) | FormError::Delivery(_) | FormError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut outcome = self.outcome();
        if let FormError::Validation { source, .. } = self {
            if let Ok(details) = serde_json::to_value(source.issues()) {
                outcome = outcome.with_details(details);
            }
        }
        HttpResponse::build(self.status_code()).json(outcome)
    }
}

#[tracing::instrument(
    name = "Submitting the contact form",
    skip(dispatcher, form),
    fields(visitor_email = ?form.email)
)]
pub async fn submit_contact(dispatcher: &Dispatcher, form: ContactForm) -> Result<(), FormError> {
    let submission = ContactSubmission::try_from(form).map_err(|source| {
        tracing::info!(error = %source, "Rejected contact form");
        FormError::Validation {
            rejection: outcome::CONTACT_REJECTED,
            source,
        }
    })?;

    let dispatch = dispatcher.send_contact(&submission).await;
    tracing::info!(
        notification_sent = dispatch.primary_sent(),
        acknowledgment_sent = dispatch.secondary_sent(),
        "Contact form dispatched"
    );
    dispatch.into_result()?;
    Ok(())
}

#[tracing::instrument(
    name = "Subscribing to the newsletter",
    skip(dispatcher, form),
    fields(subscriber_email = ?form.email)
)]
pub async fn subscribe_newsletter(
    dispatcher: &Dispatcher,
    form: NewsletterForm,
) -> Result<(), FormError> {
    let submission = NewsletterSubmission::try_from(form).map_err(|source| {
        tracing::info!(error = %source, "Rejected newsletter form");
        FormError::Validation {
            rejection: outcome::NEWSLETTER_REJECTED,
            source,
        }
    })?;

    dispatcher.send_welcome(&submission).await?;
    Ok(())
}

/// Server-action style reply: always a body, success or not.
pub fn respond(result: Result<(), FormError>) -> Outcome {
    match result {
        Ok(()) => Outcome::success(),
        Err(e) => {
            tracing::error!(error.cause_chain = ?e, "Form submission failed");
            e.outcome()
        }
    }
}
