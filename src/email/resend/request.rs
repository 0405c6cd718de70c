//! src/email/resend/request.rs
use crate::email::OutgoingEmail;
use serde::Serialize;

/// Body of `POST /emails`.
#[derive(Debug, Serialize)]
pub struct SendEmailRequest<'a> {
    pub from: String,
    pub to: Vec<&'a str>,
    pub subject: &'a str,
    pub html: &'a str,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<&'a str>,
}

impl<'a> From<&'a OutgoingEmail> for SendEmailRequest<'a> {
    fn from(email: &'a OutgoingEmail) -> Self {
        Self {
            from: email.sender.to_string(),
            to: email.to.iter().map(|m| m.address.as_ref()).collect(),
            subject: &email.subject,
            html: &email.html_content,
            text: &email.text_content,
            reply_to: email.reply_to.as_ref().map(|a| a.as_ref()),
        }
    }
}
