//! src/domain/contact.rs
use super::{check, EmailAddress, FieldIssue, MessageBody, Name, ValidationError};
use crate::routes::ContactForm;

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: Name,
    pub email: EmailAddress,
    pub message: MessageBody,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let mut issues: Vec<FieldIssue> = Vec::new();

        let name = check(
            "name",
            Name::parse(form.name.unwrap_or_default()),
            &mut issues,
        );
        let email = check(
            "email",
            EmailAddress::parse(form.email.unwrap_or_default()),
            &mut issues,
        );
        let message = check(
            "message",
            MessageBody::parse(form.message.unwrap_or_default()),
            &mut issues,
        );

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(Self {
                name,
                email,
                message,
            }),
            _ => Err(ValidationError(issues)),
        }
    }
}
