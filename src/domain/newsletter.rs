//! src/domain/newsletter.rs
use super::{check, EmailAddress, ValidationError};
use crate::routes::NewsletterForm;

#[derive(Debug, Clone)]
pub struct NewsletterSubmission {
    pub email: EmailAddress,
}

impl TryFrom<NewsletterForm> for NewsletterSubmission {
    type Error = ValidationError;

    fn try_from(form: NewsletterForm) -> Result<Self, Self::Error> {
        let mut issues = Vec::new();
        match check(
            "email",
            EmailAddress::parse(form.email.unwrap_or_default()),
            &mut issues,
        ) {
            Some(email) => Ok(Self { email }),
            None => Err(ValidationError(issues)),
        }
    }
}
