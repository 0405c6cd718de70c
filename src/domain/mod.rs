//! src/domain/mod.rs
mod name;
pub use name::Name;

mod email;
pub use email::EmailAddress;

mod message;
pub use message::MessageBody;

mod contact;
pub use contact::ContactSubmission;

mod newsletter;
pub use newsletter::NewsletterSubmission;

use serde::Serialize;

/// One rejected field of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

/// Every issue found while parsing a raw submission.
#[derive(thiserror::Error, Debug)]
#[error("Invalid submission: {}", describe(.0))]
pub struct ValidationError(pub Vec<FieldIssue>);

impl ValidationError {
    pub fn issues(&self) -> &[FieldIssue] {
        &self.0
    }
}

fn describe(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Records a failed field parse and hands back the parsed value otherwise.
fn check<T, E>(field: &'static str, parsed: Result<T, E>, issues: &mut Vec<FieldIssue>) -> Option<T>
where
    E: std::fmt::Display,
{
    match parsed {
        Ok(value) => Some(value),
        Err(e) => {
            issues.push(FieldIssue {
                field,
                message: e.to_string(),
            });
            None
        }
    }
}
