//! src/outcome.rs
use serde::{Deserialize, Serialize};

pub const CONTACT_REJECTED: &str = "Please fill all fields correctly.";
pub const NEWSLETTER_REJECTED: &str = "Please enter a valid email address.";
pub const SERVICE_UNAVAILABLE: &str =
    "The email service is currently unavailable. Please try again later.";
pub const DELIVERY_FAILED: &str = "Failed to send email. Please try again.";
pub const UNEXPECTED: &str = "An unexpected error occurred. Please try again.";
pub const TOO_LARGE: &str = "Your submission is too large. Please shorten your message and try again.";

/// What every submission reports back to the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl Outcome {
    pub fn success() -> Self {
        Self {
            success: true,
            error: String::new(),
            message: None,
            details: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: None,
            details: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
