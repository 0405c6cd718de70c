//! src/domain/message.rs
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("A message must not be empty")]
    Empty,
}

/// Free text typed into the contact form. Kept verbatim, newlines included.
#[derive(Debug, Clone, Serialize)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn parse(s: String) -> Result<Self, Error> {
        if s.trim().is_empty() {
            return Err(Error::Empty);
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
