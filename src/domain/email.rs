//! src/domain/email.rs
use serde::Serialize;
use validator::validate_email;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An email address must not be empty")]
    Empty,
    #[error("Not a valid email address")]
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(Error::Empty);
        }

        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(Error::Invalid)
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
