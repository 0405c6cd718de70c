//! src/domain/name.rs
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("A name must not be empty")]
    Empty,
    #[error("A name must not be more than 256 graphemes long")]
    TooLong,
}

#[derive(Debug, Clone, Serialize)]
pub struct Name(String);

impl Name {
    pub fn parse(s: String) -> Result<Self, Error> {
        if s.trim().is_empty() {
            return Err(Error::Empty);
        }

        // Graphemes, not chars: `å` may be two code points but is one
        // user-perceived character.
        if s.graphemes(true).count() > 256 {
            return Err(Error::TooLong);
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
