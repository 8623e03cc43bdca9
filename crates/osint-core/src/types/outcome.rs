use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Error shape embedded in a response in place of a failed lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupFailure {
    /// Message describing why the lookup failed
    pub error: String,
}

impl LookupFailure {
    /// Create a failure from any displayable error
    pub fn new(error: impl Display) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Result of one external lookup, embedded as data in a response.
///
/// Serializes untagged: a successful lookup is its plain value, a failed one
/// is `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    /// The lookup succeeded
    Found(T),
    /// The lookup failed; the message replaces the value
    Failed(LookupFailure),
}

impl<T> Outcome<T> {
    /// Returns true if the lookup succeeded
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Borrow the successful value, if any
    #[must_use]
    pub const fn found(&self) -> Option<&T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Borrow the failure message, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Found(_) => None,
            Self::Failed(failure) => Some(&failure.error),
        }
    }
}

impl<T, E: Display> From<std::result::Result<T, E>> for Outcome<T> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Found(value),
            Err(e) => Self::Failed(LookupFailure::new(e)),
        }
    }
}
