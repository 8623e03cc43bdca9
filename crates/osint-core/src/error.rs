use thiserror::Error;

/// Result type alias for OSINT operations
pub type Result<T> = std::result::Result<T, OsintError>;

/// Errors that can occur while serving an OSINT request
#[derive(Error, Debug)]
pub enum OsintError {
    /// A required request field was absent or empty
    #[error("{field} is required")]
    MissingField {
        /// Human-readable field name ("Domain", "IP", "URL")
        field: &'static str,
    },

    /// Request body was not valid JSON
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The target page could not be fetched
    #[error("{0}")]
    Fetch(String),

    /// WHOIS lookup failed
    #[error("WHOIS lookup failed: {0}")]
    Whois(String),

    /// DNS resolution failed
    #[error("DNS resolution failed: {0}")]
    Dns(String),

    /// Invalid IP address format
    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Operation exceeded its configured time bound
    #[error("operation timed out after {0} seconds")]
    Timeout(u64),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl OsintError {
    /// Shorthand for a missing required field
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Returns true if the error was caused by the request itself
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidBody(_))
    }

    /// HTTP status code this error maps to when it terminates a request
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_matches_api_contract() {
        assert_eq!(OsintError::missing("Domain").to_string(), "Domain is required");
        assert_eq!(OsintError::missing("URL").to_string(), "URL is required");
    }

    #[test]
    fn validation_errors_are_client_errors() {
        assert_eq!(OsintError::missing("IP").status_code(), 400);
        assert_eq!(OsintError::InvalidBody("eof".into()).status_code(), 400);
    }

    #[test]
    fn external_failures_are_server_errors() {
        let err = OsintError::Fetch("connection refused".into());
        assert!(!err.is_client_error());
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "connection refused");
    }
}
