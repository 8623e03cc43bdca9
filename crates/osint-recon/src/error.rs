use thiserror::Error;

/// Result type alias for reconnaissance operations
pub type ReconResult<T> = std::result::Result<T, ReconError>;

/// Errors from reconnaissance lookups
#[derive(Error, Debug)]
pub enum ReconError {
    /// A required input was absent or empty
    #[error("{0} is required")]
    Validation(&'static str),

    /// Page fetch failed (connection, TLS, timeout, body decode)
    #[error("{0}")]
    Fetch(String),

    /// WHOIS lookup error
    #[error("{0}")]
    Whois(String),

    /// DNS resolution error
    #[error("{0}")]
    Dns(String),

    /// Record type not understood by the resolver
    #[error("unknown DNS record type: {0}")]
    UnknownRecordType(String),

    /// Invalid IP address
    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    /// Configured time bound exceeded
    #[error("operation timed out after {0} seconds")]
    Timeout(u64),

    /// Network I/O error
    #[error("network error: {0}")]
    Network(#[from] std::io::Error),
}

impl ReconError {
    /// Returns true if the error was caused by caller input
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<ReconError> for osint_core::OsintError {
    fn from(err: ReconError) -> Self {
        match err {
            ReconError::Validation(field) => Self::MissingField { field },
            ReconError::Fetch(msg) => Self::Fetch(msg),
            ReconError::Whois(msg) => Self::Whois(msg),
            ReconError::Dns(msg) => Self::Dns(msg),
            ReconError::UnknownRecordType(rtype) => {
                Self::Dns(format!("unknown DNS record type: {rtype}"))
            }
            ReconError::InvalidIp(ip) => Self::InvalidIp(ip),
            ReconError::Timeout(secs) => Self::Timeout(secs),
            ReconError::Network(e) => Self::Internal(e.to_string()),
        }
    }
}
