use serde::{Deserialize, Serialize};

/// Domain registration data from a WHOIS lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    /// The domain queried
    pub domain: String,

    /// Sponsoring registrar
    pub registrar: Option<String>,

    /// Registration date, rendered as `YYYY-MM-DD HH:MM:SS` when parseable
    pub creation_date: Option<String>,

    /// Expiration date, rendered as `YYYY-MM-DD HH:MM:SS` when parseable
    pub expiration_date: Option<String>,

    /// Name servers in the order the registry listed them
    #[serde(default)]
    pub name_servers: Vec<String>,

    /// Status codes (e.g. "clientTransferProhibited"), absent if none reported
    pub status: Option<Vec<String>>,
}

impl DomainRecord {
    /// Create an empty record for a domain
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Returns true if no registration field was populated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrar.is_none()
            && self.creation_date.is_none()
            && self.expiration_date.is_none()
            && self.name_servers.is_empty()
            && self.status.is_none()
    }
}
