//! Request bodies.

use osint_core::{OsintError, DEFAULT_RECORD_TYPE};
use serde::Deserialize;

/// `POST /whois`
#[derive(Debug, Default, Deserialize)]
pub struct WhoisRequest {
    pub domain: Option<String>,
}

/// `POST /dns`
#[derive(Debug, Default, Deserialize)]
pub struct DnsRequest {
    pub domain: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
}

impl DnsRequest {
    /// Requested record type, `"A"` when omitted
    pub fn record_type(&self) -> &str {
        self.record_type.as_deref().unwrap_or(DEFAULT_RECORD_TYPE)
    }
}

/// `POST /reverse_dns`
#[derive(Debug, Default, Deserialize)]
pub struct ReverseDnsRequest {
    pub ip: Option<String>,
}

/// `POST /analyze_website`
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub url: Option<String>,
}

/// Take a required field, treating blank strings as absent.
pub fn required(value: Option<String>, field: &'static str) -> Result<String, OsintError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(OsintError::missing(field))
}
