use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Outcome;

/// Record type used when a request does not name one
pub const DEFAULT_RECORD_TYPE: &str = "A";

/// Record types probed for every analyzed website, in probe order
pub const REPORT_RECORD_TYPES: [&str; 2] = ["A", "MX"];

/// Answers for one (domain, record type) pair in resolver order, or a failure
pub type DnsAnswer = Outcome<Vec<String>>;

/// DNS answers keyed by record type ("A", "MX")
pub type DnsAnswers = BTreeMap<String, DnsAnswer>;

/// Response body of a single DNS lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsLookup {
    /// Records or error shape
    pub records: DnsAnswer,
}

/// Response body of a reverse DNS lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseLookup {
    /// Primary hostname or error shape
    pub hostname: Outcome<String>,
}
