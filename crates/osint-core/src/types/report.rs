use serde::{Deserialize, Serialize};

use super::{DnsAnswers, DomainRecord, ExtractionResult, Outcome};

/// Combined result of scraping a page and probing its domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// The URL requested
    pub url: String,

    /// Host derived from the URL; empty if the URL had none
    pub domain: String,

    /// Emails and social links found on the page
    #[serde(flatten)]
    pub extraction: ExtractionResult,

    /// WHOIS record or error shape
    pub whois: Outcome<DomainRecord>,

    /// Answers per record type, each independently successful or failed
    pub dns: DnsAnswers,
}

impl AggregateReport {
    /// Number of sub-lookups that came back as error shapes
    #[must_use]
    pub fn failed_lookups(&self) -> usize {
        usize::from(!self.whois.is_found())
            + self.dns.values().filter(|answer| !answer.is_found()).count()
    }
}
