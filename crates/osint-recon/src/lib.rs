//! WHOIS, DNS and page-scraping lookups for the OSINT service.
//!
//! Each lookup is an independent, stateless operation that returns an
//! explicit [`ReconResult`]. The [`WebsiteAnalyzer`] composes them into one
//! [`AggregateReport`](osint_core::AggregateReport), embedding each failed
//! sub-lookup as data rather than aborting the whole report.

#![doc(html_root_url = "https://docs.rs/osint-recon/0.3.0")]

mod config;
mod error;

pub mod aggregate;
pub mod dns;
pub mod extract;
pub mod fetch;
pub mod lookup;
pub mod whois;

pub use aggregate::{derive_domain, WebsiteAnalyzer};
pub use config::ReconConfig;
pub use dns::DnsResolver;
pub use error::{ReconError, ReconResult};
pub use extract::{extract_emails, extract_social_links, extract_all};
pub use fetch::PageFetcher;
pub use lookup::{LookupClient, NetworkLookup};
pub use whois::WhoisClient;
