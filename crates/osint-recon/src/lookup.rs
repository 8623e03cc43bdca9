//! The lookup seam the aggregator and API depend on.

use async_trait::async_trait;
use osint_core::DomainRecord;

use crate::config::ReconConfig;
use crate::dns::DnsResolver;
use crate::error::ReconResult;
use crate::whois::WhoisClient;

/// WHOIS, DNS and reverse DNS lookups.
///
/// Every method returns an explicit result and never panics past the
/// boundary; callers decide whether a failure is fatal or embedded as data.
#[async_trait]
pub trait LookupClient: Send + Sync {
    /// Registration data for a domain
    async fn whois(&self, domain: &str) -> ReconResult<DomainRecord>;

    /// Records of `record_type` for a domain, in resolver order
    async fn resolve(&self, domain: &str, record_type: &str) -> ReconResult<Vec<String>>;

    /// Primary hostname for an IP address
    async fn reverse_dns(&self, ip: &str) -> ReconResult<String>;
}

/// Lookup client backed by live WHOIS servers and the system resolver
pub struct NetworkLookup {
    whois: WhoisClient,
    dns: DnsResolver,
}

impl NetworkLookup {
    /// Create a lookup client from the recon configuration
    pub fn new(config: &ReconConfig) -> ReconResult<Self> {
        Ok(Self {
            whois: WhoisClient::new(config)?,
            dns: DnsResolver::new(config),
        })
    }
}

#[async_trait]
impl LookupClient for NetworkLookup {
    async fn whois(&self, domain: &str) -> ReconResult<DomainRecord> {
        self.whois.lookup_domain(domain).await
    }

    async fn resolve(&self, domain: &str, record_type: &str) -> ReconResult<Vec<String>> {
        self.dns.resolve(domain, record_type).await
    }

    async fn reverse_dns(&self, ip: &str) -> ReconResult<String> {
        self.dns.reverse(ip).await
    }
}
