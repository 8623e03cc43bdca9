//! DNS resolution integration.

use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::{Resolver, TokioResolver};
use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

use crate::config::{bounded, ReconConfig};
use crate::error::{ReconError, ReconResult};

/// DNS resolver.
///
/// Holds configuration only; a fresh hickory resolver is built from the
/// system configuration for every query so no answers are cached between
/// calls.
#[derive(Debug, Clone, Default)]
pub struct DnsResolver {
    query_timeout: Option<Duration>,
    reverse_timeout_secs: Option<u64>,
}

impl DnsResolver {
    /// Create a resolver using the given configuration
    #[must_use]
    pub fn new(config: &ReconConfig) -> Self {
        Self {
            query_timeout: config.dns_timeout_secs.map(Duration::from_secs),
            reverse_timeout_secs: config.reverse_dns_timeout_secs,
        }
    }

    fn build(&self) -> ReconResult<TokioResolver> {
        let mut builder =
            Resolver::builder_tokio().map_err(|e| ReconError::Dns(e.to_string()))?;
        if let Some(timeout) = self.query_timeout {
            builder.options_mut().timeout = timeout;
        }
        Ok(builder.build())
    }

    /// Resolve `record_type` records for a domain.
    ///
    /// Returns the textual form of each answer in resolver order. MX answers
    /// render as `"<preference> <exchange>"`.
    pub async fn resolve(&self, domain: &str, record_type: &str) -> ReconResult<Vec<String>> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(ReconError::Validation("Domain"));
        }
        let rtype = parse_record_type(record_type)?;

        debug!(domain, record_type = %rtype, "DNS query");
        let resolver = self.build()?;
        let response = resolver
            .lookup(domain, rtype)
            .await
            .map_err(|e| ReconError::Dns(e.to_string()))?;

        // Skip CNAME hops the resolver followed on the way to the answer
        Ok(response
            .iter()
            .filter(|rdata| rdata.record_type() == rtype)
            .map(ToString::to_string)
            .collect())
    }

    /// Reverse DNS lookup (IP to primary hostname)
    pub async fn reverse(&self, ip: &str) -> ReconResult<String> {
        let ip = ip.trim();
        if ip.is_empty() {
            return Err(ReconError::Validation("IP"));
        }
        let addr =
            IpAddr::from_str(ip).map_err(|_| ReconError::InvalidIp(ip.to_string()))?;

        debug!(%addr, "reverse DNS query");
        bounded(self.reverse_timeout_secs, async {
            let resolver = self.build()?;
            let response = resolver
                .reverse_lookup(addr)
                .await
                .map_err(|e| ReconError::Dns(e.to_string()))?;

            response
                .iter()
                .next()
                .map(|name| name.to_string().trim_end_matches('.').to_string())
                .ok_or_else(|| ReconError::Dns(format!("no PTR record for {addr}")))
        })
        .await
    }
}

/// Parse a record type name, case-insensitively ("a", "MX", "txt").
pub fn parse_record_type(name: &str) -> ReconResult<RecordType> {
    let upper = name.trim().to_uppercase();
    match RecordType::from_str(&upper) {
        Ok(RecordType::Unknown(_)) | Err(_) => Err(ReconError::UnknownRecordType(name.to_string())),
        Ok(rtype) => Ok(rtype),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_types_parse_case_insensitively() {
        assert_eq!(parse_record_type("a").unwrap(), RecordType::A);
        assert_eq!(parse_record_type("MX").unwrap(), RecordType::MX);
        assert_eq!(parse_record_type(" txt ").unwrap(), RecordType::TXT);
    }

    #[test]
    fn unknown_record_type_is_rejected() {
        let err = parse_record_type("BOGUS").unwrap_err();
        assert!(matches!(err, ReconError::UnknownRecordType(ref t) if t == "BOGUS"));
    }

    #[tokio::test]
    async fn malformed_ip_is_reported_not_resolved() {
        let resolver = DnsResolver::default();
        let err = resolver.reverse("999.1.1.1").await.unwrap_err();
        assert!(matches!(err, ReconError::InvalidIp(_)));
    }

    #[tokio::test]
    async fn empty_domain_fails_validation() {
        let resolver = DnsResolver::default();
        let err = resolver.resolve("  ", "A").await.unwrap_err();
        assert!(err.is_validation());
    }
}
