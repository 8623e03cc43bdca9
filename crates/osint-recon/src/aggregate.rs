//! Website analysis by combining the page scan with domain lookups.

use osint_core::{AggregateReport, DnsAnswers, Outcome, REPORT_RECORD_TYPES};
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::{Host, Url};

use crate::error::{ReconError, ReconResult};
use crate::extract::extract_all;
use crate::fetch::PageFetcher;
use crate::lookup::LookupClient;

/// Builds an [`AggregateReport`] for a URL.
///
/// The page fetch is the only fatal step. WHOIS and each DNS probe are
/// independent: a failure is embedded as an error shape at its position in
/// the report and the remaining probes still run.
#[derive(Clone)]
pub struct WebsiteAnalyzer {
    fetcher: PageFetcher,
    lookup: Arc<dyn LookupClient>,
}

impl WebsiteAnalyzer {
    /// Create an analyzer from a fetcher and a lookup client
    #[must_use]
    pub fn new(fetcher: PageFetcher, lookup: Arc<dyn LookupClient>) -> Self {
        Self { fetcher, lookup }
    }

    /// Fetch `url`, scan it, and probe its domain.
    ///
    /// Calls run strictly in sequence: fetch, WHOIS, then one DNS query per
    /// record type in [`REPORT_RECORD_TYPES`].
    pub async fn analyze(&self, url: &str) -> ReconResult<AggregateReport> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ReconError::Validation("URL"));
        }

        let body = self.fetcher.fetch(url).await?;
        let extraction = extract_all(&body);
        debug!(
            url,
            emails = extraction.emails.len(),
            platforms = extraction.social_links.len(),
            "page scanned"
        );

        let domain = derive_domain(url);

        let whois: Outcome<_> = self.lookup.whois(&domain).await.into();
        if let Some(error) = whois.error() {
            warn!(domain = %domain, error, "WHOIS lookup degraded");
        }

        let mut dns = DnsAnswers::new();
        for record_type in REPORT_RECORD_TYPES {
            let answer: Outcome<_> = self.lookup.resolve(&domain, record_type).await.into();
            if let Some(error) = answer.error() {
                warn!(domain = %domain, record_type, error, "DNS lookup degraded");
            }
            dns.insert(record_type.to_string(), answer);
        }

        let report = AggregateReport {
            url: url.to_string(),
            domain,
            extraction,
            whois,
            dns,
        };
        info!(url, failed_lookups = report.failed_lookups(), "website analyzed");

        Ok(report)
    }
}

/// Host component of `url`, without port; empty if the URL has no host.
///
/// IPv6 literals are returned bare (`2001:db8::1`), not bracketed.
pub fn derive_domain(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };

    match parsed.host() {
        Some(Host::Ipv6(addr)) => addr.to_string(),
        Some(host) => host.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use osint_core::{DomainRecord, Platform};
    use std::sync::Mutex;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Lookup stub: WHOIS and A succeed, MX has no records
    #[derive(Default)]
    struct StubLookup {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LookupClient for StubLookup {
        async fn whois(&self, domain: &str) -> ReconResult<DomainRecord> {
            self.calls.lock().unwrap().push(format!("whois {domain}"));
            let mut record = DomainRecord::new(domain);
            record.registrar = Some("Example Registrar".into());
            Ok(record)
        }

        async fn resolve(&self, domain: &str, record_type: &str) -> ReconResult<Vec<String>> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("dns {domain} {record_type}"));
            match record_type {
                "A" => Ok(vec!["127.0.0.1".into()]),
                _ => Err(ReconError::Dns(format!("no {record_type} records for {domain}"))),
            }
        }

        async fn reverse_dns(&self, _ip: &str) -> ReconResult<String> {
            Ok("localhost".into())
        }
    }

    async fn page_server(body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn domain_is_host_without_port() {
        assert_eq!(derive_domain("https://www.acme.test:8443/about"), "www.acme.test");
        assert_eq!(derive_domain("http://user:pw@acme.test/"), "acme.test");
        assert_eq!(derive_domain("not a url"), "");
        assert_eq!(derive_domain("http://192.0.2.7:8080/"), "192.0.2.7");
    }

    #[test]
    fn ipv6_host_is_unbracketed() {
        assert_eq!(derive_domain("http://[2001:db8::1]/"), "2001:db8::1");
        assert_eq!(derive_domain("https://[2001:DB8::a]:8443/x"), "2001:db8::a");
    }

    #[tokio::test]
    async fn partial_failure_is_embedded() {
        let server =
            page_server("mail info@acme.test or https://twitter.com/acme, info@acme.test").await;
        let stub = Arc::new(StubLookup::default());
        let analyzer = WebsiteAnalyzer::new(PageFetcher::default(), stub.clone());

        let report = analyzer.analyze(&server.uri()).await.unwrap();

        assert_eq!(report.domain, "127.0.0.1");
        assert_eq!(report.extraction.emails.len(), 1);
        assert_eq!(
            report.extraction.social_links[&Platform::Twitter],
            vec!["https://twitter.com/acme"]
        );
        assert!(report.whois.is_found());
        assert_eq!(report.dns["A"].found(), Some(&vec!["127.0.0.1".to_string()]));
        assert!(report.dns["MX"].error().unwrap().contains("no MX records"));
        assert_eq!(report.failed_lookups(), 1);
    }

    #[tokio::test]
    async fn lookups_run_in_order() {
        let server = page_server("nothing to see").await;
        let stub = Arc::new(StubLookup::default());
        let analyzer = WebsiteAnalyzer::new(PageFetcher::default(), stub.clone());

        analyzer.analyze(&server.uri()).await.unwrap();

        let calls = stub.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec!["whois 127.0.0.1", "dns 127.0.0.1 A", "dns 127.0.0.1 MX"]
        );
    }

    #[tokio::test]
    async fn fetch_failure_aborts_before_lookups() {
        let stub = Arc::new(StubLookup::default());
        let analyzer = WebsiteAnalyzer::new(PageFetcher::default(), stub.clone());

        let err = analyzer.analyze("http://127.0.0.1:1/").await.unwrap_err();

        assert!(matches!(err, ReconError::Fetch(_)));
        assert!(stub.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_url_is_a_validation_error() {
        let analyzer =
            WebsiteAnalyzer::new(PageFetcher::default(), Arc::new(StubLookup::default()));
        let err = analyzer.analyze("   ").await.unwrap_err();
        assert!(err.is_validation());
    }
}
