//! Lookup configuration threaded into every recon component.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Page fetch bound when none is configured
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Settings shared by the page fetcher and the lookup clients.
///
/// `None` timeouts leave the underlying client's own behaviour in place:
/// WHOIS and reverse DNS then wait as long as the remote side takes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconConfig {
    /// Bound on the page fetch, in seconds
    pub fetch_timeout_secs: u64,

    /// Bound on a WHOIS query, in seconds
    pub whois_timeout_secs: Option<u64>,

    /// Per-query resolver timeout for forward DNS, in seconds
    pub dns_timeout_secs: Option<u64>,

    /// Bound on a reverse DNS lookup, in seconds
    pub reverse_dns_timeout_secs: Option<u64>,

    /// User-Agent header sent with page fetches
    pub user_agent: String,

    /// Keys for third-party intelligence providers, by provider name
    pub api_keys: BTreeMap<String, String>,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconConfig {
    /// Create a configuration with default bounds and no API keys
    #[must_use]
    pub fn new() -> Self {
        Self {
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            whois_timeout_secs: None,
            dns_timeout_secs: None,
            reverse_dns_timeout_secs: None,
            user_agent: format!("osint-web/{}", env!("CARGO_PKG_VERSION")),
            api_keys: BTreeMap::new(),
        }
    }

    /// Set the page fetch bound
    #[must_use]
    pub const fn fetch_timeout(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    /// Bound WHOIS queries
    #[must_use]
    pub const fn whois_timeout(mut self, secs: u64) -> Self {
        self.whois_timeout_secs = Some(secs);
        self
    }

    /// Set the resolver's per-query timeout
    #[must_use]
    pub const fn dns_timeout(mut self, secs: u64) -> Self {
        self.dns_timeout_secs = Some(secs);
        self
    }

    /// Bound reverse DNS lookups
    #[must_use]
    pub const fn reverse_dns_timeout(mut self, secs: u64) -> Self {
        self.reverse_dns_timeout_secs = Some(secs);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Register a provider API key
    #[must_use]
    pub fn api_key(mut self, provider: impl Into<String>, key: impl Into<String>) -> Self {
        self.api_keys.insert(provider.into(), key.into());
        self
    }

    /// Page fetch bound as a duration
    #[must_use]
    pub const fn fetch_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Look up a provider API key
    #[must_use]
    pub fn provider_key(&self, provider: &str) -> Option<&str> {
        self.api_keys.get(provider).map(String::as_str)
    }
}

/// Await `fut`, bounded by `secs` when set.
pub(crate) async fn bounded<T, F>(secs: Option<u64>, fut: F) -> crate::ReconResult<T>
where
    F: std::future::Future<Output = crate::ReconResult<T>>,
{
    match secs {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), fut)
            .await
            .map_err(|_| crate::ReconError::Timeout(secs))?,
        None => fut.await,
    }
}
