use osint_recon::{
    LookupClient, NetworkLookup, PageFetcher, ReconConfig, ReconResult, WebsiteAnalyzer,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<dyn LookupClient>,
    pub analyzer: WebsiteAnalyzer,
}

impl AppState {
    /// State backed by live WHOIS servers and the system resolver
    pub fn new(config: &ReconConfig) -> ReconResult<Self> {
        let lookup: Arc<dyn LookupClient> = Arc::new(NetworkLookup::new(config)?);
        Ok(Self::with_lookup(config, lookup))
    }

    /// State backed by a caller-supplied lookup client
    pub fn with_lookup(config: &ReconConfig, lookup: Arc<dyn LookupClient>) -> Self {
        Self {
            analyzer: WebsiteAnalyzer::new(PageFetcher::new(config), Arc::clone(&lookup)),
            lookup,
        }
    }
}
