//! Single-shot page fetch.

use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::ReconConfig;
use crate::error::{ReconError, ReconResult};

/// Fetches a page body with a bounded wait.
///
/// Any response that arrives counts as success, including 4xx and 5xx: the
/// body of an error page is still scanned.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    timeout: Duration,
    user_agent: String,
}

impl PageFetcher {
    /// Create a fetcher from the recon configuration
    #[must_use]
    pub fn new(config: &ReconConfig) -> Self {
        Self {
            timeout: config.fetch_timeout_duration(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Override the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch `url` and return its body text
    pub async fn fetch(&self, url: &str) -> ReconResult<String> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ReconError::Validation("URL"));
        }

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| ReconError::Fetch(e.to_string()))?;

        debug!(url, timeout = ?self.timeout, "GET request");
        let response = http
            .get(url)
            .send()
            .await
            .map_err(|e| ReconError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "page returned non-success status, scanning body anyway");
        }

        response
            .text()
            .await
            .map_err(|e| ReconError::Fetch(e.to_string()))
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new(&ReconConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hello</p>"))
            .mount(&server)
            .await;

        let body = PageFetcher::default().fetch(&server.uri()).await.unwrap();
        assert_eq!(body, "<p>hello</p>");
    }

    #[tokio::test]
    async fn error_status_body_is_still_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string("not here, mail admin@acme.test"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/missing", server.uri());
        let body = PageFetcher::default().fetch(&url).await.unwrap();
        assert!(body.contains("admin@acme.test"));
    }

    #[tokio::test]
    async fn server_error_status_is_not_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let body = PageFetcher::default().fetch(&server.uri()).await.unwrap();
        assert_eq!(body, "maintenance");
    }

    #[tokio::test]
    async fn slow_page_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let fetcher = PageFetcher::default().timeout(Duration::from_millis(200));
        let err = fetcher.fetch(&server.uri()).await.unwrap_err();
        assert!(matches!(err, ReconError::Fetch(_)));
    }

    #[tokio::test]
    async fn connection_refused_is_a_fetch_error() {
        let err = PageFetcher::default()
            .fetch("http://127.0.0.1:1/")
            .await
            .unwrap_err();
        assert!(matches!(err, ReconError::Fetch(_)));
    }

    #[tokio::test]
    async fn empty_url_fails_validation() {
        let err = PageFetcher::default().fetch("").await.unwrap_err();
        assert!(err.is_validation());
    }
}
