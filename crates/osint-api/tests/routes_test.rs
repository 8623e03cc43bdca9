use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use osint_api::{create_api_routes, AppState};
use osint_core::DomainRecord;
use osint_recon::{LookupClient, ReconConfig, ReconError, ReconResult};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Offline lookups: domains starting with "fail" have no WHOIS record,
/// A resolves, MX has no records.
#[derive(Default)]
struct StubLookup {
    queried_types: Mutex<Vec<String>>,
}

#[async_trait]
impl LookupClient for StubLookup {
    async fn whois(&self, domain: &str) -> ReconResult<DomainRecord> {
        if domain.starts_with("fail") {
            return Err(ReconError::Whois(format!("No WHOIS record found for {domain}")));
        }
        let mut record = DomainRecord::new(domain);
        record.registrar = Some("Example Registrar, Inc.".into());
        record.name_servers = vec!["ns1.example.net".into()];
        Ok(record)
    }

    async fn resolve(&self, domain: &str, record_type: &str) -> ReconResult<Vec<String>> {
        self.queried_types
            .lock()
            .unwrap()
            .push(record_type.to_string());
        match record_type {
            "A" => Ok(vec!["192.0.2.1".into(), "192.0.2.2".into()]),
            _ => Err(ReconError::Dns(format!(
                "no records found for {domain} {record_type}"
            ))),
        }
    }

    async fn reverse_dns(&self, ip: &str) -> ReconResult<String> {
        match ip {
            "192.0.2.1" => Ok("host1.example.net".into()),
            _ => Err(ReconError::Dns(format!("no PTR record for {ip}"))),
        }
    }
}

fn app_with(stub: Arc<StubLookup>) -> Router {
    let config = ReconConfig::new().fetch_timeout(5);
    create_api_routes(AppState::with_lookup(&config, stub))
}

fn app() -> Router {
    app_with(Arc::new(StubLookup::default()))
}

async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn test_whois_missing_domain_is_400() {
    let (status, body) = post_json(app(), "/whois", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Domain is required" }));
}

#[tokio::test]
async fn test_whois_blank_domain_is_400() {
    let (status, _) = post_json(app(), "/whois", r#"{"domain": "  "}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_whois_success_returns_record() {
    let (status, body) = post_json(app(), "/whois", r#"{"domain": "example.com"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domain"], "example.com");
    assert_eq!(body["registrar"], "Example Registrar, Inc.");
    assert_eq!(body["name_servers"], json!(["ns1.example.net"]));
    assert_eq!(body["creation_date"], Value::Null);
}

#[tokio::test]
async fn test_whois_failure_is_embedded_with_200() {
    let (status, body) = post_json(app(), "/whois", r#"{"domain": "fail.test"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "No WHOIS record found for fail.test" }));
}

#[tokio::test]
async fn test_invalid_json_is_400_with_error() {
    let (status, body) = post_json(app(), "/whois", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_dns_defaults_to_a_record() {
    let stub = Arc::new(StubLookup::default());
    let (status, body) =
        post_json(app_with(stub.clone()), "/dns", r#"{"domain": "example.com"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "records": ["192.0.2.1", "192.0.2.2"] }));
    assert_eq!(*stub.queried_types.lock().unwrap(), vec!["A".to_string()]);
}

#[tokio::test]
async fn test_dns_failure_is_embedded_in_records() {
    let (status, body) =
        post_json(app(), "/dns", r#"{"domain": "example.com", "type": "MX"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["records"]["error"].as_str().unwrap().contains("MX"));
}

#[tokio::test]
async fn test_dns_missing_domain_is_400() {
    let (status, body) = post_json(app(), "/dns", r#"{"type": "A"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Domain is required");
}

#[tokio::test]
async fn test_repeated_dns_queries_return_same_set() {
    let first = post_json(app(), "/dns", r#"{"domain": "example.com"}"#).await.1;
    let second = post_json(app(), "/dns", r#"{"domain": "example.com"}"#).await.1;

    let as_set = |v: &Value| {
        let mut records: Vec<String> = v["records"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r.as_str().unwrap().to_string())
            .collect();
        records.sort();
        records
    };
    assert_eq!(as_set(&first), as_set(&second));
}

#[tokio::test]
async fn test_reverse_dns() {
    let (status, body) = post_json(app(), "/reverse_dns", r#"{"ip": "192.0.2.1"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "hostname": "host1.example.net" }));

    let (status, body) = post_json(app(), "/reverse_dns", r#"{"ip": "198.51.100.7"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hostname"]["error"], "no PTR record for 198.51.100.7");
}

#[tokio::test]
async fn test_reverse_dns_missing_ip_is_400() {
    let (status, body) = post_json(app(), "/reverse_dns", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "IP is required" }));
}

#[tokio::test]
async fn test_analyze_missing_url_is_400() {
    let (status, body) = post_json(app(), "/analyze_website", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "URL is required" }));
}

#[tokio::test]
async fn test_analyze_fetch_failure_is_500_without_report() {
    let (status, body) = post_json(
        app(),
        "/analyze_website",
        r#"{"url": "http://127.0.0.1:1/"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().is_some());
    for key in ["emails", "social_links", "whois", "dns"] {
        assert!(body.get(key).is_none(), "unexpected key {key}");
    }
}

#[tokio::test]
async fn test_analyze_partial_failure_is_200() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<footer>
                 <a href="mailto:press@acme.test">press@acme.test</a>
                 <a href="https://www.linkedin.com/company/acme">LinkedIn</a>
                 <a href="https://facebook.com/acme.page">Facebook</a>
               </footer>"#,
        ))
        .mount(&server)
        .await;

    let body = json!({ "url": server.uri() }).to_string();
    let (status, report) = post_json(app(), "/analyze_website", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["url"], server.uri());
    assert_eq!(report["domain"], "127.0.0.1");
    assert_eq!(report["emails"], json!(["press@acme.test"]));
    assert_eq!(
        report["social_links"]["linkedin"],
        json!(["https://www.linkedin.com/company/acme"])
    );
    assert_eq!(
        report["social_links"]["facebook"],
        json!(["https://facebook.com/acme.page"])
    );
    assert!(report["social_links"].get("twitter").is_none());
    assert_eq!(report["whois"]["registrar"], "Example Registrar, Inc.");
    assert_eq!(report["dns"]["A"], json!(["192.0.2.1", "192.0.2.2"]));
    assert!(report["dns"]["MX"]["error"].as_str().is_some());
}

#[tokio::test]
async fn test_analyze_error_status_page_is_still_scanned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone, ask help@acme.test"))
        .mount(&server)
        .await;

    let body = json!({ "url": server.uri() }).to_string();
    let (status, report) = post_json(app(), "/analyze_website", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["emails"], json!(["help@acme.test"]));
}
