mod analyze;
mod dns;
mod health;
mod reverse_dns;
mod whois;

pub use analyze::analyze_website;
pub use dns::dns_lookup;
pub use health::health_check;
pub use reverse_dns::reverse_dns_lookup;
pub use whois::whois_lookup;

use crate::error::ApiError;
use axum::extract::FromRequest;

/// JSON body extractor whose rejections use the API's `{error}` shape
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
