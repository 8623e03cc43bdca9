//! JSON HTTP API over the OSINT lookups.
//!
//! Endpoints:
//! - `POST /whois` - `{domain}` -> domain record or `{error}`
//! - `POST /dns` - `{domain, type?}` -> `{records}`
//! - `POST /reverse_dns` - `{ip}` -> `{hostname}`
//! - `POST /analyze_website` - `{url}` -> aggregate report
//! - `GET /health` - liveness probe
//!
//! Missing required fields are rejected with 400. Lookup failures are
//! embedded in a 200 response; only a failed page fetch in
//! `/analyze_website` ends the request with 500.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::{create_api_routes, create_app};
pub use server::serve;
pub use state::AppState;
