use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/whois", post(handlers::whois_lookup))
        .route("/dns", post(handlers::dns_lookup))
        .route("/reverse_dns", post(handlers::reverse_dns_lookup))
        .route("/analyze_website", post(handlers::analyze_website))
        .with_state(state)
}

/// API routes plus the optional frontend and HTTP middleware
pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    let mut app = create_api_routes(state);

    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
