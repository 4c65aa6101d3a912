// Configuration constants and environment helpers
use std::net::SocketAddr;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

pub const DEFAULT_SERVER_HOST: [u8; 4] = [127, 0, 0, 1];
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Resolves the listen address from `SERVER_PORT`, falling back to the
/// default on absence or garbage.
pub fn server_addr() -> SocketAddr {
    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_SERVER_PORT);
    SocketAddr::from((DEFAULT_SERVER_HOST, port))
}

/// Reads the database connection string. The service cannot run without it.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

/// Create CORS layer for the browser frontends.
///
/// Origins come from `CORS_ALLOWED_ORIGINS` (comma separated), defaulting to
/// the usual local dev servers. Unparseable origins are skipped with a
/// warning instead of refusing to start.
pub fn create_cors_layer() -> CorsLayer {
    let configured = std::env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let origins: Vec<HeaderValue> = configured
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Skipping unparseable CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}
