pub mod guides;
pub mod info;
pub mod search;
pub mod summary;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;

/// Build the CORS layer from the configured origins.
///
/// Methods and headers stay permissive in both branches; browser clients
/// send `Content-Type: application/json` preflights for the POST routes and
/// must see it allowed.
pub fn build_cors_layer(config: &Config) -> CorsLayer {
    if config.allow_any_origin() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
