//! CORS for the single browser origin allowed to call the API

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::config::CorsConfig;
use crate::domain::DomainError;

/// Allow credentials plus any method and header, for one origin only.
///
/// Methods and headers are mirrored from the preflight request because
/// wildcards cannot be combined with credentials.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, DomainError> {
    let origin = HeaderValue::from_str(&config.allowed_origin).map_err(|e| {
        DomainError::configuration(format!(
            "Invalid CORS origin '{}': {}",
            config.allowed_origin, e
        ))
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
