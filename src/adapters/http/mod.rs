//! HTTP adapters - REST API implementations.
//!
//! [`app_router`] wraps the TOPSIS routes in the middleware stack configured
//! by [`AppConfig`]: body limit, compression, timeout, CORS, tracing and
//! request IDs.

pub mod topsis;

pub use topsis::{topsis_router, TopsisAppState};

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, ServerConfig, ValidationError};

/// Builds the complete application router from configuration.
///
/// # Errors
///
/// Returns `ValidationError::InvalidCorsOrigin` if a configured origin is not
/// a valid header value.
pub fn app_router(config: &AppConfig) -> Result<Router, ValidationError> {
    let state = TopsisAppState::new(config.analysis.uniform_criteria_policy);

    let mut app = topsis_router(state)
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server)?);

    if config.features.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    // Request ID is set outermost so trace spans and responses both see it
    Ok(app
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid)))
}

/// An empty origin list mirrors the caller's origin with credentials allowed.
fn cors_layer(server: &ServerConfig) -> Result<CorsLayer, ValidationError> {
    let origins = server.cors_origins_list();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        let values = origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ValidationError::InvalidCorsOrigin(origin.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
