use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

use crate::config::{ApiGatewayConfig, CorsConfig};

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

/// Build the CORS layer from configuration.
///
/// Entries that are not valid origins, methods or header names are skipped
/// with a warning. Credentials cannot be combined with wildcards, so with
/// `allow_credentials` set a wildcard mirrors the request instead.
#[must_use]
pub fn build_cors_layer(cfg: &ApiGatewayConfig) -> CorsLayer {
    let cors = cfg.cors.clone().unwrap_or_default();
    let CorsConfig {
        allowed_origins,
        allowed_methods,
        allowed_headers,
        allow_credentials,
        max_age_seconds,
    } = cors;

    let origin = if is_wildcard(&allowed_origins) {
        if allow_credentials {
            AllowOrigin::mirror_request()
        } else {
            AllowOrigin::from(Any)
        }
    } else {
        AllowOrigin::list(allowed_origins.iter().filter_map(|o| {
            HeaderValue::from_str(o)
                .inspect_err(|_| tracing::warn!(origin = %o, "ignoring invalid CORS origin"))
                .ok()
        }))
    };

    let methods: Vec<Method> = allowed_methods
        .iter()
        .filter_map(|m| {
            Method::from_bytes(m.as_bytes())
                .inspect_err(|_| tracing::warn!(method = %m, "ignoring invalid CORS method"))
                .ok()
        })
        .collect();

    let headers = if is_wildcard(&allowed_headers) {
        if allow_credentials {
            AllowHeaders::mirror_request()
        } else {
            AllowHeaders::from(Any)
        }
    } else {
        AllowHeaders::list(allowed_headers.iter().filter_map(|h| {
            HeaderName::from_bytes(h.as_bytes())
                .inspect_err(|_| tracing::warn!(header = %h, "ignoring invalid CORS header"))
                .ok()
        }))
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(allow_credentials)
        .max_age(Duration::from_secs(max_age_seconds))
}
