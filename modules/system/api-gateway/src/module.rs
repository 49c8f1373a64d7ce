//! API Gateway module definition
//!
//! Owns the router, the middleware stack and the HTTP server loop.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use admin_gate_sdk::AdminGateClient;
use admin_messaging_sdk::MessagingClient;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

use crate::api::rest::handlers::AdminApiState;
use crate::api::rest::routes;
use crate::config::ApiGatewayConfig;
use crate::middleware;
use crate::web;

/// HTTP surface of the admin server.
pub struct ApiGateway {
    config: ApiGatewayConfig,
    state: AdminApiState,
}

impl ApiGateway {
    #[must_use]
    pub fn new(
        config: ApiGatewayConfig,
        gate: Arc<dyn AdminGateClient>,
        messaging: Arc<dyn MessagingClient>,
    ) -> Self {
        let state = AdminApiState {
            gate,
            messaging,
            session_cookie: config.session_cookie.as_deref().map(Arc::from),
        };
        Self { config, state }
    }

    /// Build the complete router: health probes, admin routes and the
    /// middleware stack around them.
    pub fn build_router(&self) -> Router {
        let router = Router::new()
            .route("/health", get(web::health_check))
            .route("/healthz", get(|| async { "ok" }))
            .merge(routes::router(self.state.clone()));

        self.apply_middleware_stack(router)
    }

    /// Apply the middleware layers.
    pub(crate) fn apply_middleware_stack(&self, mut router: Router) -> Router {
        // `Router::layer` makes the last added layer the outermost one, so
        // layers are added innermost first. Request execution order:
        // SetRequestId -> PropagateRequestId -> Trace -> push_req_id_to_extensions
        // -> Timeout -> BodyLimit -> CORS -> Router
        let config = &self.config;

        // 5) CORS (outermost of the route-facing layers so preflight short-circuits)
        if config.cors_enabled {
            router = router.layer(crate::cors::build_cors_layer(config));
        }

        // 4) Body limit
        router = router.layer(RequestBodyLimitLayer::new(config.defaults.body_limit_bytes));
        router = router.layer(DefaultBodyLimit::max(config.defaults.body_limit_bytes));

        // 3) Timeout
        router = router.layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(config.defaults.request_timeout_secs),
        ));

        // 2) Record request_id into span + extensions (must be inner to Trace)
        router = router.layer(from_fn(middleware::request_id::push_req_id_to_extensions));

        // 1) Trace
        router = router.layer({
            use tower_http::trace::TraceLayer;
            use tracing::field::Empty;

            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                    let rid = req
                        .headers()
                        .get(middleware::request_id::header())
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("n/a");

                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        version = ?req.version(),
                        module = "api_gateway",
                        request_id = %rid,
                        status = Empty,
                        latency_ms = Empty,
                    )
                })
                .on_response(
                    |res: &axum::http::Response<axum::body::Body>,
                     latency: Duration,
                     span: &tracing::Span| {
                        span.record("status", res.status().as_u16());
                        span.record("latency_ms", latency.as_millis());
                    },
                )
        });

        // 0) Request ID handling: generate when missing, then echo on the response.
        let x_request_id = middleware::request_id::header();
        router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
        router = router.layer(SetRequestIdLayer::new(
            x_request_id,
            middleware::request_id::MakeReqId,
        ));

        router
    }

    fn parse_bind_address(bind_addr: &str) -> Result<SocketAddr> {
        bind_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address '{bind_addr}': {e}"))
    }

    /// Bind the configured address.
    ///
    /// # Errors
    /// Returns an error for an unparsable address or a failed bind.
    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = Self::parse_bind_address(&self.config.bind_addr)?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("HTTP server bound on {}", listener.local_addr()?);
        Ok(listener)
    }

    /// Serve on `listener` until `shutdown` resolves, then drain in-flight
    /// requests.
    ///
    /// # Errors
    /// Returns an error if the server fails.
    pub async fn serve<F>(self: Arc<Self>, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("HTTP server shutting down gracefully");
            })
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}
