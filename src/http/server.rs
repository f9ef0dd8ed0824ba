//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router from the route table
//! - Wire up middleware (tracing, limits, timeout, request ID)
//! - Serve on a listener until the shutdown signal fires

use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart},
    http::HeaderMap,
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::error::handle_middleware_error;
use crate::http::handler::handle_csv;
use crate::http::request::MakeRequestUuidV4;
use crate::routing::RouteTable;

/// HTTP server for the matrix service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving every route in `routes`.
    pub fn new(config: ServiceConfig, routes: RouteTable) -> Self {
        Self {
            router: Self::build_router(&config, &routes),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, routes: &RouteTable) -> Router {
        let mut router = Router::new();
        for route in routes.iter() {
            let transform = route.transform;
            tracing::debug!(path = %route.path, transform = transform.name(), "Mounting route");
            router = router.route(
                &route.path,
                post(
                    move |headers: HeaderMap, multipart: Result<Multipart, MultipartRejection>| {
                        handle_csv(transform, headers, multipart)
                    },
                ),
            );
        }

        // Request ID is set before the trace span opens and echoed on the way out.
        let request_id = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id());

        // A timed-out request still answers 200, like every other failure.
        let timeout = ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        router
            .layer(DefaultBodyLimit::max(config.limits.max_upload_bytes))
            .layer(timeout)
            .layer(request_id)
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
