pub mod greeting;
pub mod health;

use axum::{Router, routing::any};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ServerError;

/// Listen address; not configurable
pub const BIND_ADDR: &str = "0.0.0.0:8080";

/// Route table shared by every connection. Any method reaches the handler;
/// anything else falls through to axum's default 404.
pub fn router() -> Router {
    Router::new()
        .route("/health", any(health::health_check))
        .route("/api", any(greeting::greet))
        .layer(TraceLayer::new_for_http())
}

/// HTTP server for the health and greeting endpoints
pub struct ApiServer {
    app: Router,
}

impl ApiServer {
    pub fn new() -> Self {
        Self { app: router() }
    }

    /// Bind [`BIND_ADDR`] and serve until the transport fails
    pub async fn start(self) -> Result<(), ServerError> {
        info!("Server starting on {}", BIND_ADDR);

        let listener = TcpListener::bind(BIND_ADDR).await.map_err(|source| ServerError::Bind {
            addr: BIND_ADDR.to_string(),
            source,
        })?;

        self.serve(listener).await
    }

    pub async fn serve(self, listener: TcpListener) -> Result<(), ServerError> {
        axum::serve(listener, self.app).await.map_err(ServerError::Serve)
    }
}

impl Default for ApiServer {
    fn default() -> Self {
        Self::new()
    }
}
