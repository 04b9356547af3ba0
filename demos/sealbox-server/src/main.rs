//! Sealbox HTTP service
//!
//! Serves the four Sealbox operations over HTTP:
//!   POST /encrypt  - depth-1 reversible encoding of a record
//!   POST /decrypt  - the inverse, with best-effort type recovery
//!   POST /sign     - order-independent HMAC-SHA256 tagging
//!   POST /verify   - signature check
//!
//! Usage:
//!   SEALBOX_SECRET_KEY=mykey cargo run --package sealbox-server
//!
//!   # Override the listen port (default 8000)
//!   SEALBOX_PORT=9000 cargo run --package sealbox-server

use sealbox_http::{router, AppState};
use sealbox_signing::Secret;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sealbox_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let secret = Secret::from_env();
    if secret.is_insecure_default() {
        tracing::warn!(
            "SEALBOX_SECRET_KEY is not set; using the insecure default key. \
             Do not deploy this configuration."
        );
    }

    let app = router(AppState::new(secret))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let port: u16 = std::env::var("SEALBOX_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Sealbox listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", addr, e));
    axum::serve(listener, app)
        .await
        .expect("server terminated unexpectedly");
}
