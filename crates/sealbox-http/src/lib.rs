//! # Sealbox HTTP Transport
//!
//! Thin HTTP shell over the Sealbox core crates.
//!
//! This crate provides:
//! - Request/response body types for the four API operations
//! - Axum handlers and a router builder mapping core failures to HTTP
//!   status codes
//! - A reqwest-based client for calling a running Sealbox service
//!
//! The core contracts (canonicalization, codec, signing) live in
//! `sealbox-canonical`, `sealbox-codec`, and `sealbox-signing`; nothing in
//! this crate adds semantics beyond transport.
//!
//! ## Server Example
//!
//! ```ignore
//! use sealbox_http::{router, AppState};
//! use sealbox_signing::Secret;
//!
//! let app = router(AppState::new(Secret::from_env()));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! ## Client Example
//!
//! ```ignore
//! use sealbox_http::SealboxClient;
//!
//! let client = SealboxClient::new("http://localhost:8000");
//! let signed = client.sign(serde_json::json!({"age": 30})).await?;
//! assert!(client.verify(signed.data, signed.signature).await?);
//! ```

mod client;
mod error;
mod extractors;
mod routes;
mod types;

pub use client::SealboxClient;
pub use error::{ErrorResponse, SealboxHttpError};
pub use extractors::SealboxJson;
pub use routes::{router, AppState};
pub use types::{
    DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse, HealthResponse, SignRequest,
    SignResponse, VerifyRequest, VerifyResponse,
};
