//! Axum handlers and router for the Sealbox API

use crate::error::SealboxHttpError;
use crate::extractors::SealboxJson;
use crate::types::{
    DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse, HealthResponse, SignRequest,
    SignResponse, VerifyRequest, VerifyResponse,
};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use sealbox_codec::{decode, encode};
use sealbox_signing::{is_well_formed_signature, sign, verify, Secret};
use std::sync::Arc;

/// Shared state: the process secret, established once at startup.
#[derive(Clone)]
pub struct AppState {
    secret: Arc<Secret>,
}

impl AppState {
    pub fn new(secret: Secret) -> Self {
        Self {
            secret: Arc::new(secret),
        }
    }
}

/// Build the Sealbox router over the given state.
///
/// Middleware (tracing, CORS) is the binary's concern; this router carries
/// only the API surface.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/encrypt", post(encrypt_data))
        .route("/decrypt", post(decrypt_data))
        .route("/sign", post(sign_data))
        .route("/verify", post(verify_signature))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn encrypt_data(
    SealboxJson(request): SealboxJson<EncryptRequest>,
) -> Result<Json<EncryptResponse>, SealboxHttpError> {
    tracing::info!("Encoding record");
    let encrypted_data = encode(&request.data)?;
    Ok(Json(EncryptResponse { encrypted_data }))
}

async fn decrypt_data(
    SealboxJson(request): SealboxJson<DecryptRequest>,
) -> Result<Json<DecryptResponse>, SealboxHttpError> {
    tracing::info!("Decoding record");
    let decrypted_data = decode(&request.encrypted_data)?;
    Ok(Json(DecryptResponse { decrypted_data }))
}

async fn sign_data(
    State(state): State<AppState>,
    SealboxJson(request): SealboxJson<SignRequest>,
) -> Result<Json<SignResponse>, SealboxHttpError> {
    tracing::info!("Signing record");
    let signature = sign(&request.data, &state.secret)?;
    Ok(Json(SignResponse {
        signature,
        data: request.data,
    }))
}

async fn verify_signature(
    State(state): State<AppState>,
    SealboxJson(request): SealboxJson<VerifyRequest>,
) -> Result<Json<VerifyResponse>, SealboxHttpError> {
    // A string that is not even signature-shaped cannot match any tag
    if !is_well_formed_signature(&request.signature) {
        tracing::info!(is_valid = false, "Rejected malformed signature");
        return Ok(Json(VerifyResponse { is_valid: false }));
    }

    let is_valid = verify(&request.data, &request.signature, &state.secret)?;
    tracing::info!(is_valid, "Verified signature");
    Ok(Json(VerifyResponse { is_valid }))
}
