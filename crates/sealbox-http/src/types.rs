//! Request and response bodies for the Sealbox HTTP API

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /encrypt`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EncryptRequest {
    pub data: Value,
}

/// Response of `POST /encrypt`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EncryptResponse {
    pub encrypted_data: Value,
}

/// Body of `POST /decrypt`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecryptRequest {
    pub encrypted_data: Value,
}

/// Response of `POST /decrypt`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecryptResponse {
    pub decrypted_data: Value,
}

/// Body of `POST /sign`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignRequest {
    pub data: Value,
}

/// Response of `POST /sign`; echoes the signed value alongside its tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignResponse {
    pub signature: String,
    pub data: Value,
}

/// Body of `POST /verify`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifyRequest {
    pub data: Value,
    pub signature: String,
}

/// Response of `POST /verify`; a mismatch is `is_valid: false`, not an error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifyResponse {
    pub is_valid: bool,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
