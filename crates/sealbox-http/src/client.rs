//! Reqwest-based Sealbox HTTP client

use crate::error::SealboxHttpError;
use crate::types::{
    DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse, HealthResponse, SignRequest,
    SignResponse, VerifyRequest, VerifyResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// HTTP client for a running Sealbox service
///
/// # Example
///
/// ```ignore
/// use sealbox_http::SealboxClient;
///
/// let client = SealboxClient::new("http://localhost:8000");
/// let encoded = client.encrypt(serde_json::json!({"age": 30})).await?;
/// ```
pub struct SealboxClient {
    client: Client,
    base_url: String,
}

impl SealboxClient {
    /// Create a client for the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("default reqwest client builds"),
            base_url: base_url.into(),
        }
    }

    /// Create a client with custom reqwest settings.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /encrypt`
    pub async fn encrypt(&self, data: Value) -> Result<Value, SealboxHttpError> {
        let response: EncryptResponse = self.post("/encrypt", &EncryptRequest { data }).await?;
        Ok(response.encrypted_data)
    }

    /// `POST /decrypt`
    pub async fn decrypt(&self, encrypted_data: Value) -> Result<Value, SealboxHttpError> {
        let response: DecryptResponse = self
            .post("/decrypt", &DecryptRequest { encrypted_data })
            .await?;
        Ok(response.decrypted_data)
    }

    /// `POST /sign`
    pub async fn sign(&self, data: Value) -> Result<SignResponse, SealboxHttpError> {
        self.post("/sign", &SignRequest { data }).await
    }

    /// `POST /verify`
    pub async fn verify(&self, data: Value, signature: String) -> Result<bool, SealboxHttpError> {
        let response: VerifyResponse = self
            .post("/verify", &VerifyRequest { data, signature })
            .await?;
        Ok(response.is_valid)
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthResponse, SealboxHttpError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.json().await?)
    }

    async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, SealboxHttpError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if status.is_client_error() {
            return Err(SealboxHttpError::ClientError(response.text().await?));
        }
        if status.is_server_error() {
            return Err(SealboxHttpError::ServerError(response.text().await?));
        }

        Ok(response.json().await?)
    }
}

impl Default for SealboxClient {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
