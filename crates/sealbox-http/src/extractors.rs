//! Axum extractors for Sealbox requests

use crate::error::SealboxHttpError;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

/// JSON body extractor that maps rejections to the Sealbox error shape
///
/// Axum's stock `Json` rejection answers with a plain-text body (and a 422
/// for schema mismatches); this wrapper turns both syntax and schema
/// failures into a 400 with a `PARSE_ERROR` [`ErrorResponse`] body.
///
/// [`ErrorResponse`]: crate::ErrorResponse
///
/// # Example
///
/// ```ignore
/// use sealbox_http::SealboxJson;
///
/// async fn handler(SealboxJson(request): SealboxJson<EncryptRequest>) {
///     // request deserialized, failures already mapped
/// }
/// ```
pub struct SealboxJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for SealboxJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = SealboxHttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| SealboxHttpError::ParseError(e.to_string()))?;

        Ok(SealboxJson(body))
    }
}
