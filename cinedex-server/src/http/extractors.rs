//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::models::ValidationError;

/// JSON request body whose decode failures are validation errors (400).
///
/// Unlike `axum::Json` this does not insist on a `Content-Type` header and
/// never answers 422.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::Malformed(rejection.body_text()))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ValidationError::Malformed(e.to_string()))?;
        Ok(Self(value))
    }
}
