//! HTTP mapping for the error taxonomy
//!
//! Each kind maps to one status and a plain-text body. Store and
//! connection details are logged, never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::{Error, ErrorKind};

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Connection | Self::Store => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.kind().status();
        let body = match &self {
            Self::Validation(_) | Self::NotFound { .. } => {
                tracing::warn!(status = status.as_u16(), "{}", self);
                format!("{}\n", self)
            }
            Self::Connection(detail) => {
                tracing::error!("Database connection error: {}", detail);
                "database unavailable\n".to_owned()
            }
            Self::Store(detail) => {
                tracing::error!("Database error: {}", detail);
                "database operation failed\n".to_owned()
            }
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationError;
    use axum::body::to_bytes;
    use axum::http::header::CONTENT_TYPE;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = Error::Validation(ValidationError::Empty { field: "title" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "validation failed: title cannot be empty\n");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = Error::not_found("director", 7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(body_text(response).await, "director '7' not found\n");
    }

    #[tokio::test]
    async fn store_error_is_500_without_detail() {
        let response = Error::Store("duplicate key value violates unique constraint".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "database operation failed\n");
    }

    #[tokio::test]
    async fn connection_error_is_500() {
        let response = Error::Connection("pool timed out".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "database unavailable\n");
    }
}
