//! Failures a handler can end with, and the plain-text responses they map to.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use todo_core::ValidationError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Todo Not Found")]
    NotFound,

    #[error("storage failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Validation(error) => {
                (StatusCode::BAD_REQUEST, error.to_string()).into_response()
            }
            ServerError::NotFound => (StatusCode::NOT_FOUND, "Todo Not Found").into_response(),
            // Storage details stay in the log.
            ServerError::Database(error) => {
                tracing::error!(%error, "storage operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_bad_request() {
        let response = ServerError::from(ValidationError::Priority).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_is_404() {
        assert_eq!(
            ServerError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn database_error_is_500() {
        let response = ServerError::from(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
