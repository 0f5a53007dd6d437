//! The error normalization boundary.
//!
//! Every failure that reaches the wire goes through [`ApiError`]. The
//! `IntoResponse` impl is the only place failure detail crosses the trust
//! boundary: expected conditions carry their message, unexpected faults are
//! logged and replaced with a fixed opaque body. Response writing itself is
//! infallible (static status plus a serde_json literal).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use blogapi_store::StoreError;

/// Uniform error channel for request processing.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Credential missing, wrong scheme, or wrong value.
    #[error("Unauthorized")]
    Unauthorized,

    /// Request shape is wrong (the update id-match rule).
    #[error("{0}")]
    Validation(String),

    /// The addressed entity does not exist. Holds the resource name so the
    /// body reads "User not found" / "Blog not found".
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Anything unexpected, storage conflicts included. Logged here, never
    /// echoed to the caller.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn id_mismatch() -> Self {
        Self::Validation("ID mismatch".to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Internal(err) => {
                tracing::error!(error = %format!("{err:#}"), "unhandled failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_faults_are_opaque() {
        let response = ApiError::Internal(anyhow::anyhow!("secret detail")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_names_the_resource() {
        assert_eq!(ApiError::NotFound("User").to_string(), "User not found");
        assert_eq!(ApiError::NotFound("Blog").to_string(), "Blog not found");
    }
}
