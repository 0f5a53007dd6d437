use axum::response::Response;

use crate::app::errors::ApiError;

/// Diagnostic endpoint that always fails, keeping the error-normalization
/// path observable end to end. Mounted outside the protected router, so no
/// credential is required.
pub async fn throw() -> Result<Response, ApiError> {
    Err(ApiError::Internal(anyhow::anyhow!("test exception")))
}
