use axum::http::Uri;

use crate::error::AppError;

/// Runs behind the gate: an unauthenticated miss on a private path still redirects.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}
