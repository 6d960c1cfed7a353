use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mergington_core::ActivityError;

/// Unified error type for HTTP responses.
///
/// Wraps `anyhow::Error` so handlers can use `?` on anything; the response
/// status comes from downcasting to [`ActivityError`]. Bodies carry the
/// error text under a `detail` key — clients match on that literal string.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<ActivityError>() {
            match e {
                ActivityError::ActivityNotFound | ActivityError::NotSignedUp => {
                    StatusCode::NOT_FOUND
                }
                ActivityError::AlreadySignedUp => StatusCode::BAD_REQUEST,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "detail": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
