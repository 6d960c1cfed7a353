use axum::extract::{Path, Query, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct EmailParam {
    pub email: String,
}

/// GET /activities — the full catalog, keyed by activity name.
pub async fn list_activities(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let directory = app.directory.read().await;
    Ok(Json(serde_json::to_value(directory.activities())?))
}

/// POST /activities/:activity_name/signup?email= — enroll a student.
pub async fn signup(
    State(app): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParam>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut directory = app.directory.write().await;
    directory.sign_up(&activity_name, &params.email)?;
    tracing::debug!(activity = %activity_name, email = %params.email, "signed up");

    Ok(Json(serde_json::json!({
        "message": format!("Signed up {} for {}", params.email, activity_name),
    })))
}

/// DELETE /activities/:activity_name/signup?email= — remove a student
/// from the roster.
pub async fn unregister(
    State(app): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParam>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut directory = app.directory.write().await;
    directory.unregister(&activity_name, &params.email)?;
    tracing::debug!(activity = %activity_name, email = %params.email, "unregistered");

    Ok(Json(serde_json::json!({
        "message": format!("Unregistered {} from {}", params.email, activity_name),
    })))
}
