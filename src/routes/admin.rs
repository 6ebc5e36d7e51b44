use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{Job, User};
use crate::state::SharedState;

pub async fn list_users(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<User>>, AppError> {
    auth.require_admin()?;
    let users = db::users::list_all(&state.pool).await?;
    Ok(Json(users))
}

/// Deletes the user only. Their jobs and companies stay behind as orphaned
/// references; nothing cascades.
pub async fn delete_user(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth.require_admin()?;

    let removed = db::users::delete(&state.pool, id).await?;
    if removed == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(Json(json!({ "message": "User deleted" })))
}

pub async fn list_jobs(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Job>>, AppError> {
    auth.require_admin()?;
    let jobs = db::jobs::list_recent(&state.pool).await?;
    Ok(Json(jobs))
}
