use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use bytes::Bytes;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{Role, User};
use crate::routes::parse_skill_csv;
use crate::state::SharedState;
use crate::upload;

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<User>, AppError> {
    let user = db::users::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}

/// Multipart profile update: text fields plus optional avatar and resume
/// files. Absent fields are left untouched.
pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<User>, AppError> {
    let form = upload::parse(&headers, body).await?;

    let role = match form.text("role") {
        Some(raw) => Some(raw.parse::<Role>().map_err(AppError::BadRequest)?),
        None => None,
    };
    let skills = form.text("skills").map(parse_skill_csv);

    let avatar = match form.file("avatar") {
        Some(file) => Some(upload::store(&state.config.upload_dir, file).await?),
        None => None,
    };
    let resume = match form.file("resume") {
        Some(file) => Some(upload::store(&state.config.upload_dir, file).await?),
        None => None,
    };

    let user = db::users::update_profile(
        &state.pool,
        auth.user_id,
        form.text("name"),
        form.text("bio"),
        role,
        skills.as_deref(),
        avatar,
        resume,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => AppError::NotFound("User not found".to_string()),
        _ => AppError::Database(e),
    })?;

    Ok(Json(user))
}
