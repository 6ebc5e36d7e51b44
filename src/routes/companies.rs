use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use bytes::Bytes;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::Company;
use crate::state::SharedState;
use crate::upload;

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Company>>, AppError> {
    auth.require_recruiter()?;
    let companies = db::companies::list_by_recruiter(&state.pool, auth.user_id).await?;
    Ok(Json(companies))
}

/// Multipart create: name/location/website/description fields plus an
/// optional `logo` image.
pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Company>, AppError> {
    auth.require_recruiter()?;

    let form = upload::parse(&headers, body).await?;

    let name = form
        .text("name")
        .ok_or_else(|| AppError::BadRequest("name is required".to_string()))?;
    let location = form
        .text("location")
        .ok_or_else(|| AppError::BadRequest("location is required".to_string()))?;

    let logo = match form.file("logo") {
        Some(file) if !file.is_image() => {
            return Err(AppError::BadRequest(
                "Only image files are allowed for the logo".to_string(),
            ));
        }
        Some(file) => Some(upload::store(&state.config.upload_dir, file).await?),
        None => None,
    };

    let company = db::companies::create(
        &state.pool,
        name,
        location,
        form.text("website"),
        form.text("description"),
        logo.as_ref(),
        auth.user_id,
    )
    .await?;

    Ok(Json(company))
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Company>, AppError> {
    let company = db::companies::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Company not found".to_string()))?;

    if !auth.can_manage(Some(company.recruiter)) {
        return Err(AppError::Forbidden(
            "Not authorized to view this company".to_string(),
        ));
    }

    Ok(Json(company))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Company>, AppError> {
    let company = db::companies::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Company not found".to_string()))?;

    if !auth.can_manage(Some(company.recruiter)) {
        return Err(AppError::Forbidden(
            "Not authorized to edit this company".to_string(),
        ));
    }

    let form = upload::parse(&headers, body).await?;

    let logo = match form.file("logo") {
        Some(file) if !file.is_image() => {
            return Err(AppError::BadRequest(
                "Only image files are allowed for the logo".to_string(),
            ));
        }
        Some(file) => {
            let stored = upload::store(&state.config.upload_dir, file).await?;
            // Replacing the logo retires the old local file.
            if let Some(old) = &company.logo {
                upload::remove(&state.config.upload_dir, old).await;
            }
            Some(stored)
        }
        None => None,
    };

    let updated = db::companies::update(
        &state.pool,
        id,
        form.text("name"),
        form.text("location"),
        form.text("website"),
        form.text("description"),
        logo.as_ref(),
    )
    .await?;

    Ok(Json(updated))
}
