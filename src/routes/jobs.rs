use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::matching;
use crate::models::{Job, PostedJob};
use crate::routes::SkillsField;
use crate::seed;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub required_skills: Option<SkillsField>,
}

#[derive(Deserialize)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub required_skills: Option<SkillsField>,
}

/// A job annotated with how well it matches the requesting candidate.
#[derive(Serialize)]
pub struct RecommendedJob {
    #[serde(flatten)]
    pub job: Job,
    pub match_percentage: u8,
}

/// Unauthenticated landing feed. Seeds the fallback set on a completely
/// empty board, otherwise filters and truncates the collection.
pub async fn public_feed(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Job>>, AppError> {
    if let Some(seeded) = seed::seed_if_empty(&state.pool).await? {
        return Ok(Json(seeded));
    }

    let search = params.search.as_deref();
    let limit = match search.map(str::trim) {
        Some(term) if !term.is_empty() => matching::PUBLIC_SEARCH_PAGE_SIZE,
        _ => matching::PUBLIC_PAGE_SIZE,
    };

    let jobs = db::jobs::list_recent(&state.pool).await?;
    Ok(Json(matching::rank(jobs, search, limit)))
}

/// Personalized feed: every job carries a skill match percentage. A user
/// with no skill list just scores 0 everywhere.
pub async fn recommendations(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<RecommendedJob>>, AppError> {
    let user_skills = db::users::find_by_id(&state.pool, auth.user_id)
        .await?
        .map(|u| u.skills)
        .unwrap_or_default();

    let annotate = |jobs: Vec<Job>| -> Vec<RecommendedJob> {
        jobs.into_iter()
            .map(|job| RecommendedJob {
                match_percentage: matching::match_percentage(&user_skills, &job.required_skills),
                job,
            })
            .collect()
    };

    if let Some(seeded) = seed::seed_if_empty(&state.pool).await? {
        return Ok(Json(annotate(seeded)));
    }

    let jobs = db::jobs::list_recent(&state.pool).await?;
    let ranked = matching::rank(jobs, params.search.as_deref(), matching::FEED_PAGE_SIZE);
    Ok(Json(annotate(ranked)))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CreateJob>,
) -> Result<Json<Job>, AppError> {
    auth.require_recruiter()?;

    for (field, value) in [
        ("title", &req.title),
        ("company", &req.company),
        ("location", &req.location),
        ("salary", &req.salary),
        ("description", &req.description),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::BadRequest(format!("{field} is required")));
        }
    }

    let skills = req
        .required_skills
        .map(SkillsField::into_vec)
        .unwrap_or_default();

    let job = db::jobs::create(
        &state.pool,
        req.title.trim(),
        req.company.trim(),
        req.location.trim(),
        req.salary.trim(),
        &req.description,
        &skills,
        auth.user_id,
    )
    .await?;

    Ok(Json(job))
}

pub async fn get(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Job>, AppError> {
    let job = db::jobs::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
    Ok(Json(job))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJob>,
) -> Result<Json<Job>, AppError> {
    let job = db::jobs::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    if !auth.can_manage(job.posted_by) {
        return Err(AppError::Forbidden(
            "Not authorized to edit this job".to_string(),
        ));
    }

    let skills = req.required_skills.map(SkillsField::into_vec);

    let updated = db::jobs::update(
        &state.pool,
        id,
        req.title.as_deref(),
        req.company.as_deref(),
        req.location.as_deref(),
        req.salary.as_deref(),
        req.description.as_deref(),
        skills.as_deref(),
    )
    .await?;

    Ok(Json(updated))
}

/// Deleting a job leaves its applications in place; their snapshots keep
/// the history readable.
pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let job = db::jobs::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    if !auth.can_manage(job.posted_by) {
        return Err(AppError::Forbidden(
            "Not authorized to delete this job".to_string(),
        ));
    }

    db::jobs::delete(&state.pool, id).await?;
    Ok(Json(json!({ "message": "Job removed" })))
}

pub async fn my_posted_jobs(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<PostedJob>>, AppError> {
    auth.require_recruiter()?;
    let jobs = db::jobs::list_by_owner_with_counts(&state.pool, auth.user_id).await?;
    Ok(Json(jobs))
}

pub async fn stats(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let total_jobs = db::jobs::count_all(&state.pool).await?;
    let my_applications = db::applications::count_for_user(&state.pool, auth.user_id).await?;
    let accepted = db::applications::count_accepted_for_user(&state.pool, auth.user_id).await?;

    Ok(Json(json!({
        "total_jobs": total_jobs,
        "my_applications": my_applications,
        "accepted": accepted,
    })))
}

/// True toggle: saving an already-saved job unsaves it. The response
/// reports the new membership state.
pub async fn toggle_saved(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    db::jobs::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    let saved = db::saved_jobs::toggle(&state.pool, auth.user_id, id).await?;
    let message = if saved { "Job saved" } else { "Job removed" };
    Ok(Json(json!({ "message": message, "saved": saved })))
}

pub async fn saved_jobs(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = db::saved_jobs::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(jobs))
}
