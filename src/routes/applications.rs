use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use bytes::Bytes;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{Application, ApplicationStatus, ApplicationWithApplicant, Role};
use crate::state::SharedState;
use crate::upload;

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ApplicationStatus,
}

/// Submit an application: multipart body with a `job_id` field and a
/// `resume` file. The job's title and company are snapshotted onto the
/// application row. A duplicate (user, job) pair hits the unique
/// constraint and comes back as a conflict.
pub async fn submit(
    auth: AuthUser,
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Application>, AppError> {
    auth.require_candidate()?;

    let form = upload::parse(&headers, body).await?;

    let job_id: Uuid = form
        .text("job_id")
        .ok_or_else(|| AppError::BadRequest("job_id is required".to_string()))?
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid job id".to_string()))?;

    let resume = form
        .file("resume")
        .ok_or_else(|| AppError::BadRequest("Please upload a resume".to_string()))?;

    let job = db::jobs::find_by_id(&state.pool, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    let resume_ref = upload::store(&state.config.upload_dir, resume).await?;

    let application = db::applications::create(
        &state.pool,
        auth.user_id,
        job.id,
        &job.title,
        &job.company,
        &resume_ref,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("You have already applied for this job".to_string())
        }
        _ => AppError::Database(e),
    })?;

    Ok(Json(application))
}

pub async fn list_mine(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Application>>, AppError> {
    let applications = db::applications::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(applications))
}

/// Applicants for one job; visible to the job's owner and admins.
pub async fn list_for_job(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ApplicationWithApplicant>>, AppError> {
    let job = db::jobs::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    if !auth.can_manage(job.posted_by) {
        return Err(AppError::Forbidden(
            "Not authorized to view applications for this job".to_string(),
        ));
    }

    let applications = db::applications::list_for_job(&state.pool, id).await?;
    Ok(Json(applications))
}

/// One-way status transition, decided by the job's owning recruiter (or an
/// admin): `Applied` moves to `Accepted` or `Rejected`. The applicant gets a
/// best-effort notification email.
pub async fn update_status(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<Application>, AppError> {
    let application = db::applications::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    // Owner comes from the live job; if the job is gone, only an admin
    // can still settle the application.
    let owner = db::jobs::find_by_id(&state.pool, application.job_id)
        .await?
        .and_then(|job| job.posted_by);

    if !auth.can_manage(owner) {
        return Err(AppError::Forbidden(
            "Not authorized to update this application".to_string(),
        ));
    }

    if application.status != ApplicationStatus::Applied {
        return Err(AppError::BadRequest(format!(
            "Application is already {}",
            application.status
        )));
    }

    if req.status == ApplicationStatus::Applied {
        return Err(AppError::BadRequest(
            "Status can only move to Accepted or Rejected".to_string(),
        ));
    }

    let updated = db::applications::update_status(&state.pool, id, req.status).await?;

    notify_applicant(&state, &updated).await;

    Ok(Json(updated))
}

/// Withdraw an application. Allowed for the applicant themselves or an admin.
pub async fn withdraw(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let application = db::applications::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    if application.user_id != auth.user_id && auth.role != Role::Admin {
        return Err(AppError::Forbidden(
            "Not authorized to withdraw this application".to_string(),
        ));
    }

    db::applications::delete(&state.pool, id).await?;
    Ok(Json(json!({ "message": "Application withdrawn" })))
}

/// Fire-and-forget status email. Failures are logged and swallowed; the
/// status change has already committed.
async fn notify_applicant(state: &SharedState, application: &Application) {
    let Some(mailer) = state.mailer.clone() else {
        return;
    };

    let applicant = match db::users::find_by_id(&state.pool, application.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Failed to load applicant for notification: {e}");
            return;
        }
    };

    let status = application.status;
    let job_title = application.job_title.clone();
    let company = application.company.clone();

    tokio::spawn(async move {
        let result = match status {
            ApplicationStatus::Accepted => {
                mailer
                    .send_application_accepted(&applicant.email, &job_title, &company)
                    .await
            }
            ApplicationStatus::Rejected => {
                mailer
                    .send_application_rejected(&applicant.email, &job_title)
                    .await
            }
            ApplicationStatus::Applied => Ok(()),
        };
        if let Err(e) = result {
            tracing::error!("Failed to send status email: {e}");
        }
    });
}
