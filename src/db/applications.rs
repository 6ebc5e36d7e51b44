use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Application, ApplicationStatus, ApplicationWithApplicant, FileRef};

/// Insert a new application with its job snapshot. A duplicate (user, job)
/// pair surfaces as a unique violation; the caller maps it to a conflict.
pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    job_id: Uuid,
    job_title: &str,
    company: &str,
    resume: &FileRef,
) -> Result<Application, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        "INSERT INTO applications (user_id, job_id, job_title, company, resume)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(user_id)
    .bind(job_id)
    .bind(job_title)
    .bind(company)
    .bind(resume)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Application>, sqlx::Error> {
    sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Application>, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        "SELECT * FROM applications WHERE user_id = $1 ORDER BY applied_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn list_for_job(
    pool: &PgPool,
    job_id: Uuid,
) -> Result<Vec<ApplicationWithApplicant>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationWithApplicant>(
        "SELECT a.*, u.name AS applicant_name, u.email AS applicant_email,
                u.skills AS applicant_skills
         FROM applications a
         JOIN users u ON u.id = a.user_id
         WHERE a.job_id = $1
         ORDER BY a.applied_at DESC",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await
}

pub async fn update_status(
    pool: &PgPool,
    id: Uuid,
    status: ApplicationStatus,
) -> Result<Application, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        "UPDATE applications SET status = $2 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(status)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM applications WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn count_for_user(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
}

pub async fn count_accepted_for_user(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM applications WHERE user_id = $1 AND status = 'Accepted'",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}
