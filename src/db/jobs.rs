use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Job, PostedJob};

pub async fn create(
    pool: &PgPool,
    title: &str,
    company: &str,
    location: &str,
    salary: &str,
    description: &str,
    required_skills: &[String],
    posted_by: Uuid,
) -> Result<Job, sqlx::Error> {
    sqlx::query_as::<_, Job>(
        "INSERT INTO jobs (title, company, location, salary, description, required_skills, posted_by)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(title)
    .bind(company)
    .bind(location)
    .bind(salary)
    .bind(description)
    .bind(required_skills)
    .bind(posted_by)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// The active job collection, newest first. The feeds filter and truncate
/// this in memory; the table stays small enough for a linear pass.
pub async fn list_recent(pool: &PgPool) -> Result<Vec<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY posted_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn count_all<'e, E: sqlx::PgExecutor<'e>>(executor: E) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs")
        .fetch_one(executor)
        .await
}

/// A recruiter's own jobs with per-job application counts.
pub async fn list_by_owner_with_counts(
    pool: &PgPool,
    owner: Uuid,
) -> Result<Vec<PostedJob>, sqlx::Error> {
    sqlx::query_as::<_, PostedJob>(
        "SELECT j.*, COUNT(a.id) AS total_applied
         FROM jobs j
         LEFT JOIN applications a ON a.job_id = j.id
         WHERE j.posted_by = $1
         GROUP BY j.id
         ORDER BY j.posted_at DESC",
    )
    .bind(owner)
    .fetch_all(pool)
    .await
}

/// Partial update: absent fields keep their current value.
#[allow(clippy::too_many_arguments)]
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    title: Option<&str>,
    company: Option<&str>,
    location: Option<&str>,
    salary: Option<&str>,
    description: Option<&str>,
    required_skills: Option<&[String]>,
) -> Result<Job, sqlx::Error> {
    sqlx::query_as::<_, Job>(
        "UPDATE jobs SET
             title = COALESCE($2, title),
             company = COALESCE($3, company),
             location = COALESCE($4, location),
             salary = COALESCE($5, salary),
             description = COALESCE($6, description),
             required_skills = COALESCE($7, required_skills)
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(title)
    .bind(company)
    .bind(location)
    .bind(salary)
    .bind(description)
    .bind(required_skills)
    .fetch_one(pool)
    .await
}

/// Deletes the job only. Its applications keep their snapshots.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
