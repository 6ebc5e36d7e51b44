use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Job;

/// True toggle on the saved set: remove when present, insert when absent.
/// Returns the new membership state.
pub async fn toggle(pool: &PgPool, user_id: Uuid, job_id: Uuid) -> Result<bool, sqlx::Error> {
    let removed = sqlx::query("DELETE FROM saved_jobs WHERE user_id = $1 AND job_id = $2")
        .bind(user_id)
        .bind(job_id)
        .execute(pool)
        .await?
        .rows_affected();

    if removed > 0 {
        return Ok(false);
    }

    sqlx::query(
        "INSERT INTO saved_jobs (user_id, job_id) VALUES ($1, $2)
         ON CONFLICT (user_id, job_id) DO NOTHING",
    )
    .bind(user_id)
    .bind(job_id)
    .execute(pool)
    .await?;

    Ok(true)
}

/// The user's saved jobs, resolved to full job records. Jobs deleted since
/// they were saved drop out through the join.
pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>(
        "SELECT j.* FROM saved_jobs s
         JOIN jobs j ON j.id = s.job_id
         WHERE s.user_id = $1
         ORDER BY s.saved_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
