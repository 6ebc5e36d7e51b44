use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Company, FileRef};

pub async fn create(
    pool: &PgPool,
    name: &str,
    location: &str,
    website: Option<&str>,
    description: Option<&str>,
    logo: Option<&FileRef>,
    recruiter: Uuid,
) -> Result<Company, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "INSERT INTO companies (name, location, website, description, logo, recruiter)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(name)
    .bind(location)
    .bind(website)
    .bind(description)
    .bind(logo)
    .bind(recruiter)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_by_recruiter(
    pool: &PgPool,
    recruiter: Uuid,
) -> Result<Vec<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "SELECT * FROM companies WHERE recruiter = $1 ORDER BY created_at DESC",
    )
    .bind(recruiter)
    .fetch_all(pool)
    .await
}

/// Partial update: absent fields keep their current value.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    name: Option<&str>,
    location: Option<&str>,
    website: Option<&str>,
    description: Option<&str>,
    logo: Option<&FileRef>,
) -> Result<Company, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "UPDATE companies SET
             name = COALESCE($2, name),
             location = COALESCE($3, location),
             website = COALESCE($4, website),
             description = COALESCE($5, description),
             logo = COALESCE($6, logo)
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(name)
    .bind(location)
    .bind(website)
    .bind(description)
    .bind(logo)
    .fetch_one(pool)
    .await
}
