use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{FileRef, Role, User};

pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
    role: Role,
    skills: &[String],
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email, password_hash, role, skills)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(skills)
    .fetch_one(pool)
    .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Partial profile update: absent fields keep their current value.
#[allow(clippy::too_many_arguments)]
pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    name: Option<&str>,
    bio: Option<&str>,
    role: Option<Role>,
    skills: Option<&[String]>,
    avatar: Option<FileRef>,
    resume: Option<FileRef>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET
             name = COALESCE($2, name),
             bio = COALESCE($3, bio),
             role = COALESCE($4, role),
             skills = COALESCE($5, skills),
             avatar = COALESCE($6, avatar),
             resume = COALESCE($7, resume)
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(name)
    .bind(bio)
    .bind(role)
    .bind(skills)
    .bind(avatar)
    .bind(resume)
    .fetch_one(pool)
    .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// Any admin, else any user at all. Owner for the fallback job set.
pub async fn find_seed_owner<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        "SELECT id FROM users ORDER BY (role = 'admin') DESC, created_at ASC LIMIT 1",
    )
    .fetch_optional(executor)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
