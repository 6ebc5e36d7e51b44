use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{FileRef, Role};

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    /// Ordered as the user entered them; normalized only at match time.
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub avatar: Option<FileRef>,
    pub resume: Option<FileRef>,
    pub created_at: DateTime<Utc>,
}
