use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::FileRef;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub website: Option<String>,
    pub description: Option<String>,
    pub logo: Option<FileRef>,
    pub recruiter: Uuid,
    pub created_at: DateTime<Utc>,
}
