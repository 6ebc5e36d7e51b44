use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    /// Free text, not a reference into the companies table.
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub posted_by: Option<Uuid>,
    pub posted_at: DateTime<Utc>,
}

/// A recruiter's own job with its application count, for the dashboard.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct PostedJob {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub posted_by: Option<Uuid>,
    pub posted_at: DateTime<Utc>,
    pub total_applied: i64,
}
