use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::FileRef;

/// Application lifecycle. Transitions are one-way: `Applied` moves to
/// `Accepted` or `Rejected` and stops there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Applied" => Ok(ApplicationStatus::Applied),
            "Accepted" => Ok(ApplicationStatus::Accepted),
            "Rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(format!("Unknown application status: {other}")),
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for ApplicationStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ApplicationStatus {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(s.parse::<ApplicationStatus>()?)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for ApplicationStatus {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Application {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_id: Uuid,
    /// Snapshot taken at submission; survives deletion of the job.
    pub job_title: String,
    pub company: String,
    pub status: ApplicationStatus,
    pub resume: FileRef,
    pub applied_at: DateTime<Utc>,
}

/// An application joined with the applicant's public details, for the
/// recruiter's per-job applicant list.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ApplicationWithApplicant {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub status: ApplicationStatus,
    pub resume: FileRef,
    pub applied_at: DateTime<Utc>,
    pub applicant_name: String,
    pub applicant_email: String,
    pub applicant_skills: Vec<String>,
}
