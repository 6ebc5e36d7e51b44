use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role. The source data set used "user" and "candidate"
/// interchangeably for the same concept; both labels resolve to
/// [`Role::Candidate`] here, and anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "user")]
    Candidate,
    Recruiter,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Recruiter => "recruiter",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "candidate" | "user" => Ok(Role::Candidate),
            "recruiter" => Ok(Role::Recruiter),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for Role {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Role {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(s.parse::<Role>()?)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for Role {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_user_label_normalizes_to_candidate() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::Candidate);
        assert_eq!("candidate".parse::<Role>().unwrap(), Role::Candidate);
        assert_eq!(" Recruiter ".parse::<Role>().unwrap(), Role::Recruiter);
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert!("superuser".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn json_alias_round_trip() {
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::Candidate);
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"candidate\"");
        assert!(serde_json::from_str::<Role>("\"moderator\"").is_err());
    }
}
