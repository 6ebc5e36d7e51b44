pub mod admin;
pub mod applications;
pub mod auth;
pub mod companies;
pub mod jobs;
pub mod profile;

use axum::routing::{delete, get, post, put};
use axum::Router;
use serde::Deserialize;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        // Profile
        .route(
            "/api/v1/profile",
            get(profile::get).put(profile::update),
        )
        // Jobs
        .route("/api/v1/jobs/public", get(jobs::public_feed))
        .route("/api/v1/jobs/recommendations", get(jobs::recommendations))
        .route("/api/v1/jobs/stats", get(jobs::stats))
        .route("/api/v1/jobs/mine", get(jobs::my_posted_jobs))
        .route("/api/v1/jobs/saved", get(jobs::saved_jobs))
        .route("/api/v1/jobs", post(jobs::create))
        .route(
            "/api/v1/jobs/{id}",
            get(jobs::get).put(jobs::update).delete(jobs::delete),
        )
        .route("/api/v1/jobs/{id}/save", put(jobs::toggle_saved))
        .route(
            "/api/v1/jobs/{id}/applications",
            get(applications::list_for_job),
        )
        // Applications
        .route(
            "/api/v1/applications",
            get(applications::list_mine).post(applications::submit),
        )
        .route(
            "/api/v1/applications/{id}/status",
            put(applications::update_status),
        )
        .route("/api/v1/applications/{id}", delete(applications::withdraw))
        // Companies
        .route(
            "/api/v1/companies",
            get(companies::list).post(companies::create),
        )
        .route(
            "/api/v1/companies/{id}",
            get(companies::get).put(companies::update),
        )
        // Admin
        .route("/api/v1/admin/users", get(admin::list_users))
        .route("/api/v1/admin/users/{id}", delete(admin::delete_user))
        .route("/api/v1/admin/jobs", get(admin::list_jobs))
}

/// Skill lists arrive either as a JSON array or as one comma-separated
/// string, depending on the client form. Both normalize to a trimmed list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsField {
    List(Vec<String>),
    Csv(String),
}

impl SkillsField {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            SkillsField::List(list) => list
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            SkillsField::Csv(csv) => parse_skill_csv(&csv),
        }
    }
}

pub fn parse_skill_csv(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_accept_both_shapes() {
        let list: SkillsField = serde_json::from_str(r#"["react", " node "]"#).unwrap();
        assert_eq!(list.into_vec(), vec!["react", "node"]);

        let csv: SkillsField = serde_json::from_str(r#""react, node,,css ""#).unwrap();
        assert_eq!(csv.into_vec(), vec!["react", "node", "css"]);
    }
}
