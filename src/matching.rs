//! Skill matching and free-text search for the job feeds.
//!
//! A single linear pass over the job collection: filter by an optional
//! search term, score each job against the candidate's skill list, order by
//! posting recency and truncate to the page size.

use crate::models::Job;

/// Page size for the authenticated, personalized feed.
pub const FEED_PAGE_SIZE: usize = 20;
/// Public feed page size without a search term.
pub const PUBLIC_PAGE_SIZE: usize = 6;
/// Public feed page size when a search term is present.
pub const PUBLIC_SEARCH_PAGE_SIZE: usize = 12;

fn normalize(skills: &[String]) -> Vec<String> {
    skills.iter().map(|s| s.trim().to_lowercase()).collect()
}

/// Percentage of a job's required skills covered by the candidate's skills,
/// rounded to the nearest integer.
///
/// A required skill counts as covered when it contains, or is contained by,
/// at least one candidate skill. The containment is deliberately
/// bidirectional, so "react" covers "react native" and the other way round.
/// An empty required list scores 0; so does an empty candidate list.
pub fn match_percentage(user_skills: &[String], required_skills: &[String]) -> u8 {
    let required = normalize(required_skills);
    if required.is_empty() {
        return 0;
    }

    let user = normalize(user_skills);
    let matched = required
        .iter()
        .filter(|req| {
            user.iter()
                .any(|have| have.contains(req.as_str()) || req.contains(have.as_str()))
        })
        .count();

    ((matched as f64 / required.len() as f64) * 100.0).round() as u8
}

/// Case-insensitive substring search across title, company, location and
/// the required skills.
pub fn matches_search(job: &Job, term: &str) -> bool {
    let term = term.to_lowercase();
    job.title.to_lowercase().contains(&term)
        || job.company.to_lowercase().contains(&term)
        || job.location.to_lowercase().contains(&term)
        || job
            .required_skills
            .iter()
            .any(|s| s.to_lowercase().contains(&term))
}

/// Filter by search term, order newest first and truncate to `limit`.
pub fn rank(mut jobs: Vec<Job>, search: Option<&str>, limit: usize) -> Vec<Job> {
    if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
        jobs.retain(|job| matches_search(job, term));
    }
    jobs.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
    jobs.truncate(limit);
    jobs
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn job(title: &str, company: &str, location: &str, required: &[&str], age_days: i64) -> Job {
        Job {
            id: Uuid::now_v7(),
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            salary: "competitive".to_string(),
            description: "...".to_string(),
            required_skills: skills(required),
            posted_by: None,
            posted_at: Utc::now() - Duration::days(age_days),
        }
    }

    #[test]
    fn empty_required_skills_score_zero() {
        assert_eq!(match_percentage(&skills(&["react", "node"]), &[]), 0);
    }

    #[test]
    fn empty_user_skills_score_zero() {
        assert_eq!(match_percentage(&[], &skills(&["react", "redux"])), 0);
    }

    #[test]
    fn one_of_three_rounds_to_33() {
        // user ["react","node"] vs required ["react","redux","css"]
        let pct = match_percentage(
            &skills(&["react", "node"]),
            &skills(&["react", "redux", "css"]),
        );
        assert_eq!(pct, 33);
    }

    #[test]
    fn two_of_three_rounds_to_67() {
        let pct = match_percentage(
            &skills(&["react", "css", "figma"]),
            &skills(&["react", "redux", "css"]),
        );
        assert_eq!(pct, 67);
    }

    #[test]
    fn full_overlap_is_100() {
        let pct = match_percentage(
            &skills(&["Go", "Kubernetes"]),
            &skills(&["go", "kubernetes"]),
        );
        assert_eq!(pct, 100);
    }

    #[test]
    fn containment_works_both_ways() {
        // user skill contains the required skill
        assert_eq!(
            match_percentage(&skills(&["react native"]), &skills(&["react"])),
            100
        );
        // required skill contains the user skill
        assert_eq!(
            match_percentage(&skills(&["react"]), &skills(&["react native"])),
            100
        );
    }

    #[test]
    fn comparison_trims_and_ignores_case() {
        let pct = match_percentage(&skills(&["  ReAcT "]), &skills(&["React", "Redux"]));
        assert_eq!(pct, 50);
    }

    #[test]
    fn percentage_stays_within_bounds() {
        let user = skills(&["a", "b", "ab", "abc"]);
        for n in 1..=7usize {
            let required: Vec<String> = (0..n).map(|i| format!("skill{i}")).collect();
            let pct = match_percentage(&user, &required);
            assert!(pct <= 100);
        }
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let j = job(
            "Frontend Developer",
            "Netflix",
            "Remote",
            &["React", "JavaScript"],
            0,
        );
        assert!(matches_search(&j, "frontend"));
        assert!(matches_search(&j, "NETFLIX"));
        assert!(matches_search(&j, "remo"));
        assert!(matches_search(&j, "javasc"));
        assert!(!matches_search(&j, "golang"));
    }

    #[test]
    fn rank_filters_sorts_and_truncates() {
        let jobs = vec![
            job("Backend Dev", "A", "Pune", &["Go"], 3),
            job("Frontend Dev", "B", "Remote", &["React"], 1),
            job("Go Platform Engineer", "C", "Berlin", &["Go", "gRPC"], 2),
        ];

        let ranked = rank(jobs, Some("go"), 10);
        assert_eq!(ranked.len(), 2);
        // newest first
        assert_eq!(ranked[0].title, "Go Platform Engineer");
        assert_eq!(ranked[1].title, "Backend Dev");
    }

    #[test]
    fn rank_without_term_keeps_everything_up_to_limit() {
        let jobs = (0..9i64).map(|i| job("J", "C", "L", &[], i)).collect();
        assert_eq!(rank(jobs, None, 6).len(), 6);
    }

    #[test]
    fn blank_search_term_is_no_filter() {
        let jobs = vec![job("A", "B", "C", &[], 0), job("D", "E", "F", &[], 1)];
        assert_eq!(rank(jobs, Some("   "), 10).len(), 2);
    }
}
