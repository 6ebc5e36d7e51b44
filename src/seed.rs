//! Fallback job set for an empty database.
//!
//! The public and personalized feeds never show an empty board: the first
//! request against an empty jobs table inserts this fixed set once and
//! returns it. With no users to own the jobs, nothing is inserted and the
//! caller gets an empty list instead.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::models::Job;

struct SeedJob {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary: &'static str,
    description: &'static str,
    required_skills: &'static [&'static str],
}

const FALLBACK_JOBS: &[SeedJob] = &[
    SeedJob {
        title: "Software Engineer III",
        company: "Google",
        location: "Bangalore",
        salary: "₹35L - ₹50L",
        description: "Google Cloud infra.",
        required_skills: &["Go", "Kubernetes", "Distributed Systems"],
    },
    SeedJob {
        title: "Frontend Developer",
        company: "Netflix",
        location: "Remote",
        salary: "₹45L",
        description: "Netflix TV UI.",
        required_skills: &["React", "JavaScript", "Performance"],
    },
    SeedJob {
        title: "SDE-2 (Backend)",
        company: "Amazon",
        location: "Hyderabad",
        salary: "₹38L",
        description: "Amazon Pay systems.",
        required_skills: &["Java", "DynamoDB", "AWS"],
    },
    SeedJob {
        title: "Product Designer",
        company: "Airbnb",
        location: "Remote",
        salary: "₹25L",
        description: "Design experiences.",
        required_skills: &["Figma", "UI/UX"],
    },
    SeedJob {
        title: "Full Stack Engineer",
        company: "Zomato",
        location: "Gurugram",
        salary: "₹22L",
        description: "Order systems.",
        required_skills: &["Node.js", "React", "MongoDB"],
    },
    SeedJob {
        title: "Data Scientist",
        company: "Microsoft",
        location: "Bangalore",
        salary: "₹40L",
        description: "Azure AI.",
        required_skills: &["Python", "PyTorch", "Azure"],
    },
];

/// Seed the fallback jobs if, and only if, the jobs table is empty.
///
/// Returns `Some(jobs)` when this call populated (or found an unseedable
/// empty) table — the caller should respond with that set directly. Returns
/// `None` when the table already had jobs. An advisory lock serializes
/// concurrent first requests so the set is inserted at most once.
pub async fn seed_if_empty(pool: &PgPool) -> Result<Option<Vec<Job>>, sqlx::Error> {
    if db::jobs::count_all(pool).await? > 0 {
        return Ok(None);
    }

    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock(42)")
        .execute(&mut *tx)
        .await?;

    // Re-check under the lock: another request may have seeded meanwhile.
    if db::jobs::count_all(&mut *tx).await? > 0 {
        return Ok(None);
    }

    let Some(owner) = db::users::find_seed_owner(&mut *tx).await? else {
        tracing::warn!("No users exist; cannot seed fallback jobs");
        return Ok(Some(Vec::new()));
    };

    let mut jobs = Vec::with_capacity(FALLBACK_JOBS.len());
    for seed in FALLBACK_JOBS {
        let skills: Vec<String> = seed.required_skills.iter().map(|s| s.to_string()).collect();
        let job = insert_seed_job(&mut tx, seed, &skills, owner).await?;
        jobs.push(job);
    }

    tx.commit().await?;
    tracing::info!("Seeded {} fallback jobs", jobs.len());

    Ok(Some(jobs))
}

async fn insert_seed_job(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    seed: &SeedJob,
    skills: &[String],
    owner: Uuid,
) -> Result<Job, sqlx::Error> {
    sqlx::query_as::<_, Job>(
        "INSERT INTO jobs (title, company, location, salary, description, required_skills, posted_by)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(seed.title)
    .bind(seed.company)
    .bind(seed.location)
    .bind(seed.salary)
    .bind(seed.description)
    .bind(skills)
    .bind(owner)
    .fetch_one(&mut **tx)
    .await
}
