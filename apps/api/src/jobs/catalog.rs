use sqlx::SqlitePool;

use crate::jobs::matching::{display_line, matches_keyword, normalize_skills, JobFilter};
use crate::models::job::{Job, JobRow};

async fn fetch_all_rows(pool: &SqlitePool) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        "SELECT id, title, location, experience, skills FROM jobs ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Returns every job with skills split into a list.
pub async fn list_jobs(pool: &SqlitePool) -> Result<Vec<Job>, sqlx::Error> {
    let rows = fetch_all_rows(pool).await?;
    Ok(rows.into_iter().map(Job::from).collect())
}

/// Keyword search returning display lines. `keyword` is trimmed and
/// lowercased here, so callers may pass raw user input.
pub async fn search_by_keyword(
    pool: &SqlitePool,
    keyword: &str,
) -> Result<Vec<String>, sqlx::Error> {
    let keyword = keyword.trim().to_lowercase();
    let rows = fetch_all_rows(pool).await?;
    Ok(rows
        .iter()
        .filter(|row| matches_keyword(row, &keyword))
        .map(display_line)
        .collect())
}

/// Structured filter. Matching jobs carry normalized (trimmed, lowercased) skills.
pub async fn filter_jobs(pool: &SqlitePool, filter: &JobFilter) -> Result<Vec<Job>, sqlx::Error> {
    let rows = fetch_all_rows(pool).await?;
    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let skills = normalize_skills(row.skills_text());
            filter
                .matches(row.experience_years(), &skills)
                .then(|| row.into_job_with(skills))
        })
        .collect())
}
