use sqlx::SqlitePool;
use tracing::info;

use crate::applications::validation::NewApplication;
use crate::models::application::{ApplicationRow, ApplicationSummary};

pub const STATUS_APPLIED: &str = "Applied";

/// Inserts a new application with status `Applied` and returns the stored row.
pub async fn submit_application(
    pool: &SqlitePool,
    application: &NewApplication,
) -> Result<ApplicationRow, sqlx::Error> {
    let row = sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications (job_id, name, email, phone, experience, skills, status)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, job_id, experience, skills, status
        "#,
    )
    .bind(application.job_id)
    .bind(&application.name)
    .bind(&application.email)
    .bind(&application.phone)
    .bind(application.experience)
    .bind(&application.skills)
    .bind(STATUS_APPLIED)
    .fetch_one(pool)
    .await?;

    info!(
        "Stored application {} for job {} with status {}",
        row.id,
        application.job_id,
        row.status.as_deref().unwrap_or(STATUS_APPLIED)
    );
    Ok(row)
}

/// Applications submitted under `email`, joined to their job title.
/// Applications pointing at a job that does not exist are left out.
pub async fn list_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Vec<ApplicationSummary>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationSummary>(
        r#"
        SELECT a.id AS application_id, j.title AS job_title, a.status AS status
        FROM applications a
        JOIN jobs j ON a.job_id = j.id
        WHERE a.email = ?
        ORDER BY a.id
        "#,
    )
    .bind(email)
    .fetch_all(pool)
    .await
}
