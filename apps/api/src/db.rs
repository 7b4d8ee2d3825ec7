use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Demo postings inserted into an empty `jobs` table: (title, location, experience, skills).
const SEED_JOBS: [(&str, &str, i64, &str); 3] = [
    ("Python Backend Developer", "Chennai", 1, "Python,Flask,SQL"),
    ("Frontend Developer", "Remote", 0, "HTML,CSS,JavaScript"),
    ("Full Stack Engineer", "Bangalore", 2, "React,Node,SQL"),
];

/// Opens the SQLite database file, creating it if absent.
///
/// Foreign keys stay unenforced: an application may reference a job id that
/// does not exist.
pub async fn create_pool(database_path: &str) -> Result<SqlitePool> {
    info!("Opening SQLite database at {database_path}");

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Creates the `jobs` and `applications` tables if they do not exist.
pub async fn initialize(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            location TEXT,
            experience INTEGER,
            skills TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS applications (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            job_id INTEGER,
            name TEXT,
            email TEXT,
            phone TEXT,
            experience INTEGER,
            skills TEXT,
            status TEXT DEFAULT 'Applied',
            FOREIGN KEY(job_id) REFERENCES jobs(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Inserts the demo jobs, but only when the `jobs` table is empty.
/// Returns the number of rows inserted.
pub async fn seed(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    for (title, location, experience, skills) in SEED_JOBS {
        sqlx::query("INSERT INTO jobs (title, location, experience, skills) VALUES (?, ?, ?, ?)")
            .bind(title)
            .bind(location)
            .bind(experience)
            .bind(skills)
            .execute(pool)
            .await?;
    }

    info!("Seeded {} demo jobs", SEED_JOBS.len());
    Ok(SEED_JOBS.len())
}

/// Fresh, initialized and seeded database in a temp directory.
/// The `TempDir` must outlive the pool.
#[cfg(test)]
pub async fn test_pool() -> (tempfile::TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("smarthire-test.db");
    let pool = create_pool(path.to_str().expect("utf-8 temp path"))
        .await
        .expect("open test database");
    initialize(&pool).await.expect("create schema");
    seed(&pool).await.expect("seed jobs");
    (dir, pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn job_count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let (_dir, pool) = test_pool().await;
        assert_eq!(job_count(&pool).await, 3);

        assert_eq!(seed(&pool).await.unwrap(), 0);
        assert_eq!(job_count(&pool).await, 3);
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let (_dir, pool) = test_pool().await;
        initialize(&pool).await.unwrap();
        initialize(&pool).await.unwrap();
        assert_eq!(job_count(&pool).await, 3);
    }

    #[tokio::test]
    async fn test_seed_skips_non_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.db");
        let pool = create_pool(path.to_str().unwrap()).await.unwrap();
        initialize(&pool).await.unwrap();
        sqlx::query("INSERT INTO jobs (title, location, experience, skills) VALUES ('Ops', NULL, 3, '')")
            .execute(&pool)
            .await
            .unwrap();

        assert_eq!(seed(&pool).await.unwrap(), 0);
        assert_eq!(job_count(&pool).await, 1);
    }
}
