use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored application as returned by the insert. Candidate contact fields
/// are write-only in this service and not read back.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationRow {
    pub id: i64,
    pub job_id: Option<i64>,
    pub experience: Option<i64>,
    pub skills: Option<String>,
    pub status: Option<String>,
}

/// One line of a candidate's "my applications" listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ApplicationSummary {
    pub application_id: i64,
    pub job_title: String,
    pub status: Option<String>,
}
