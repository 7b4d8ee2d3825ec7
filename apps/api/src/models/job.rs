use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `jobs` row as stored. `skills` is the raw comma-joined text.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: i64,
    pub title: String,
    pub location: Option<String>,
    pub experience: Option<i64>,
    pub skills: Option<String>,
}

/// A job posting as returned to clients, with skills expanded into a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub location: Option<String>,
    pub experience: i64,
    pub skills: Vec<String>,
}

impl JobRow {
    pub fn skills_text(&self) -> &str {
        self.skills.as_deref().unwrap_or("")
    }

    pub fn experience_years(&self) -> i64 {
        self.experience.unwrap_or(0)
    }

    /// Converts into the client shape with a caller-chosen skills list.
    pub fn into_job_with(self, skills: Vec<String>) -> Job {
        Job {
            experience: self.experience_years(),
            id: self.id,
            title: self.title,
            location: self.location,
            skills,
        }
    }
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        let skills = split_skills(row.skills_text());
        row.into_job_with(skills)
    }
}

/// Splits stored skills text on commas, keeping order and each piece verbatim.
/// Empty text yields no skills.
pub fn split_skills(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',').map(str::to_string).collect()
}
