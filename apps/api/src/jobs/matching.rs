//! Pure matching and formatting rules for job search. No storage access here.

use crate::models::job::JobRow;

/// Keyword search predicate. `keyword` must already be trimmed and lowercased.
/// An empty keyword matches every job; otherwise it is a substring match
/// against the title or the raw skills text, ignoring case.
pub fn matches_keyword(job: &JobRow, keyword: &str) -> bool {
    if keyword.is_empty() {
        return true;
    }
    job.title.to_lowercase().contains(keyword)
        || job.skills_text().to_lowercase().contains(keyword)
}

/// Renders a job as a single display line for chat clients, e.g.
/// `Python Backend Developer – Chennai (1 yr exp) | Skills: Python,Flask,SQL`.
/// The location segment is always present; a missing location renders empty.
pub fn display_line(job: &JobRow) -> String {
    let mut line = format!(
        "{} – {} ({} yr exp)",
        job.title,
        job.location.as_deref().unwrap_or(""),
        job.experience_years()
    );
    let skills = job.skills_text();
    if !skills.is_empty() {
        line.push_str(" | Skills: ");
        line.push_str(skills);
    }
    line
}

/// Skills as trimmed, lowercased tags in stored order.
pub fn normalize_skills(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',').map(|s| s.trim().to_lowercase()).collect()
}

/// Criteria for the structured filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    /// Exact skill tag to require; empty means any.
    pub skill: String,
    pub min_experience: i64,
}

impl JobFilter {
    pub fn new(skill: &str, min_experience: i64) -> Self {
        Self {
            skill: skill.trim().to_lowercase(),
            min_experience,
        }
    }

    /// `normalized_skills` must come from [`normalize_skills`].
    /// Skill matching is whole-tag equality, never substring.
    pub fn matches(&self, experience: i64, normalized_skills: &[String]) -> bool {
        experience >= self.min_experience
            && (self.skill.is_empty() || normalized_skills.iter().any(|s| *s == self.skill))
    }
}
