// Candidate applications: submission and lookup by email.

pub mod handlers;
pub mod store;
pub mod validation;
