use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::payload::{coerce_id, coerce_int, loose_text, non_empty_str};

pub const REQUIRED_FIELDS_MISSING: &str = "Required fields missing";
pub const EMAIL_REQUIRED: &str = "Email is required";

/// Raw body of POST /apply. Fields stay untyped until validated.
#[derive(Debug, Default, Deserialize)]
pub struct ApplyRequest {
    pub job_id: Option<Value>,
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
    pub experience: Option<Value>,
    pub skills: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MyApplicationsRequest {
    pub email: Option<Value>,
}

/// A validated application ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub job_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub experience: i64,
    pub skills: String,
}

impl TryFrom<ApplyRequest> for NewApplication {
    type Error = AppError;

    /// `job_id`, `name` and `email` are required. `experience` falls back to 0
    /// and `skills` to empty text. The job id is not checked against `jobs`.
    fn try_from(req: ApplyRequest) -> Result<Self, Self::Error> {
        let missing = || AppError::Validation(REQUIRED_FIELDS_MISSING.to_string());

        let job_id = coerce_id(req.job_id.as_ref()).ok_or_else(missing)?;
        let name = non_empty_str(req.name.as_ref()).ok_or_else(missing)?;
        let email = non_empty_str(req.email.as_ref()).ok_or_else(missing)?;

        Ok(NewApplication {
            job_id,
            name: name.to_string(),
            email: email.to_string(),
            phone: loose_text(req.phone.as_ref()),
            experience: coerce_int(req.experience.as_ref()),
            skills: req
                .skills
                .as_ref()
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
        })
    }
}

impl MyApplicationsRequest {
    pub fn email(&self) -> Result<&str, AppError> {
        non_empty_str(self.email.as_ref())
            .ok_or_else(|| AppError::Validation(EMAIL_REQUIRED.to_string()))
    }
}
