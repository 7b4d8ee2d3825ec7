//! Axum route handlers for candidate applications.

use axum::{
    extract::{rejection::BytesRejection, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::applications::store::{list_by_email, submit_application};
use crate::applications::validation::{ApplyRequest, MyApplicationsRequest, NewApplication};
use crate::errors::AppError;
use crate::models::application::ApplicationSummary;
use crate::payload::{body_or_empty, lenient_json};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MyApplicationsResponse {
    pub success: bool,
    pub applications: Vec<ApplicationSummary>,
}

/// POST /apply
pub async fn handle_apply(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ApplyResponse>, AppError> {
    let request: ApplyRequest = lenient_json(&body_or_empty(body));
    let application = NewApplication::try_from(request)?;
    submit_application(&state.db, &application).await?;

    Ok(Json(ApplyResponse {
        success: true,
        message: "Application submitted successfully!".to_string(),
    }))
}

/// POST /my-applications
pub async fn handle_my_applications(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<MyApplicationsResponse>, AppError> {
    let request: MyApplicationsRequest = lenient_json(&body_or_empty(body));
    let applications = list_by_email(&state.db, request.email()?).await?;

    Ok(Json(MyApplicationsResponse {
        success: true,
        applications,
    }))
}
