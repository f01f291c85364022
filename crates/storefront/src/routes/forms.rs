//! Form submission route handlers.
//!
//! Club applications, experience reservations, and newsletter signups all
//! arrive here as one discriminated payload and are forwarded to the
//! spreadsheet collaborator. The forward is fire-and-forget: the shopper
//! gets a confirmation whether or not the spreadsheet was reachable, since
//! the spreadsheet is not authoritative for anything the shopper cares
//! about. Do not surface forwarding failures to the client.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::services::FormSubmission;
use crate::state::AppState;

/// Form submission acknowledgement.
#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub status: &'static str,
}

/// Accept a form submission and forward it to the spreadsheet.
#[instrument(skip(state, form), fields(form_type = %form.form_type))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<FormSubmission>,
) -> Result<Json<FormResponse>> {
    if form.form_type.trim().is_empty() {
        return Err(AppError::BadRequest("formType is required".to_string()));
    }

    match state.sheets() {
        Some(client) => client.submit(&form).await,
        None => {
            tracing::warn!("No spreadsheet endpoint configured, dropping form submission");
        }
    }

    Ok(Json(FormResponse { status: "received" }))
}
