//! Contact-form submission handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde_json::Value;

use docfolio_types::contact::{Contact, NewContact};
use docfolio_types::error::PortfolioError;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestClock};
use crate::state::AppState;

/// POST /api/v1/contacts - Validate and store a contact submission.
///
/// Returns 201 with the stored record. A body that is not JSON is
/// `INVALID_BODY`; any JSON body breaking field rules, wrong field types
/// included, is `VALIDATION_ERROR` with one entry per field.
pub async fn create_contact(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, ApiResponse<Contact>), AppError> {
    let clock = RequestClock::start();
    let Json(body) = body?;

    let new = NewContact::from_value(&body).map_err(|errors| {
        tracing::info!(violations = errors.len(), "contact submission rejected: {errors}");
        PortfolioError::Validation(errors)
    })?;

    let contact = state.service.submit_contact(new).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(contact, &clock)))
}
