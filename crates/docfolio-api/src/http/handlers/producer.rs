//! Producer profile handler.

use axum::extract::State;

use docfolio_types::producer::ProducerInfo;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestClock};
use crate::state::AppState;

/// GET /api/v1/producer - The producer singleton.
pub async fn get_producer(
    State(state): State<AppState>,
) -> Result<ApiResponse<ProducerInfo>, AppError> {
    let clock = RequestClock::start();
    let info = state.service.get_producer_info().await?;
    Ok(ApiResponse::success(info, &clock)
        .with_link("self", "/api/v1/producer")
        .with_link("contact", "/api/v1/contacts"))
}
