//! Testimonial handlers.

use axum::extract::State;

use docfolio_types::testimonial::Testimonial;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestClock};
use crate::state::AppState;

/// GET /api/v1/testimonials - All testimonials in insertion order.
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Testimonial>>, AppError> {
    let clock = RequestClock::start();
    let testimonials = state.service.list_testimonials().await?;
    Ok(ApiResponse::success(testimonials, &clock).with_link("self", "/api/v1/testimonials"))
}
