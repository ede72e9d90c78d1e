//! Documentary read handlers.

use axum::extract::{Path, State};

use docfolio_types::documentary::Documentary;
use docfolio_types::id::RecordId;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestClock};
use crate::state::AppState;

/// GET /api/v1/documentaries - All documentaries in catalogue order.
pub async fn list_documentaries(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Documentary>>, AppError> {
    let clock = RequestClock::start();
    let docs = state.service.list_documentaries().await?;
    Ok(ApiResponse::success(docs, &clock).with_link("self", "/api/v1/documentaries"))
}

/// GET /api/v1/documentaries/category/{category} - Exact-match category subset.
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<ApiResponse<Vec<Documentary>>, AppError> {
    let clock = RequestClock::start();
    let docs = state.service.list_documentaries_by_category(&category).await?;
    Ok(ApiResponse::success(docs, &clock)
        .with_link("self", format!("/api/v1/documentaries/category/{category}")))
}

/// GET /api/v1/documentaries/featured - The featured documentary.
pub async fn get_featured(
    State(state): State<AppState>,
) -> Result<ApiResponse<Documentary>, AppError> {
    let clock = RequestClock::start();
    let doc = state.service.get_featured_documentary().await?;
    let href = format!("/api/v1/documentaries/{}", doc.id);
    Ok(ApiResponse::success(doc, &clock).with_link("self", href))
}

/// GET /api/v1/documentaries/{id} - One documentary by id.
pub async fn get_documentary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Documentary>, AppError> {
    let clock = RequestClock::start();
    let doc = state
        .service
        .get_documentary(&RecordId::from(id.as_str()))
        .await?;
    let category = format!("/api/v1/documentaries/category/{}", doc.category);
    Ok(ApiResponse::success(doc, &clock)
        .with_link("self", format!("/api/v1/documentaries/{id}"))
        .with_link("category", category))
}
