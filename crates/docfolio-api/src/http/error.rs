//! Application error type mapping to HTTP status codes and envelope format.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use docfolio_types::error::PortfolioError;

use super::response::{ApiErrorDetail, ApiResponse, RequestClock};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Outcome of a portfolio operation.
    Portfolio(PortfolioError),
    /// The request body is not JSON.
    InvalidBody(String),
}

impl From<PortfolioError> for AppError {
    fn from(e: PortfolioError) -> Self {
        AppError::Portfolio(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl AppError {
    fn details(&self) -> Vec<ApiErrorDetail> {
        match self {
            AppError::Portfolio(PortfolioError::NotFound(message)) => {
                vec![ApiErrorDetail::new("NOT_FOUND", message.clone())]
            }
            AppError::Portfolio(PortfolioError::Validation(errors)) => errors
                .iter()
                .map(|v| {
                    ApiErrorDetail::new("VALIDATION_ERROR", v.message.clone())
                        .with_details(json!({ "field": v.field }))
                })
                .collect(),
            AppError::Portfolio(PortfolioError::Internal(detail)) => {
                tracing::error!(%detail, "request failed");
                vec![ApiErrorDetail::new("INTERNAL_ERROR", "Internal server error")]
            }
            AppError::InvalidBody(reason) => {
                tracing::info!(%reason, "rejected malformed request body");
                vec![ApiErrorDetail::new("INVALID_BODY", reason.clone())]
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let clock = RequestClock::start();
        ApiResponse::failure(self.details(), &clock).into_response()
    }
}
