//! HTTP/REST API layer for docfolio.
//!
//! Axum-based JSON API at `/api/v1/` with the envelope response format,
//! CORS, and static serving of the built site.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
