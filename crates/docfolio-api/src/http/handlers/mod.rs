//! HTTP request handlers for the REST API.

pub mod contact;
pub mod documentary;
pub mod producer;
pub mod testimonial;
