//! Business logic and repository trait definitions for docfolio.
//!
//! This crate defines the "ports" (repository traits and the presentation
//! `DataSource`) that the infrastructure layer implements, the request-layer
//! service, and the gallery query logic. Of the workspace crates it uses only
//! `docfolio-types` -- never on `docfolio-infra`.

pub mod catalog;
pub mod repository;
pub mod service;
