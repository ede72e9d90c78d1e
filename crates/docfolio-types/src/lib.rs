//! Shared domain types for docfolio.
//!
//! Record schemas for the portfolio site: Documentary, Testimonial,
//! ProducerInfo, Contact and User, their insert payloads, contact
//! validation, and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod contact;
pub mod documentary;
pub mod error;
pub mod id;
pub mod producer;
pub mod social;
pub mod testimonial;
pub mod user;
pub mod validation;
