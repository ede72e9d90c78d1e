//! Infrastructure layer for docfolio.
//!
//! Contains the implementations of the ports defined in `docfolio-core`:
//! the in-memory record store and its seed loader, config loading, static
//! document publishing, and the data sources the presentation layer reads
//! from (published documents or the live API).

pub mod config;
pub mod memory;
pub mod publish;
pub mod seed;
pub mod source;
