//! Static publishing of the portfolio data.
//!
//! Writes one JSON document per collection so the site can be hosted
//! without the request layer. Record shapes match the API `data` payloads.

use std::path::{Path, PathBuf};

use docfolio_core::repository::PortfolioStore;
use docfolio_types::error::RepositoryError;
use serde::Serialize;
use thiserror::Error;

pub const DOCUMENTARIES_FILE: &str = "documentaries.json";
pub const TESTIMONIALS_FILE: &str = "testimonials.json";
pub const PRODUCER_FILE: &str = "producer.json";
pub const CONTACTS_FILE: &str = "contacts.json";

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode {0}: {1}")]
    Encode(&'static str, serde_json::Error),

    #[error(transparent)]
    Store(#[from] RepositoryError),
}

/// What an export wrote.
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub documentaries: usize,
    pub testimonials: usize,
    pub contacts: usize,
    pub producer: bool,
    pub files: Vec<PathBuf>,
}

/// Write every collection of `store` into `out_dir`, creating it if needed.
///
/// A missing producer record is written as `null`.
pub async fn export_static<S: PortfolioStore>(
    store: &S,
    out_dir: &Path,
) -> Result<ExportSummary, PublishError> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|source| PublishError::Io {
            path: out_dir.to_path_buf(),
            source,
        })?;

    let documentaries = store.list_documentaries().await?;
    let testimonials = store.list_testimonials().await?;
    let producer = store.get_producer_info().await?;
    let contacts = store.list_contacts().await?;

    let mut summary = ExportSummary {
        documentaries: documentaries.len(),
        testimonials: testimonials.len(),
        contacts: contacts.len(),
        producer: producer.is_some(),
        files: Vec::with_capacity(4),
    };

    summary
        .files
        .push(write_document(out_dir, DOCUMENTARIES_FILE, &documentaries).await?);
    summary
        .files
        .push(write_document(out_dir, TESTIMONIALS_FILE, &testimonials).await?);
    summary
        .files
        .push(write_document(out_dir, PRODUCER_FILE, &producer).await?);
    summary
        .files
        .push(write_document(out_dir, CONTACTS_FILE, &contacts).await?);

    tracing::info!(
        out = %out_dir.display(),
        documentaries = summary.documentaries,
        testimonials = summary.testimonials,
        "static documents written"
    );
    Ok(summary)
}

async fn write_document<T: Serialize>(
    dir: &Path,
    name: &'static str,
    value: &T,
) -> Result<PathBuf, PublishError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| PublishError::Encode(name, e))?;
    let path = dir.join(name);
    tokio::fs::write(&path, json)
        .await
        .map_err(|source| PublishError::Io {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}
