//! Static export command.

use std::path::Path;

use anyhow::Result;
use console::style;

use docfolio_infra::publish::export_static;

use crate::state::AppState;

/// Write every collection of the seeded store to `out`.
pub async fn export(state: &AppState, out: &Path, json: bool) -> Result<()> {
    let summary = export_static(state.service.store(), out).await?;

    if json {
        let files: Vec<String> = summary
            .files
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        let report = serde_json::json!({
            "out": out.display().to_string(),
            "documentaries": summary.documentaries,
            "testimonials": summary.testimonials,
            "contacts": summary.contacts,
            "producer": summary.producer,
            "files": files,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Exported portfolio to {}",
        style("✓").green().bold(),
        style(out.display()).cyan()
    );
    println!(
        "  {} documentaries, {} testimonials, {} contacts, producer {}",
        style(summary.documentaries).bold(),
        style(summary.testimonials).bold(),
        style(summary.contacts).bold(),
        if summary.producer {
            style("present").green()
        } else {
            style("missing").yellow()
        }
    );
    for file in &summary.files {
        println!("    {}", style(file.display()).dim());
    }
    println!();
    Ok(())
}
