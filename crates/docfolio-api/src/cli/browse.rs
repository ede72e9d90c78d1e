//! Terminal preview of the home page.
//!
//! Reads through the same data-source port as the site itself, so it works
//! against published documents or a running server.

use std::fmt::Write as _;

use anyhow::{Result, anyhow};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use docfolio_core::catalog::{CategoryFilter, HomePage, PortfolioView};
use docfolio_infra::source::{ApiDataSource, StaticDataSource};
use docfolio_types::documentary::Documentary;
use docfolio_types::producer::ProducerInfo;
use docfolio_types::testimonial::Testimonial;

/// What to show from the loaded page.
#[derive(Debug, Clone)]
pub struct BrowseOptions {
    pub filter: CategoryFilter,
    pub pages: usize,
    pub page_size: usize,
}

/// Load the home page from `source` and print it.
pub async fn browse(source: &str, api: bool, options: BrowseOptions, json: bool) -> Result<()> {
    let page = if api {
        HomePage::load(&ApiDataSource::new(source)).await
    } else {
        HomePage::load(&StaticDataSource::new(source)).await
    };

    if let Err(err) = &page.documentaries {
        if !err.is_not_found() {
            return Err(anyhow!("could not load documentaries from {source}: {err}"));
        }
    }

    let view = gallery(&page, &options);
    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(&page, &view))?);
    } else {
        print!("{}", render(&page, &view));
    }
    Ok(())
}

/// Gallery with the filter applied and `pages` pages revealed.
pub fn gallery(page: &HomePage, options: &BrowseOptions) -> PortfolioView {
    let mut view = page.gallery(options.page_size);
    view.select(options.filter.clone());
    for _ in 1..options.pages.max(1) {
        view.load_more();
    }
    view
}

fn to_json(page: &HomePage, view: &PortfolioView) -> serde_json::Value {
    serde_json::json!({
        "producer": page.producer(),
        "featured": page.featured(),
        "filter": view.filter().to_string(),
        "visible": view.visible(),
        "total": view.filtered().len(),
        "has_more": view.has_more(),
        "testimonials": page.testimonials(),
    })
}

/// Render the whole page as terminal text.
pub fn render(page: &HomePage, view: &PortfolioView) -> String {
    let mut out = String::new();
    out.push('\n');

    match page.producer() {
        Some(producer) => render_producer(&mut out, producer),
        None => {
            let _ = writeln!(out, "  {}", style("Producer profile unavailable").yellow());
        }
    }
    out.push('\n');

    if let Some(doc) = page.featured() {
        render_featured(&mut out, doc);
        out.push('\n');
    }

    render_gallery(&mut out, view);
    out.push('\n');

    if !page.testimonials().is_empty() {
        let _ = writeln!(out, "  {}", style("── Testimonials ──").dim());
        for testimonial in page.testimonials() {
            render_testimonial(&mut out, testimonial);
        }
        out.push('\n');
    }

    for (section, err) in page.failures() {
        let _ = writeln!(
            out,
            "  {} {section}: {err}",
            style("!").red().bold()
        );
    }
    out
}

fn render_producer(out: &mut String, producer: &ProducerInfo) {
    let _ = writeln!(
        out,
        "  {} {}",
        style(&producer.name).bold().cyan(),
        style(format!("· {}", producer.title)).dim()
    );
    let _ = writeln!(out, "  {}  {}  {}", producer.location, producer.email, producer.phone);
    let _ = writeln!(
        out,
        "  {} · {} · {} · {}",
        producer.experience,
        producer.documentaries_count,
        producer.awards_count,
        producer.countries_count
    );
    if let Some(links) = &producer.social_links {
        let parts: Vec<String> = links
            .iter()
            .filter(|(_, url)| *url != "#")
            .map(|(platform, url)| format!("{}: {url}", platform.label()))
            .collect();
        if !parts.is_empty() {
            let _ = writeln!(out, "  {}", style(parts.join("  ")).dim());
        }
    }
}

fn render_featured(out: &mut String, doc: &Documentary) {
    let _ = writeln!(out, "  {}", style("── Featured ──").dim());
    let _ = writeln!(
        out,
        "  {} ({}) {}",
        style(&doc.title).bold(),
        doc.year,
        style(doc.category.label()).magenta()
    );
    let facts: Vec<&str> = [&doc.runtime, &doc.platforms, &doc.awards]
        .into_iter()
        .filter_map(|f| f.as_deref())
        .collect();
    if !facts.is_empty() {
        let _ = writeln!(out, "  {}", style(facts.join(" · ")).dim());
    }
    let _ = writeln!(out, "  {}", doc.description);
}

fn render_gallery(out: &mut String, view: &PortfolioView) {
    let _ = writeln!(
        out,
        "  {} {}",
        style("── Portfolio ──").dim(),
        style(view.filter().label()).cyan()
    );

    let visible = view.visible();
    if visible.is_empty() {
        let _ = writeln!(out, "  {}", style("No documentaries in this category.").dim());
        return;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Title").fg(Color::White),
        Cell::new("Category").fg(Color::White),
        Cell::new("Year").fg(Color::White),
        Cell::new("Status").fg(Color::White),
        Cell::new("Runtime").fg(Color::White),
    ]);
    for doc in &visible {
        table.add_row(vec![
            Cell::new(&doc.title),
            Cell::new(doc.category.label()),
            Cell::new(&doc.year),
            Cell::new(doc.status.as_deref().unwrap_or("-")),
            Cell::new(doc.runtime.as_deref().unwrap_or("-")),
        ]);
    }
    for line in table.to_string().lines() {
        let _ = writeln!(out, "  {line}");
    }

    let total = view.filtered().len();
    if view.has_more() {
        let _ = writeln!(
            out,
            "  {}",
            style(format!(
                "Showing {} of {total}. Use --pages to load more.",
                visible.len()
            ))
            .dim()
        );
    }
}

fn render_testimonial(out: &mut String, testimonial: &Testimonial) {
    let stars = match testimonial.stars() {
        Some(n) => "★".repeat(n as usize),
        None => testimonial.rating.clone(),
    };
    let _ = writeln!(
        out,
        "  {} {} {}",
        style(stars).yellow(),
        style(&testimonial.name).bold(),
        style(format!("{}, {}", testimonial.role, testimonial.company)).dim()
    );
    let _ = writeln!(out, "    \"{}\"", testimonial.testimonial);
}

#[cfg(test)]
mod tests {
    use super::*;
    use docfolio_infra::memory::MemoryStore;
    use docfolio_infra::publish::export_static;

    async fn exported_page() -> (tempfile::TempDir, HomePage) {
        let dir = tempfile::tempdir().unwrap();
        export_static(&MemoryStore::bundled().unwrap(), dir.path())
            .await
            .unwrap();
        let source = StaticDataSource::new(&dir.path().display().to_string());
        let page = HomePage::load(&source).await;
        (dir, page)
    }

    #[tokio::test]
    async fn test_gallery_pages_and_filter() {
        let (_dir, page) = exported_page().await;

        let options = BrowseOptions {
            filter: CategoryFilter::All,
            pages: 1,
            page_size: 6,
        };
        let view = gallery(&page, &options);
        assert_eq!(view.visible().len(), 6);
        assert!(view.has_more());

        let options = BrowseOptions { pages: 2, ..options };
        assert!(!gallery(&page, &options).has_more());

        let options = BrowseOptions {
            filter: "technology".parse().unwrap(),
            pages: 1,
            page_size: 6,
        };
        let view = gallery(&page, &options);
        let titles: Vec<&str> = view.visible().iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Digital Disconnect", "The AI Revolution"]);
    }

    #[tokio::test]
    async fn test_render_contains_sections() {
        let (_dir, page) = exported_page().await;
        let view = page.gallery(6);
        let text = console::strip_ansi_codes(&render(&page, &view)).to_string();

        assert!(text.contains("Perrine Keramphele"));
        assert!(text.contains("── Featured ──"));
        assert!(text.contains("Digital Disconnect"));
        assert!(text.contains("Showing 6 of 7"));
        assert!(text.contains("★★★★★ Sarah Chen"));
        assert!(text.contains("instagram.com/pkera_productions"));
    }
}
