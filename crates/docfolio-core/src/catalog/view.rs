//! Gallery state: category filter plus incremental reveal.

use std::fmt;
use std::str::FromStr;

use docfolio_types::documentary::{Category, Documentary};

/// Gallery filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order: "All" followed by the known categories.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::known().into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(&self) -> String {
        match self {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Exact, case-sensitive category match.
    pub fn matches(&self, documentary: &Documentary) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => documentary.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("category filter cannot be empty".to_string()),
            "all" => Ok(CategoryFilter::All),
            other => Ok(CategoryFilter::Only(Category::new(other))),
        }
    }
}

/// Filtered, progressively revealed view over a fetched documentary list.
///
/// Owns a transient copy of the list; nothing here is authoritative.
#[derive(Debug, Clone)]
pub struct PortfolioView {
    documentaries: Vec<Documentary>,
    filter: CategoryFilter,
    page_size: usize,
    visible_count: usize,
}

impl PortfolioView {
    /// Cards revealed initially and per "load more".
    pub const DEFAULT_PAGE_SIZE: usize = 6;

    /// Start on "All" with one page visible. A zero page size is raised to one.
    pub fn new(documentaries: Vec<Documentary>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            documentaries,
            filter: CategoryFilter::All,
            page_size,
            visible_count: page_size,
        }
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Switch filter. The revealed count carries over to the new selection.
    pub fn select(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Reveal one more page.
    pub fn load_more(&mut self) {
        self.visible_count = self.visible_count.saturating_add(self.page_size);
    }

    /// Documentaries matching the filter, in source order.
    pub fn filtered(&self) -> Vec<&Documentary> {
        self.documentaries
            .iter()
            .filter(|d| self.filter.matches(d))
            .collect()
    }

    /// The revealed prefix of [`filtered`](Self::filtered).
    pub fn visible(&self) -> Vec<&Documentary> {
        let mut filtered = self.filtered();
        filtered.truncate(self.visible_count);
        filtered
    }

    /// Whether "load more" would reveal anything.
    pub fn has_more(&self) -> bool {
        self.visible_count < self.filtered().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docfolio_types::documentary::NewDocumentary;
    use docfolio_types::id::RecordId;

    fn doc(id: &str, category: &str) -> Documentary {
        Documentary::from_insert(
            RecordId::from(id),
            NewDocumentary::new(format!("Doc {id}"), "desc", category, "2024", "https://img"),
        )
    }

    fn catalogue(n: usize) -> Vec<Documentary> {
        (0..n)
            .map(|i| {
                let category = if i % 2 == 0 { "environment" } else { "culture" };
                doc(&i.to_string(), category)
            })
            .collect()
    }

    #[test]
    fn test_initial_page_and_load_more() {
        let mut view = PortfolioView::new(catalogue(14), 6);
        assert_eq!(view.visible().len(), 6);
        assert!(view.has_more());

        view.load_more();
        assert_eq!(view.visible().len(), 12);
        assert!(view.has_more());

        view.load_more();
        assert_eq!(view.visible().len(), 14);
        assert!(!view.has_more());
    }

    #[test]
    fn test_filter_is_exact_and_keeps_order() {
        let mut view = PortfolioView::new(catalogue(7), 6);
        view.select("environment".parse().unwrap());
        let ids: Vec<&str> = view.filtered().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "2", "4", "6"]);

        view.select("Environment".parse().unwrap());
        assert!(view.filtered().is_empty());
        assert!(!view.has_more());
    }

    #[test]
    fn test_select_keeps_reveal() {
        let mut view = PortfolioView::new(catalogue(30), 6);
        view.load_more();
        assert_eq!(view.visible_count(), 12);

        view.select(CategoryFilter::Only(Category::new("culture")));
        assert_eq!(view.visible_count(), 12);
        assert_eq!(view.visible().len(), 12);
        assert!(view.has_more());

        view.select(CategoryFilter::All);
        assert_eq!(view.visible().len(), 12);
    }

    #[test]
    fn test_load_more_saturates() {
        let mut view = PortfolioView::new(catalogue(3), usize::MAX);
        view.load_more();
        assert_eq!(view.visible_count(), usize::MAX);
        assert_eq!(view.visible().len(), 3);
        assert!(!view.has_more());
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        let view = PortfolioView::new(catalogue(3), 0);
        assert_eq!(view.visible().len(), 1);
    }

    #[test]
    fn test_filter_options_and_parsing() {
        let labels: Vec<String> = CategoryFilter::options().iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec!["All", "Social Issues", "Environment", "Technology", "Culture"]
        );
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert!("".parse::<CategoryFilter>().is_err());
        assert_eq!(
            "technology".parse::<CategoryFilter>().unwrap().to_string(),
            "technology"
        );
    }
}
