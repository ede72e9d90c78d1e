//! Home-page data load.

use docfolio_types::documentary::Documentary;
use docfolio_types::error::SourceError;
use docfolio_types::producer::ProducerInfo;
use docfolio_types::testimonial::Testimonial;

use super::source::DataSource;
use super::view::PortfolioView;

/// Everything the home page shows, fetched concurrently.
///
/// Each section keeps its own result so one failed fetch leaves the
/// others renderable.
#[derive(Debug)]
pub struct HomePage {
    pub documentaries: Result<Vec<Documentary>, SourceError>,
    pub testimonials: Result<Vec<Testimonial>, SourceError>,
    pub producer: Result<ProducerInfo, SourceError>,
    pub featured: Result<Documentary, SourceError>,
}

impl HomePage {
    /// Issue all four fetches at once and wait for every one of them.
    pub async fn load<D: DataSource>(source: &D) -> Self {
        let (documentaries, testimonials, producer, featured) = tokio::join!(
            source.documentaries(),
            source.testimonials(),
            source.producer(),
            source.featured(),
        );

        let page = Self {
            documentaries,
            testimonials,
            producer,
            featured,
        };
        for (section, err) in page.failures() {
            tracing::warn!(section, error = %err, "home page section unavailable");
        }
        page
    }

    /// Gallery over the fetched list; empty when that fetch failed.
    pub fn gallery(&self, page_size: usize) -> PortfolioView {
        let documentaries = self.documentaries.as_ref().cloned().unwrap_or_default();
        PortfolioView::new(documentaries, page_size)
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        self.testimonials.as_deref().unwrap_or(&[])
    }

    pub fn producer(&self) -> Option<&ProducerInfo> {
        self.producer.as_ref().ok()
    }

    pub fn featured(&self) -> Option<&Documentary> {
        self.featured.as_ref().ok()
    }

    /// Sections whose fetch failed for a reason other than absence.
    pub fn failures(&self) -> Vec<(&'static str, &SourceError)> {
        let sections = [
            ("documentaries", self.documentaries.as_ref().err()),
            ("testimonials", self.testimonials.as_ref().err()),
            ("producer", self.producer.as_ref().err()),
            ("featured", self.featured.as_ref().err()),
        ];
        sections
            .into_iter()
            .filter_map(|(section, err)| err.map(|e| (section, e)))
            .filter(|(_, e)| !e.is_not_found())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docfolio_types::documentary::NewDocumentary;
    use docfolio_types::id::RecordId;
    use docfolio_types::testimonial::NewTestimonial;

    struct StubSource {
        broken_testimonials: bool,
        producer: Option<ProducerInfo>,
    }

    fn documentary(id: &str) -> Documentary {
        Documentary::from_insert(
            RecordId::from(id),
            NewDocumentary::new("Title", "desc", "culture", "2021", "https://img"),
        )
    }

    impl DataSource for StubSource {
        async fn documentaries(&self) -> Result<Vec<Documentary>, SourceError> {
            Ok(vec![documentary("1"), documentary("2")])
        }

        async fn testimonials(&self) -> Result<Vec<Testimonial>, SourceError> {
            if self.broken_testimonials {
                return Err(SourceError::fetch("testimonials", "connection refused"));
            }
            Ok(vec![Testimonial::from_insert(
                RecordId::from("t1"),
                NewTestimonial {
                    name: "Sarah".to_string(),
                    role: "Director".to_string(),
                    company: "Netflix".to_string(),
                    testimonial: "Great".to_string(),
                    avatar_url: "https://avatar".to_string(),
                    rating: None,
                },
            )])
        }

        async fn producer(&self) -> Result<ProducerInfo, SourceError> {
            self.producer
                .clone()
                .ok_or_else(|| SourceError::NotFound("producer".to_string()))
        }

        async fn featured(&self) -> Result<Documentary, SourceError> {
            Ok(documentary("1"))
        }
    }

    #[tokio::test]
    async fn test_failed_section_leaves_others_intact() {
        let source = StubSource {
            broken_testimonials: true,
            producer: None,
        };
        let page = HomePage::load(&source).await;

        assert!(page.testimonials().is_empty());
        assert_eq!(page.gallery(6).visible().len(), 2);
        assert_eq!(page.featured().unwrap().id.as_str(), "1");
        assert!(page.producer().is_none());

        let failures = page.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "testimonials");
    }

    #[tokio::test]
    async fn test_all_sections_loaded() {
        let source = StubSource {
            broken_testimonials: false,
            producer: None,
        };
        let page = HomePage::load(&source).await;
        assert_eq!(page.testimonials().len(), 1);
        assert_eq!(page.testimonials()[0].rating, "5");
        assert!(page.failures().is_empty());
    }
}
