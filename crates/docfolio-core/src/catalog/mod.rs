//! Presentation-side query layer.
//!
//! Everything the site's front end derives from fetched data: the category
//! filter with incremental "load more" reveal, the featured-slot fallback
//! used with static documents, and the concurrent home-page load. Rendering
//! itself lives outside this crate.

pub mod featured;
pub mod home;
pub mod source;
pub mod view;

pub use featured::pick_featured;
pub use home::HomePage;
pub use source::DataSource;
pub use view::{CategoryFilter, PortfolioView};
