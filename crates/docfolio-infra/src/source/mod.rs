//! Data sources for the presentation layer.
//!
//! Both implement [`docfolio_core::catalog::DataSource`]:
//! [`StaticDataSource`] over published documents and [`ApiDataSource`]
//! over the running request layer.

mod api;
mod files;

pub use api::ApiDataSource;
pub use files::StaticDataSource;

/// Whether a location string names an HTTP(S) resource rather than a path.
pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_kinds() {
        assert!(is_url("https://portfolio.example.com/data"));
        assert!(is_url("http://127.0.0.1:8080"));
        assert!(!is_url("./public/data"));
        assert!(!is_url("/srv/site"));
    }

    #[test]
    fn test_join_url_normalizes_slashes() {
        assert_eq!(join_url("http://h/data/", "/a.json"), "http://h/data/a.json");
        assert_eq!(join_url("http://h", "api/v1/x"), "http://h/api/v1/x");
    }
}
