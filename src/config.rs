//! App Configuration
//!
//! Settings baked in at build time from the environment Trunk runs in:
//! `CAROUSEL_API_URL` (collection base URL) and `CAROUSEL_LOG` (log level).

use log::LevelFilter;

/// Mock API serving the carousel collection.
pub const DEFAULT_API_URL: &str = "https://6584f29b022766bcb8c7b0b2.mockapi.io/api/carouselData";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL; the collection lives at `{api_base_url}/items`.
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("CAROUSEL_API_URL"), option_env!("CAROUSEL_LOG"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        Self { api_base_url, log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some(" http://localhost:3000/api/ "), Some("debug"));
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_or_bad_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
