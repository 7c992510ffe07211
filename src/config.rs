//! Build-time Configuration
//!
//! Values are baked in when the bundle is built (`TRAVANA_API_BASE_URL`,
//! `TRAVANA_LOG_LEVEL`).

use log::LevelFilter;
use travana_core::config::DEFAULT_API_BASE_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: &'static str,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("TRAVANA_API_BASE_URL"), option_env!("TRAVANA_LOG_LEVEL"))
    }

    fn resolve(base_url: Option<&'static str>, log_level: Option<&'static str>) -> Self {
        Self {
            api_base_url: base_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .unwrap_or(DEFAULT_API_BASE_URL),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(LevelFilter::Info),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::resolve(None, None);
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_blank_url_and_bad_level_fall_back() {
        let config = AppConfig::resolve(Some("  "), Some("chatty"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, LevelFilter::Info);

        let config = AppConfig::resolve(Some("https://api.travana.app"), Some("debug"));
        assert_eq!(config.api_base_url, "https://api.travana.app");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }
}
