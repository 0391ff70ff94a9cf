//! Where the dashboard talks to and where photos are served from.

use crate::api::Endpoints;

/// Default API root of the article service.
pub const DEFAULT_API_BASE: &str = "http://localhost:8081/api";

/// Default host photo paths are resolved against.
pub const DEFAULT_MEDIA_HOST: &str = "http://localhost:8081";

/// Resolved service locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    api_base: String,
    media_host: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_MEDIA_HOST)
    }
}

impl AppConfig {
    /// Trailing slashes are dropped; blank values fall back to the defaults.
    pub fn new(api_base: &str, media_host: &str) -> Self {
        Self {
            api_base: normalize(api_base, DEFAULT_API_BASE),
            media_host: normalize(media_host, DEFAULT_MEDIA_HOST),
        }
    }

    /// Builds from optional overrides, e.g. `option_env!` values.
    pub fn from_overrides(api_base: Option<&str>, media_host: Option<&str>) -> Self {
        Self::new(
            api_base.unwrap_or(DEFAULT_API_BASE),
            media_host.unwrap_or(DEFAULT_MEDIA_HOST),
        )
    }

    /// API root.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Media host.
    pub fn media_host(&self) -> &str {
        &self.media_host
    }

    /// Endpoint URLs under [`AppConfig::api_base`].
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.api_base)
    }
}

fn normalize(value: &str, fallback: &str) -> String {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_service() {
        let config = AppConfig::default();
        assert_eq!(config.api_base(), "http://localhost:8081/api");
        assert_eq!(config.media_host(), "http://localhost:8081");
        assert_eq!(config.endpoints().collection(), "http://localhost:8081/api/articles");
    }

    #[test]
    fn overrides_are_normalized() {
        let config = AppConfig::from_overrides(Some("https://cms.example.com/api/"), Some("  "));
        assert_eq!(config.api_base(), "https://cms.example.com/api");
        assert_eq!(config.media_host(), DEFAULT_MEDIA_HOST);
    }
}
