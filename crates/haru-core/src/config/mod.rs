//! Client configuration.
//!
//! Build- or environment-provisioned values the web app needs before it
//! can talk to the diary service. Only public endpoints belong here;
//! there are no client-held secrets.

use serde::{Deserialize, Serialize};

/// Default API endpoint for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default number of diary entries per list page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Client configuration resolved at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the diary API service.
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// Entries per page in the diary list.
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl ClientConfig {
    /// Builds a config from optional raw values, normalizing blanks away.
    #[must_use]
    pub fn from_values(api_base_url: Option<String>, page_size: Option<u32>) -> Self {
        Self {
            api_base_url: normalize_text_option(api_base_url),
            page_size: page_size.filter(|size| *size > 0),
        }
    }

    /// Reads `HARU_API_BASE_URL` and `HARU_PAGE_SIZE` from the process
    /// environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("HARU_API_BASE_URL").ok(),
            std::env::var("HARU_PAGE_SIZE")
                .ok()
                .and_then(|raw| raw.trim().parse().ok()),
        )
    }

    /// The API base URL to use, falling back to the local default.
    #[must_use]
    pub fn resolved_base_url(&self) -> String {
        normalize_text_option(self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    /// The page size to use, falling back to the default.
    #[must_use]
    pub fn resolved_page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// Drop optional text that is empty once trimmed.
pub(crate) fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ClientConfig::from_values(Some("   ".to_string()), Some(0));
        assert_eq!(config.resolved_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.resolved_page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn explicit_values_are_trimmed_and_kept() {
        let config =
            ClientConfig::from_values(Some(" https://diary.example.com ".to_string()), Some(25));
        assert_eq!(config.resolved_base_url(), "https://diary.example.com");
        assert_eq!(config.resolved_page_size(), 25);
    }

    #[test]
    fn config_deserializes_from_partial_json() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_base_url": "http://localhost:8000"}"#).unwrap();
        assert_eq!(config.page_size, None);
        assert_eq!(config.resolved_base_url(), "http://localhost:8000");
    }
}
