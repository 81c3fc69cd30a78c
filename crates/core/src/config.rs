//! API endpoint configuration.

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "STOCKDECK_API_URL";

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Where the backend lives.
///
/// Paths handed to [`ApiConfig::url`] are joined verbatim onto the base, so
/// the base carries no trailing slash and paths carry their leading (and,
/// per the backend's routing convention, trailing) slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the base URL from `STOCKDECK_API_URL`, warning and falling back
    /// to a local dev default when unset.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| {
            tracing::warn!("{API_URL_ENV} not set; using {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path such as `/products/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
