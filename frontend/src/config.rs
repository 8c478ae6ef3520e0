//! Build-time configuration for the client.
//!
//! A wasm bundle has no process environment at runtime, so overrides are read
//! with `option_env!` when the crate is compiled.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Prefix for every API path, without a trailing slash.
    pub api_base_url: String,
    /// An `EnvFilter` directive string, e.g. `"info"` or `"expense_tracker_frontend=debug"`.
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("EXPENSE_API_BASE_URL"),
            option_env!("EXPENSE_LOG_FILTER"),
        )
    }

    fn from_values(api_base_url: Option<&str>, log_filter: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let log_filter = log_filter
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
            .to_string();

        Self {
            api_base_url,
            log_filter,
        }
    }

    /// Joins `path` onto the base address.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
