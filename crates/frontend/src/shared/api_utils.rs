//! API utilities for the checkout page
//!
//! Provides helper functions for constructing backend URLs.

use super::config::ApiConfig;

/// Get the base URL for API requests
///
/// Uses the configured base URL when set; otherwise the origin of the
/// current page (the backend serves the landing page itself).
///
/// # Returns
/// - Base URL without a trailing slash, like "https://shop.example.com"
/// - Empty string if nothing is configured and the window is not available
pub fn api_base(config: &ApiConfig) -> String {
    let configured = config.base_url.trim().trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a base and a path
///
/// # Arguments
/// * `base` - result of [`api_base`]
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("https://a.b/", "/api/order"), "https://a.b/api/order");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Full URL of a backend endpoint for the configured API
pub fn api_url(config: &ApiConfig, path: &str) -> String {
    join_url(&api_base(config), path)
}

/// Absolute URL of the current page, empty outside a browser
pub fn current_page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://a.b", "/api/order"), "https://a.b/api/order");
        assert_eq!(join_url("https://a.b/", "api/order"), "https://a.b/api/order");
        assert_eq!(join_url("", "/api/order"), "/api/order");
    }

    #[test]
    fn test_configured_base_wins() {
        let config = ApiConfig {
            base_url: "https://shop.example.com/".to_string(),
        };
        assert_eq!(api_base(&config), "https://shop.example.com");
        assert_eq!(
            api_url(&config, "/api/order"),
            "https://shop.example.com/api/order"
        );
    }
}
