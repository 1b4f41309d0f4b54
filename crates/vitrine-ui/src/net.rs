//! Browser fetch helpers.
//!
//! Every request carries a cache-defeating `v=<timestamp>` parameter so
//! intermediaries never serve a stale fragment or catalog.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Errors that can occur when fetching page resources.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Request(String),

    /// Non-success HTTP status.
    #[error("HTTP {status} fetching {url}")]
    Http { status: u16, url: String },

    /// The response body could not be read as text.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The response body could not be decoded by the caller.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// No element with the expected mount id exists in the document.
    #[error("No mount element with id '{0}'")]
    MissingMount(String),

    /// Not running inside a browser window.
    #[error("No browser window available")]
    NoWindow,
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Append the uniqueness-forcing `v` parameter to `path`.
pub fn cache_busted(path: &str) -> String {
    bust_with(path, js_sys::Date::now() as u64)
}

fn bust_with(path: &str, token: u64) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}v={token}")
}

/// Fetch `url` and return the response body as text.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FetchError::Request(js_message(&e)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| FetchError::Request(js_message(&e)))?;

    if !response.ok() {
        return Err(FetchError::Http {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let body = response.text().map_err(|e| FetchError::Body(js_message(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| FetchError::Body(js_message(&e)))?;
    body.as_string()
        .ok_or_else(|| FetchError::Body("response body is not text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bust_appends_query_parameter() {
        assert_eq!(bust_with("header.html", 1234), "header.html?v=1234");
    }

    #[test]
    fn test_bust_extends_existing_query() {
        assert_eq!(
            bust_with("products.json?lang=pt", 99),
            "products.json?lang=pt&v=99"
        );
    }

    #[test]
    fn test_http_error_display_names_status_and_url() {
        let err = FetchError::Http {
            status: 404,
            url: "footer.html?v=1".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("footer.html"));
    }
}
