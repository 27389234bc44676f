//! HTTP response types.
//!
//! [`HttpResponse`] keeps the body as raw text. Operations that promise JSON
//! call [`HttpResponse::json`]; operations that return the raw response hand
//! it to the caller untouched.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::HttpError;

/// Header carrying the total number of items in a collection.
const TOTAL_HEADER: &str = "x-wp-total";

/// Header carrying the total number of pages in a collection.
const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";

/// An HTTP response from the store API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.code, 200..=299)
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Total number of items in the collection, from `X-WP-Total`.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.header(TOTAL_HEADER)?.trim().parse().ok()
    }

    /// Total number of pages in the collection, from `X-WP-TotalPages`.
    #[must_use]
    pub fn total_pages(&self) -> Option<u64> {
        self.header(TOTAL_PAGES_HEADER)?.trim().parse().ok()
    }

    /// Parses the body as JSON.
    ///
    /// The status code is not consulted: an error status with a JSON body
    /// parses like any other response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Parse`] if the body is empty or not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, HttpError> {
        self.json_as()
    }

    /// Parses the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Parse`] if the body is not valid JSON or does not
    /// match the shape of `T`.
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_str(&self.body).map_err(|source| HttpError::Parse {
            code: self.code,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body.to_string())
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in [200, 201, 204, 299] {
            assert!(response(code, "").is_ok(), "Expected is_ok() for {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_other_codes() {
        for code in [100, 301, 400, 404, 500] {
            assert!(!response(code, "").is_ok(), "Expected !is_ok() for {code}");
        }
    }

    #[test]
    fn test_json_parses_error_status_body() {
        let resp = response(400, r#"{"code":"rest_invalid_param","data":{"status":400}}"#);
        assert_eq!(resp.json().unwrap()["code"], json!("rest_invalid_param"));
    }

    #[test]
    fn test_json_fails_on_empty_body() {
        let err = response(204, "").json().unwrap_err();
        assert!(matches!(err, HttpError::Parse { code: 204, .. }));
    }

    #[test]
    fn test_json_fails_on_html_body() {
        let err = response(500, "<html><body>Fatal error</body></html>")
            .json()
            .unwrap_err();
        assert!(matches!(err, HttpError::Parse { code: 500, .. }));
    }

    #[test]
    fn test_collection_headers() {
        let mut headers = HashMap::new();
        headers.insert(TOTAL_HEADER.to_string(), vec!["42".to_string()]);
        headers.insert(TOTAL_PAGES_HEADER.to_string(), vec!["5".to_string()]);
        let resp = HttpResponse::new(200, headers, "[]".to_string());

        assert_eq!(resp.total(), Some(42));
        assert_eq!(resp.total_pages(), Some(5));
        assert_eq!(resp.header("X-WP-Total"), Some("42"));
    }

    #[test]
    fn test_collection_headers_absent() {
        let resp = response(200, "[]");
        assert_eq!(resp.total(), None);
        assert_eq!(resp.total_pages(), None);
    }
}
