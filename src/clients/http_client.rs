//! HTTP client for store API communication.
//!
//! This module provides the [`HttpClient`] type, which turns an
//! [`HttpRequest`] into one authenticated call against the WooCommerce REST
//! API and hands back the [`HttpResponse`].

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{ConsumerKey, ConsumerSecret, StatusPolicy, StoreConfig};

/// Fixed path between the store URL and every endpoint.
pub const API_PREFIX: &str = "/wp-json/wc/v3";

/// Query parameter carrying the consumer key.
pub const CONSUMER_KEY_PARAM: &str = "consumer_key";

/// Query parameter carrying the consumer secret.
pub const CONSUMER_SECRET_PARAM: &str = "consumer_secret";

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Replacement for credential values in log output.
const REDACTED: &str = "*****";

/// HTTP client for making requests to the store API.
///
/// The client handles:
/// - URL construction from the store URL, [`API_PREFIX`] and the request path
/// - Query-string authentication with the consumer key and secret
/// - Default headers (`User-Agent`, `Accept`, `Content-Type`)
/// - Request logging with credentials redacted
/// - The configured [`StatusPolicy`]
///
/// Each call to [`HttpClient::request`] issues exactly one HTTP request.
/// There is no retry and no timeout beyond what `reqwest` applies.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Store base URL as configured (e.g., `https://shop.example.com/`).
    store_url: String,
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    status_policy: StatusPolicy,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &StoreConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}WooCommerce Store Client v{CLIENT_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        // Sent on every request, bodyless GETs included.
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            store_url: config.store_url().as_ref().to_string(),
            consumer_key: config.consumer_key().clone(),
            consumer_secret: config.consumer_secret().clone(),
            status_policy: config.status_policy(),
            default_headers,
        })
    }

    /// Returns the store base URL.
    #[must_use]
    pub fn store_url(&self) -> &str {
        &self.store_url
    }

    /// Returns the status policy applied to responses.
    #[must_use]
    pub const fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL (without query string) for an endpoint path.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        build_url(&self.store_url, path)
    }

    /// Sends an HTTP request to the store API.
    ///
    /// The consumer key and secret are appended to the query string of every
    /// request. The request is logged at `debug` level before it is sent,
    /// with both credential values redacted.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs or the body cannot be read (`Network`)
    /// - The status is rejected under [`StatusPolicy::Strict`] (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.endpoint_url(&request.path);
        let mut req_builder = self.client.request(request.http_method.as_reqwest(), &url);

        req_builder = req_builder.headers(self.build_headers(&request)?);

        if let Some(query) = &request.query {
            let caller_params: Vec<(&String, &String)> = query
                .iter()
                .filter(|(key, _)| !is_credential_param(key))
                .collect();
            req_builder = req_builder.query(&caller_params);
        }
        req_builder = req_builder.query(&[
            (CONSUMER_KEY_PARAM, self.consumer_key.as_ref()),
            (CONSUMER_SECRET_PARAM, self.consumer_secret.as_ref()),
        ]);

        let body_text = request.body.as_ref().map(serde_json::Value::to_string);
        if let Some(body) = &body_text {
            req_builder = req_builder.body(body.clone());
        }

        let req = req_builder.build()?;
        tracing::debug!(
            method = %request.http_method,
            url = %redact_credentials(req.url()),
            body = body_text.as_deref().unwrap_or(""),
            "Sending request to store API"
        );

        let res = self.client.execute(req).await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!(code, path = %request.path, "Received response from store API");

        if self.status_policy.rejects(code) {
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: body,
            }));
        }

        let response = HttpResponse::new(code, headers, body);
        if !response.is_ok() {
            tracing::warn!(
                code,
                path = %request.path,
                "Store API returned a non-success status; passing the response through"
            );
        }

        Ok(response)
    }

    /// Merges the default headers with the caller's extra headers.
    ///
    /// Each name holds exactly one value. Caller headers replace defaults,
    /// except `Content-Type`, which is always `application/json`.
    fn build_headers(&self, request: &HttpRequest) -> Result<HeaderMap, HttpError> {
        let extra = request
            .extra_headers
            .iter()
            .flatten()
            .filter(|(name, _)| !is_reserved_header(name));

        let mut headers = HeaderMap::new();
        for (name, value) in self.default_headers.iter().chain(extra) {
            let invalid = || InvalidHttpRequestError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Joins the store URL, [`API_PREFIX`] and an endpoint path.
///
/// The first `//` after the scheme separator is collapsed to `/`, which
/// removes the doubled slash a store URL with a trailing slash would
/// produce. Later occurrences are left alone.
///
/// ```rust
/// use store_client::clients::build_url;
///
/// assert_eq!(
///     build_url("https://shop.example.com/", "orders"),
///     "https://shop.example.com/wp-json/wc/v3/orders"
/// );
/// ```
#[must_use]
pub fn build_url(store_url: &str, path: &str) -> String {
    let mut url = format!("{store_url}{API_PREFIX}/{path}");
    let authority_start = url.find("://").map_or(0, |i| i + 3);
    if let Some(offset) = url[authority_start..].find("//") {
        url.remove(authority_start + offset);
    }
    url
}

fn is_credential_param(name: &str) -> bool {
    name == CONSUMER_KEY_PARAM || name == CONSUMER_SECRET_PARAM
}

fn is_reserved_header(name: &str) -> bool {
    name.eq_ignore_ascii_case(CONTENT_TYPE.as_str())
}

/// Renders a URL with the credential query values masked.
pub(crate) fn redact_credentials(url: &reqwest::Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if is_credential_param(&key) {
                REDACTED.to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    if !pairs.is_empty() {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreUrl;

    fn create_test_config(store_url: &str) -> StoreConfig {
        StoreConfig::builder()
            .store_url(StoreUrl::new(store_url).unwrap())
            .consumer_key(ConsumerKey::new("ck_test").unwrap())
            .consumer_secret(ConsumerSecret::new("cs_test").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_url_without_trailing_slash() {
        assert_eq!(
            build_url("https://shop.example.com", "orders"),
            "https://shop.example.com/wp-json/wc/v3/orders"
        );
    }

    #[test]
    fn test_build_url_collapses_trailing_slash() {
        let url = build_url("https://shop.example.com/", "orders/42");
        assert_eq!(url, "https://shop.example.com/wp-json/wc/v3/orders/42");
        assert!(!url["https://".len()..].contains("//"));
    }

    #[test]
    fn test_build_url_keeps_scheme_separator() {
        let url = build_url("http://localhost:8080/", "customers");
        assert!(url.starts_with("http://localhost:8080/wp-json"));
    }

    #[test]
    fn test_build_url_collapses_only_first_occurrence() {
        assert_eq!(
            build_url("https://shop.example.com/", "/orders"),
            "https://shop.example.com/wp-json/wc/v3//orders"
        );
    }

    #[test]
    fn test_build_url_with_subdirectory_install() {
        assert_eq!(
            build_url("https://example.com/shop/", "shipping/zones/3/methods"),
            "https://example.com/shop/wp-json/wc/v3/shipping/zones/3/methods"
        );
    }

    #[test]
    fn test_redact_credentials_masks_both_values() {
        let url = reqwest::Url::parse(
            "https://shop.example.com/wp-json/wc/v3/orders?status=pending&consumer_key=ck_live&consumer_secret=cs_live",
        )
        .unwrap();

        let redacted = redact_credentials(&url);

        assert!(!redacted.contains("ck_live"));
        assert!(!redacted.contains("cs_live"));
        assert!(redacted.contains("consumer_key=*****"));
        assert!(redacted.contains("consumer_secret=*****"));
        assert!(redacted.contains("status=pending"));
    }

    #[test]
    fn test_redact_credentials_without_query() {
        let url = reqwest::Url::parse("https://shop.example.com/wp-json/wc/v3/orders").unwrap();
        assert_eq!(
            redact_credentials(&url),
            "https://shop.example.com/wp-json/wc/v3/orders"
        );
    }

    #[test]
    fn test_default_headers() {
        let client = HttpClient::new(&create_test_config("https://shop.example.com")).unwrap();
        let headers = client.default_headers();

        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
        assert!(headers
            .get("User-Agent")
            .unwrap()
            .contains("WooCommerce Store Client v"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = StoreConfig::builder()
            .store_url(StoreUrl::new("https://shop.example.com").unwrap())
            .consumer_key(ConsumerKey::new("ck_test").unwrap())
            .consumer_secret(ConsumerSecret::new("cs_test").unwrap())
            .user_agent_prefix("OrderBot/2.1")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("OrderBot/2.1 | "));
    }

    #[test]
    fn test_endpoint_url_uses_configured_store() {
        let client = HttpClient::new(&create_test_config("https://shop.example.com/")).unwrap();
        assert_eq!(
            client.endpoint_url("customers"),
            "https://shop.example.com/wp-json/wc/v3/customers"
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
