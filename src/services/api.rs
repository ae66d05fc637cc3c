//! Backend REST client
//!
//! Every request carries the bearer token from the `auth_token` cookie.
//! Non-2xx responses are turned into [`ApiError`] with the message pulled
//! out of the response body when the backend sends one. A 401 clears the
//! local session.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::config;
use crate::stores::auth_store;

/// Shown when the backend gives us nothing better
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Error returned by any backend call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status, None for transport failures
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self { status: None, message: message.into() }
    }

    /// Build from an HTTP status and the raw response body
    pub fn from_body(status: u16, body: &str) -> Self {
        Self {
            status: Some(status),
            message: extract_error_message(body).unwrap_or_else(|| GENERIC_ERROR.to_string()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(err: ApiError) -> Self {
        err.message
    }
}

/// Pull a human readable message out of an error body.
///
/// Accepts `{"message": "..."}`, `{"message": ["...", "..."]}` (validation
/// pipes), and `{"error": "..."}`.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    let from_field = |field: &str| match value.get(field)? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        _ => None,
    };

    from_field("message").or_else(|| from_field("error"))
}

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(alias = "data")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        Self { items, total, page, limit }
    }
}

/// Thin wrapper over gloo-net with auth and error handling
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self { base_url: config().api_url.clone() }
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match auth_store::get_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::get(&self.url(path)))
            .build()
            .map_err(|e| ApiError::transport(format!("Failed to build request: {}", e)))?;
        self.execute(request).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::transport(format!("Failed to encode request: {}", e)))?;
        self.execute(request).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::patch(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::transport(format!("Failed to encode request: {}", e)))?;
        self.execute(request).await
    }

    /// DELETE, ignoring any response body
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::delete(&self.url(path)))
            .build()
            .map_err(|e| ApiError::transport(format!("Failed to build request: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(format!("Request failed: {}", e)))?;
        self.check(response).await.map(|_| ())
    }

    /// POST without a body, ignoring any response body
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .build()
            .map_err(|e| ApiError::transport(format!("Failed to build request: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(format!("Request failed: {}", e)))?;
        self.check(response).await.map(|_| ())
    }

    /// Multipart upload; the browser sets the boundary header itself
    #[cfg(target_family = "wasm")]
    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, form: web_sys::FormData) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .body(form)
            .map_err(|e| ApiError::transport(format!("Failed to build upload: {}", e)))?;
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let url = request.url();
        let response = request.send().await.map_err(|e| {
            log::error!("Request to {} failed: {}", url, e);
            ApiError::transport(format!("Request failed: {}", e))
        })?;

        let response = self.check(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::transport(format!("Failed to parse response: {}", e)))
    }

    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_body(status, &body);

        if error.is_unauthorized() {
            log::warn!("Session rejected by backend, clearing auth token");
            auth_store::handle_unauthorized();
        } else {
            log::warn!("Backend returned {}: {}", status, error.message);
        }

        Err(error)
    }
}

/// Join base URL and path with exactly one slash
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `?page=..&limit=..` plus any extra encoded params
pub fn page_query(page: u32, limit: u32, extra: &[(&str, &str)]) -> String {
    let mut params = vec![format!("page={}", page), format!("limit={}", limit)];
    for (key, value) in extra {
        if !value.is_empty() {
            params.push(format!("{}={}", key, urlencoding::encode(value)));
        }
    }
    format!("?{}", params.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_string() {
        let body = r#"{"statusCode":400,"message":"Collection not found"}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some("Collection not found"));
    }

    #[test]
    fn test_extract_message_array() {
        let body = r#"{"message":["name must be longer","price must be a number"]}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("name must be longer, price must be a number")
        );
    }

    #[test]
    fn test_extract_error_field() {
        let body = r#"{"error":"Unauthorized"}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn test_fallback_message() {
        let err = ApiError::from_body(502, "<html>Bad gateway</html>");
        assert_eq!(err.message, GENERIC_ERROR);
        assert_eq!(err.status, Some(502));

        let err = ApiError::from_body(500, r#"{"message":""}"#);
        assert_eq!(err.message, GENERIC_ERROR);
    }

    #[test]
    fn test_status_helpers() {
        assert!(ApiError::from_body(401, "{}").is_unauthorized());
        assert!(ApiError::from_body(404, "{}").is_not_found());
        assert!(!ApiError::transport("offline").is_unauthorized());
    }

    #[test]
    fn test_page_accepts_data_alias() {
        let page: Page<u32> = serde_json::from_str(r#"{"data":[1,2],"total":5,"page":1,"limit":2}"#).unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total, 5);

        let page: Page<u32> = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_join_url_and_query() {
        assert_eq!(join_url("http://x/api/", "/art"), "http://x/api/art");
        assert_eq!(join_url("http://x/api", "art"), "http://x/api/art");
        assert_eq!(page_query(2, 20, &[]), "?page=2&limit=20");
        assert_eq!(
            page_query(1, 10, &[("q", "blue sky"), ("type", "")]),
            "?page=1&limit=10&q=blue%20sky"
        );
    }
}
