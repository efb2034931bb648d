//! API Client Settings
//!
//! Base URL and bearer token, handed explicitly to every service call.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { base, token: None }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.set_token(token);
        self
    }

    /// Replace the bearer token; the previous one is dropped, not queued
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// Start a request, attaching `Authorization: Bearer <token>` when a
    /// token is set
    pub(crate) fn request(&self, http: &reqwest::Client, method: Method, path: &str) -> RequestBuilder {
        let builder = http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Turn a response into `T`, mapping non-2xx statuses to `ApiError::Status`
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status: status.as_u16(), body });
    }
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:3001/api/");
        assert_eq!(client.url("/notes"), "http://localhost:3001/api/notes");
        assert_eq!(client.url("notes/5"), "http://localhost:3001/api/notes/5");
    }

    #[test]
    fn test_request_without_token_has_no_auth_header() {
        let client = ApiClient::new("http://localhost:3001/api");
        let request = client
            .request(&reqwest::Client::new(), Method::GET, "notes")
            .build()
            .unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert_eq!(request.url().path(), "/api/notes");
    }

    #[test]
    fn test_token_overwrite_and_clear() {
        let mut client = ApiClient::new("http://h/api").with_token("first");
        client.set_token("second");
        assert_eq!(client.token(), Some("second"));

        let request = client
            .request(&reqwest::Client::new(), Method::PUT, "notes/1")
            .build()
            .unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer second");

        client.clear_token();
        assert_eq!(client.token(), None);
    }
}
