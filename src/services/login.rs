//! Login Service
//!
//! `POST /login` exchanging credentials for a session.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};

use super::client::{read_json, ApiClient};
use super::LoginApi;
use crate::error::ApiResult;
use crate::models::{Credentials, Session};

const LOGIN_PATH: &str = "login";

#[derive(Debug, Clone, Default)]
pub struct HttpLoginService {
    http: reqwest::Client,
}

impl HttpLoginService {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    fn login_request(&self, client: &ApiClient, credentials: &Credentials) -> RequestBuilder {
        // A stale token must not ride along with a fresh login
        let mut anonymous = client.clone();
        anonymous.clear_token();
        anonymous.request(&self.http, Method::POST, LOGIN_PATH).json(credentials)
    }
}

#[async_trait(?Send)]
impl LoginApi for HttpLoginService {
    async fn login(&self, client: &ApiClient, credentials: &Credentials) -> ApiResult<Session> {
        tracing::debug!(username = %credentials.username, "POST login");
        let response = self.login_request(client, credentials).send().await?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn test_login_request_is_unauthenticated() {
        let service = HttpLoginService::default();
        let client = ApiClient::new("http://localhost:3001/api").with_token("old");
        let credentials = Credentials { username: "root".into(), password: "salainen".into() };

        let request = service.login_request(&client, &credentials).build().unwrap();

        assert_eq!(request.url().path(), "/api/login");
        assert!(request.headers().get(AUTHORIZATION).is_none());
        let body: serde_json::Value =
            serde_json::from_slice(request.body().and_then(|b| b.as_bytes()).unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"username": "root", "password": "salainen"}));
    }
}
