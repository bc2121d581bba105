//! API client for the chirper backend.
//!
//! This module provides the `ApiClient` struct for the sign-in and sign-up
//! endpoints and for looking up the user behind an api key.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::models::{ApiKeyResponse, Credentials, RegistrationRequest, UserMeResponse, UserProfile};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Path of the login endpoint, relative to the base URL
const LOGIN_PATH: &str = "/api/login";

/// Path of the registration endpoint, relative to the base URL
const REGISTER_PATH: &str = "/api/register";

/// Path of the current-user endpoint, relative to the base URL
const USER_ME_PATH: &str = "/api/users/me";

/// Header the backend reads the api key from
pub const API_KEY_HEADER: &str = "api-key";

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the chirper backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client rooted at `base_url` (e.g. `http://localhost`)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange email and password for an api key
    pub async fn login(&self, credentials: &Credentials) -> Result<ApiKeyResponse> {
        debug!(email = %credentials.email, "Sending login request");
        self.post_json(LOGIN_PATH, credentials)
            .await
            .context("Login request failed")
    }

    /// Create an account and receive its api key
    pub async fn register(&self, request: &RegistrationRequest) -> Result<ApiKeyResponse> {
        debug!(email = %request.email, "Sending registration request");
        self.post_json(REGISTER_PATH, request)
            .await
            .context("Registration request failed")
    }

    /// Fetch the profile of the user owning `api_key`
    pub async fn current_user(&self, api_key: &str) -> Result<UserProfile> {
        let url = self.url(USER_ME_PATH);

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;
        let me: UserMeResponse = Self::parse_json(response, &url).await?;
        Ok(me.user)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn parse_json<T: DeserializeOwned>(response: reqwest::Response, url: &str) -> Result<T> {
        let text = response
            .text()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to read response body from {}", url))?;

        serde_json::from_str(&text).map_err(|e| {
            warn!(url = url, error = %e, "Unusable JSON response");
            anyhow::Error::from(ApiError::InvalidResponse(e.to_string()))
        })
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = Self::check_response(response).await?;
        Self::parse_json(response, &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header as header_eq, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url(LOGIN_PATH), "http://localhost:8080/api/login");
    }

    #[tokio::test]
    async fn test_login_posts_json_credentials() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(header_eq("accept", "application/json"))
            .and(header_eq("content-type", "application/json"))
            .and(body_json(serde_json::json!({"email": "a@b.c", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"apikey": "KEY"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).unwrap();
        let resp = client.login(&Credentials::new("a@b.c", "pw")).await.unwrap();
        assert_eq!(resp.apikey, "KEY");
    }

    #[tokio::test]
    async fn test_login_incorrect_email_maps_to_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "result": "false",
                "error_type": "HTTPException",
                "error_message": "Incorrect email"
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).unwrap();
        let err = client.login(&Credentials::new("x@y.z", "pw")).await.unwrap_err();
        match err.downcast_ref::<ApiError>() {
            Some(ApiError::NotFound(msg)) => assert_eq!(msg, "Incorrect email"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_posts_three_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/register"))
            .and(body_json(serde_json::json!({
                "email": "a@b.c",
                "password": "pw",
                "password_repeat": "pw"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"apikey": "NEW"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).unwrap();
        let resp = client
            .register(&RegistrationRequest::new("a@b.c", "pw", "pw"))
            .await
            .unwrap();
        assert_eq!(resp.apikey, "NEW");
    }

    #[tokio::test]
    async fn test_register_invalid_email_maps_to_validation() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/register"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "result": "false",
                "error_type": "value_error",
                "error_message": "value is not a valid email address"
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).unwrap();
        let err = client
            .register(&RegistrationRequest::new("example", "1", "1"))
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<ApiError>(), Some(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_login_response_without_apikey_is_invalid() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": "true"})))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).unwrap();
        let err = client.login(&Credentials::new("a@b.c", "pw")).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<ApiError>(), Some(ApiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_current_user_sends_api_key_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .and(header_eq("api-key", "KEY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": "true",
                "user": {"id": 1, "name": "alice", "followers": [], "following": [{"id": 2, "name": "bob"}]}
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).unwrap();
        let user = client.current_user("KEY").await.unwrap();
        assert_eq!(user.name, "alice");
        assert_eq!(user.following_count(), 1);
    }
}
