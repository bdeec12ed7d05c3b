//! Marketplace REST client
//!
//! Thin JSON-over-HTTP client for the marketplace backend. Requests carry
//! the session's bearer token when one is available. Non-success responses
//! are turned into [`ApiError::Status`] with the body's `message`, if any.

use super::error::ApiError;
use super::types::{CreateAgentRequest, ErrorBody, LoginRequest, LoginResponse};
use crate::config::ApiConfig;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Listing endpoints used by the create-agent form
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// Create a new agent listing
    ///
    /// Any 2xx response counts as success; its body is not inspected.
    async fn create_agent(
        &self,
        token: Option<&str>,
        request: &CreateAgentRequest,
    ) -> Result<(), ApiError>;
}

/// Authentication endpoints used by the sign-in form
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a user record and bearer token
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

/// HTTP client for the marketplace API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration
    ///
    /// # Errors
    /// * Returns `ApiError::Transport` if the HTTP client cannot be constructed
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Build a client with default HTTP settings against `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POST `body` as JSON to `path` and return the successful response
    async fn post_json<B>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(url = %url, authenticated = token.is_some(), "POST request");

        let mut request = self.http.post(&url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);

            tracing::warn!(
                url = %url,
                status_code = status_code,
                message = ?message,
                "Marketplace API returned error status"
            );

            return Err(ApiError::Status {
                status: status_code,
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl ListingApi for ApiClient {
    async fn create_agent(
        &self,
        token: Option<&str>,
        request: &CreateAgentRequest,
    ) -> Result<(), ApiError> {
        self.post_json("/agents", token, request).await?;
        tracing::debug!(name = %request.name, "Agent listing created");
        Ok(())
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self.post_json("/auth/login", None, request).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use serial_test::serial;

    fn sample_request() -> CreateAgentRequest {
        CreateAgentRequest {
            name: "Bot".to_string(),
            description: "desc".to_string(),
            category: "cat".to_string(),
            price: 9.99,
            subscription_price: Some(4.5),
        }
    }

    #[test]
    fn test_url_joining() {
        let client = ApiClient::with_base_url("http://localhost:8000/");
        assert_eq!(client.url("/agents"), "http://localhost:8000/agents");

        let client = ApiClient::with_base_url("http://localhost:8000/api");
        assert_eq!(client.url("agents"), "http://localhost:8000/api/agents");
    }

    #[tokio::test]
    #[serial]
    async fn test_create_agent_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/agents")
            .match_header("authorization", "Bearer tok-1")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "name": "Bot",
                "description": "desc",
                "category": "cat",
                "price": 9.99,
                "subscription_price": 4.5
            })))
            .with_status(201)
            .with_body(r#"{"id": "agent-1"}"#)
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url());
        let result = client.create_agent(Some("tok-1"), &sample_request()).await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    #[serial]
    async fn test_create_agent_without_token_sends_no_auth_header() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/agents")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url());
        let result = client.create_agent(None, &sample_request()).await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    #[serial]
    async fn test_create_agent_error_message() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/agents")
            .with_status(422)
            .with_body(r#"{"message": "Category is not allowed"}"#)
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url());
        let err = client
            .create_agent(Some("tok-1"), &sample_request())
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, ApiError::Status { status: 422, .. }));
        assert_eq!(err.user_message(), Some("Category is not allowed"));
    }

    #[tokio::test]
    #[serial]
    async fn test_create_agent_error_without_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/agents")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url());
        let err = client
            .create_agent(Some("tok-1"), &sample_request())
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert_eq!(err.user_message(), None);
    }

    #[tokio::test]
    #[serial]
    async fn test_login_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login")
            .match_body(Matcher::Json(json!({
                "email": "ada@example.com",
                "password": "hunter2"
            })))
            .with_status(200)
            .with_body(
                r#"{
                    "user": {"id": "u-1", "name": "Ada", "email": "ada@example.com", "token_balance": 250},
                    "token": "tok-1"
                }"#,
            )
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url());
        let response = client
            .login(&LoginRequest {
                email: "ada@example.com".to_string(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.user.id, "u-1");
        assert_eq!(response.token, "tok-1");
    }

    #[tokio::test]
    #[serial]
    async fn test_login_invalid_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login")
            .with_status(200)
            .with_body("This is not JSON")
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url());
        let err = client
            .login(&LoginRequest {
                email: "ada@example.com".to_string(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) is not expected to run an HTTP server
        let client = ApiClient::with_base_url("http://127.0.0.1:9");
        let err = client
            .create_agent(None, &sample_request())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.user_message(), None);
    }
}
