//! HTTP client for the Atrium auth server.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};

/// Request body for password sign-in.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Response body of a successful sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Session token.
    pub token: String,
}

/// HTTP client for the auth server.
///
/// Cheaply cloneable.
///
/// # Examples
///
/// ```rust,ignore
/// let client = AuthClient::new("http://127.0.0.1:8080")?;
/// let token = client.login("ada@example.com", "hunter2").await?;
/// let user = service.sign_in(&token)?;
/// ```
#[derive(Clone, Debug)]
pub struct AuthClient {
    base_url: String,
    http: Client,
}

impl AuthClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self { base_url, http })
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks if the server is reachable and healthy.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Network`] if the request fails.
    pub async fn health(&self) -> Result<bool> {
        let res = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(res.status().is_success())
    }

    /// Exchanges email and password for a session token.
    ///
    /// # Errors
    ///
    /// * [`SessionError::Network`] - Network request failed
    /// * [`SessionError::Server`] - Credentials rejected or server failure
    /// * [`SessionError::InvalidResponse`] - Response could not be parsed
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let res = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(SessionError::Server {
                status: res.status().as_u16(),
                message: res.text().await.unwrap_or_default(),
            });
        }

        let body: LoginResponse = res
            .json()
            .await
            .map_err(|e| SessionError::InvalidResponse(e.to_string()))?;

        tracing::debug!(email, "Received session token");
        Ok(body.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_returns_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(serde_json::json!({
                "email": "ada@example.com",
                "password": "pw",
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": "a.b.c" })),
            )
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(mock_server.uri()).unwrap();
        let token = client.login("ada@example.com", "pw").await.unwrap();

        assert_eq!(token, "a.b.c");
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(format!("{}/", mock_server.uri())).unwrap();
        let err = client.login("ada@example.com", "nope").await.unwrap_err();

        match err {
            SessionError::Server { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "bad credentials");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_login_invalid_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(mock_server.uri()).unwrap();
        let err = client.login("ada@example.com", "pw").await.unwrap_err();

        assert!(matches!(err, SessionError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_health() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(mock_server.uri()).unwrap();
        assert!(!client.health().await.unwrap());
    }
}
