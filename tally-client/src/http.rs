//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::Bill;

use crate::{ClientConfig, ClientError, ClientResult, parse_bills_payload};

/// HTTP client for making network requests to the billing backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Bills API ==========

    /// Fetch the full bill list
    ///
    /// Accepts a bare JSON array or the standard envelope. A payload
    /// that is not a bill array surfaces as
    /// [`ClientError::InvalidResponse`] for the caller to present and
    /// retry; individually corrupt records are skipped.
    pub async fn fetch_bills(&self) -> ClientResult<Vec<Bill>> {
        let payload: Value = self.get("/api/bills").await?;
        let bills = parse_bills_payload(payload)?;
        tracing::debug!(count = bills.len(), "fetched bills");
        Ok(bills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_from_config_with_token() {
        let config = ClientConfig::new("http://localhost:4000/")
            .with_token("t0ken")
            .with_timeout(5);
        let client = HttpClient::new(&config);
        assert_eq!(client.token(), Some("t0ken"));
        assert_eq!(client.auth_header().as_deref(), Some("Bearer t0ken"));

        let replaced = client.with_token("other");
        assert_eq!(replaced.token(), Some("other"));
    }
}
