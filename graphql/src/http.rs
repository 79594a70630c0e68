// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with authentication and status handling.

use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::config::{AuthMethod, GraphQlConfig};
use crate::error::GraphQlError;

const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for GraphQL operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: GraphQlConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is empty or HTTP client creation fails.
    pub fn new(config: GraphQlConfig) -> Result<Self, GraphQlError> {
        if config.endpoint.trim().is_empty() {
            return Err(GraphQlError::Config("endpoint is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a POST request to the endpoint with authentication headers.
    pub fn build_request(&self) -> RequestBuilder {
        let req = self.client.post(&self.config.endpoint);

        match &self.config.auth {
            AuthMethod::ApiKey { key } => req.header(API_KEY_HEADER, key),
            AuthMethod::Bearer { token } => req.bearer_auth(token),
            AuthMethod::None => req,
        }
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, GraphQlError> {
        let resp = req.send().await?;

        match resp.status() {
            status if status.is_success() => Ok(resp),
            status @ (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
                let text = resp.text().await.unwrap_or_default();
                Err(GraphQlError::Auth(format!("{status}: {text}")))
            }
            status => {
                let text = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read response".to_string());
                Err(GraphQlError::Http(format!("{status}: {text}")))
            }
        }
    }
}
