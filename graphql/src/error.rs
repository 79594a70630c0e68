// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// GraphQL client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum GraphQlError {
    /// HTTP layer error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Authentication rejected by the endpoint.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(String),

    /// The server answered with a non-empty `errors` list.
    #[error("GraphQL error: {}", .0.join("; "))]
    Graphql(Vec<String>),

    /// Invalid response from server.
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for GraphQlError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Json(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<serde_json::Error> for GraphQlError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
