// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// GraphQL endpoint authentication method.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(tag = "type")]
pub enum AuthMethod {
    /// No authentication.
    #[serde(rename = "none")]
    #[default]
    None,
    /// API key, sent in the `x-api-key` header.
    #[serde(rename = "api_key")]
    ApiKey {
        /// The API key.
        key: String,
    },
    /// Bearer token authentication (OAuth / user pool tokens).
    #[serde(rename = "bearer")]
    Bearer {
        /// Bearer token.
        token: String,
    },
}

/// GraphQL endpoint configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GraphQlConfig {
    /// Full URL of the GraphQL endpoint.
    pub endpoint: String,
    /// Authentication method.
    #[serde(default)]
    pub auth: AuthMethod,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("potluck-graphql/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GraphQlConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            auth: AuthMethod::default(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
