// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use potluck_graphql::GraphQlConfig;

/// The name of the potluck application.
pub const APP_NAME: &str = "potluck";

/// Configuration for the potluck application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// The remote GraphQL endpoint holding the entries.
    pub gateway: GraphQlConfig,

    /// How entries are laid out when listed.
    #[serde(default)]
    pub layout: Layout,
}

/// How the list of entries is displayed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One section per category; entries without a known category are hidden.
    #[default]
    Grouped,

    /// Every entry, in server order.
    Flat,
}
