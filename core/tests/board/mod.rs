// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Board workflows against an in-memory gateway and a mock GraphQL server.

mod delete;
mod edit;
mod graphql;
mod grouping;
mod lifecycle;
