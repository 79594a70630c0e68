// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - An in-memory gateway standing in for the remote backend
//! - Test data factories (fixtures)

mod fixtures;
mod gateway;

#[allow(unused_imports)]
pub use fixtures::{sample_entries, test_draft, test_entry};
pub use gateway::{Call, MemoryGateway};
