// ABOUTME: Key-value storage abstraction for persisted JSON slots
// ABOUTME: Backend trait with SQLite and in-memory implementations and a URL factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use async_trait::async_trait;

use crate::errors::AppResult;

/// URL-based backend selection
pub mod factory;
/// In-memory backend
pub mod memory;
/// `SQLite` backend
pub mod sqlite;

pub use factory::{connect, detect_storage_type, StorageType};
pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

/// Device-local key-value store
///
/// Each key holds one complete JSON document. Writes replace the whole
/// value; there is no partial update or cross-key transaction.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`. Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Short backend description for logs
    fn backend_info(&self) -> &'static str;
}
