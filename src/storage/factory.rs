// ABOUTME: Storage backend factory with URL-based type detection
// ABOUTME: Maps sqlite: and memory: URLs to the matching KeyValueStore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use std::sync::Arc;

use tracing::info;

use super::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
use crate::errors::{AppError, AppResult};

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// `SQLite` file or in-memory database
    SQLite,
    /// Process-local map
    Memory,
}

/// Detect the backend from a storage URL
///
/// # Errors
///
/// Returns a config error for unsupported URL schemes
pub fn detect_storage_type(storage_url: &str) -> AppResult<StorageType> {
    if storage_url.starts_with("sqlite:") {
        Ok(StorageType::SQLite)
    } else if storage_url == "memory:" || storage_url == "memory" {
        Ok(StorageType::Memory)
    } else {
        Err(AppError::config(format!(
            "Unsupported storage URL format: {storage_url}. \
             Supported formats: sqlite:path/to/peptidion.db, sqlite::memory:, memory:"
        )))
    }
}

/// Open the backend named by `storage_url`
///
/// # Errors
///
/// Returns an error if the URL is unsupported or the backend fails to open
pub async fn connect(storage_url: &str) -> AppResult<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match detect_storage_type(storage_url)? {
        StorageType::SQLite => Arc::new(SqliteKeyValueStore::connect(storage_url).await?),
        StorageType::Memory => Arc::new(MemoryKeyValueStore::new()),
    };

    info!(backend = store.backend_info(), "Storage backend ready");
    Ok(store)
}
