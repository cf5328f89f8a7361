// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging, in-memory store builders and a backend whose writes can be made to fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `peptidion`

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};

use async_trait::async_trait;
use peptidion::errors::{AppError, AppResult};
use peptidion::storage::{KeyValueStore, MemoryKeyValueStore};
use peptidion::store::{StoreOptions, UserStore};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Backend wrapper whose writes fail while `fail_writes` is set
pub struct FlakyStore {
    inner: MemoryKeyValueStore,
    fail_writes: AtomicBool,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryKeyValueStore::new(),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.inner.get(key).await.unwrap()
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::storage(format!("Simulated write failure for '{key}'")));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key).await
    }

    fn backend_info(&self) -> &'static str {
        "flaky-memory"
    }
}

/// Fresh store over an empty in-memory backend
pub async fn memory_store() -> UserStore {
    init_test_logging();
    UserStore::open(Arc::new(MemoryKeyValueStore::new()), StoreOptions::default())
        .await
        .unwrap()
}

/// Fresh store over a [`FlakyStore`], returning both
pub async fn flaky_store() -> (Arc<FlakyStore>, UserStore) {
    init_test_logging();
    let backend = Arc::new(FlakyStore::new());
    let store = UserStore::open(backend.clone(), StoreOptions::default())
        .await
        .unwrap();
    (backend, store)
}
