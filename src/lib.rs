// ABOUTME: Main library entry point for the Peptidion peptide education and tracking core
// ABOUTME: Catalog, recommendations, persistent user store, onboarding and photo analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

#![deny(unsafe_code)]

//! # Peptidion
//!
//! Core of a single-user peptide education and tracking app: a compiled-in
//! peptide catalog, a goal-based recommendation scorer, and a persistent
//! store for the user's profile, progress photos, body stats, protocol
//! cycles and favorites.
//!
//! ## Architecture
//!
//! - **Models**: plain data types, in the `peptidion-core` crate
//! - **Catalog / Recommendations**: pure, read-only
//! - **Storage**: `KeyValueStore` trait with `SQLite` and in-memory backends
//! - **Store**: `UserStore`, write-then-publish mutations over five JSON slots
//! - **Onboarding**: role selection and the two intake branches
//! - **Settings**: later profile edits, blank text clearing a field
//! - **Analysis**: optional photo rating through a multimodal chat endpoint
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use peptidion::catalog::Catalog;
//! use peptidion::config::AppConfig;
//! use peptidion::errors::AppResult;
//! use peptidion::recommendations::recommend_for_profile;
//! use peptidion::store::UserStore;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let backend = peptidion::storage::connect(&config.storage_url).await?;
//!     let store = UserStore::open(backend, config.store).await?;
//!
//!     for entry in recommend_for_profile(&store.profile(), &Catalog::builtin()) {
//!         println!("{}: {}", entry.name, entry.short_description);
//!     }
//!     Ok(())
//! }
//! ```

/// Optional photo rating client
pub mod analysis;

/// Compiled-in peptide catalog
pub mod catalog;

/// Coach and doctor directory
pub mod coaches;

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Tracing subscriber setup
pub mod logging;

/// Onboarding state machine
pub mod onboarding;

/// Level progress, avatars and journal helpers
pub mod progress;

/// Goal-based recommendation scorer
pub mod recommendations;

/// Profile edits from the settings form
pub mod settings;

/// Key-value storage backends
pub mod storage;

/// Profile and collection store
pub mod store;

/// Domain models
pub use peptidion_core::models;
