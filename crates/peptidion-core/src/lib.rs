// ABOUTME: Core domain types for Peptidion shared across the workspace
// ABOUTME: Profile, catalog, journal and coach models with their persisted JSON shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

//! # Peptidion Core
//!
//! Plain data types with no I/O. Everything persisted by the store lives here
//! so that the on-disk JSON shape is defined in exactly one place.

/// Domain models
pub mod models;
