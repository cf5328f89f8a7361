// ABOUTME: Configuration module root
// ABOUTME: Environment-driven settings for storage, analysis and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

/// Settings read from environment variables
pub mod environment;

pub use environment::AppConfig;
