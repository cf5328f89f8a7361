// ABOUTME: Unified error type for Peptidion with stable error codes
// ABOUTME: Every fallible operation in the crate returns AppResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

//! # Error Handling
//!
//! One error struct carrying an [`ErrorCode`] and a human readable message.
//! Callers branch on the code; the message is for logs and the CLI.

use std::fmt;

use peptidion_core::models::GoalSetError;
use thiserror::Error;

/// Stable error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Caller supplied a value that failed validation
    InvalidInput,
    /// A required value was not supplied
    MissingRequiredField,
    /// Value could not be parsed
    InvalidFormat,
    /// Referenced entity does not exist
    ResourceNotFound,
    /// Reading from or writing to the key-value backend failed
    StorageError,
    /// A persisted slot holds JSON that does not decode
    CorruptState,
    /// The optional analysis endpoint failed
    ExternalServiceError,
    /// The feature needs a credential that is not configured
    FeatureDisabled,
    /// Environment configuration is invalid
    ConfigError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// Short machine readable name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::MissingRequiredField => "missing_required_field",
            Self::InvalidFormat => "invalid_format",
            Self::ResourceNotFound => "resource_not_found",
            Self::StorageError => "storage_error",
            Self::CorruptState => "corrupt_state",
            Self::ExternalServiceError => "external_service_error",
            Self::FeatureDisabled => "feature_disabled",
            Self::ConfigError => "config_error",
            Self::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application error
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error category
    pub code: ErrorCode,
    /// Human readable detail
    pub message: String,
}

/// Result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create an error with an explicit code
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Validation failure
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing entity
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Key-value backend failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Persisted slot that does not decode
    pub fn corrupt_state(key: &str, detail: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::CorruptState,
            format!("Stored value under '{key}' is malformed: {detail}"),
        )
    }

    /// Failure talking to an external service
    pub fn external_service(service: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{service}: {}", message.into()),
        )
    }

    /// Configuration failure
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorCode::InvalidFormat, format!("JSON error: {err}"))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::storage(format!("Database error: {err}"))
    }
}

impl From<GoalSetError> for AppError {
    fn from(err: GoalSetError) -> Self {
        Self::invalid_input(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(format!("I/O error: {err}"))
    }
}
