// ABOUTME: Tracing subscriber setup for binaries
// ABOUTME: EnvFilter from RUST_LOG with either a human or JSON formatter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::env_config;
use crate::errors::{AppError, AppResult};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Parse `pretty` or `json` (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns a config error for any other value
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "{} must be 'pretty' or 'json', got '{other}'",
                env_config::LOG_FORMAT
            ))),
        }
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies to this crate
/// and `warn` to everything else. Installing twice is a no-op.
pub fn init(format: LogFormat, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("peptidion={default_level},warn")));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!(LogFormat::parse("JSON").ok(), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse(" pretty ").ok(), Some(LogFormat::Pretty));
        assert!(LogFormat::parse("xml").is_err());
    }
}
