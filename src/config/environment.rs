// ABOUTME: Environment variable configuration for the store, analysis client and logging
// ABOUTME: Missing variables fall back to defaults; malformed ones are config errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use std::env;
use std::path::PathBuf;

use crate::analysis::AnalysisConfig;
use crate::constants::env_config;
use crate::errors::{AppError, AppResult};
use crate::logging::LogFormat;
use crate::store::StoreOptions;

/// File name of the default database
const DEFAULT_DATABASE_FILE: &str = "peptidion.db";

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Key-value backend URL (`sqlite:...` or `memory:`)
    pub storage_url: String,
    /// Store open behavior
    pub store: StoreOptions,
    /// Photo analysis endpoint
    pub analysis: AnalysisConfig,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_url: default_storage_url(),
            store: StoreOptions::default(),
            analysis: AnalysisConfig::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load from the process environment
    ///
    /// # Errors
    ///
    /// Returns a config error if any variable holds an invalid value
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment
    ///
    /// # Errors
    ///
    /// Returns a config error if any value is invalid
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AnalysisConfig::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let storage_url = get(env_config::STORAGE_URL).unwrap_or_else(default_storage_url);

        let recover_corrupt_state = get(env_config::RECOVER_CORRUPT_STATE)
            .map(|raw| parse_bool(env_config::RECOVER_CORRUPT_STATE, &raw))
            .transpose()?
            .unwrap_or(false);

        let timeout_secs = get(env_config::ANALYSIS_TIMEOUT_SECS)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| {
                        AppError::config(format!(
                            "{} must be a positive integer, got '{raw}'",
                            env_config::ANALYSIS_TIMEOUT_SECS
                        ))
                    })
            })
            .transpose()?
            .unwrap_or(defaults.timeout_secs);

        let base_url = match get(env_config::ANALYSIS_BASE_URL) {
            Some(raw) => validate_base_url(&raw)?,
            None => defaults.base_url,
        };

        let log_format = get(env_config::LOG_FORMAT)
            .map(|raw| LogFormat::parse(&raw))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            storage_url,
            store: StoreOptions {
                recover_corrupt_state,
            },
            analysis: AnalysisConfig {
                base_url,
                model: get(env_config::ANALYSIS_MODEL).unwrap_or(defaults.model),
                timeout_secs,
            },
            log_format,
        })
    }

    /// Filesystem path of a file-backed `SQLite` store
    #[must_use]
    pub fn sqlite_path(&self) -> Option<PathBuf> {
        let path = self.storage_url.strip_prefix("sqlite:")?;
        let path = path.strip_prefix("//").unwrap_or(path);
        let path = path.split('?').next().unwrap_or(path);
        if path.is_empty() || path.contains(":memory:") {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }
}

/// `sqlite:` URL under the platform data directory, or `./data` without one
#[must_use]
pub fn default_storage_url() -> String {
    let dir = dirs::data_dir().map_or_else(|| PathBuf::from("./data"), |d| d.join("peptidion"));
    format!("sqlite:{}", dir.join(DEFAULT_DATABASE_FILE).display())
}

fn parse_bool(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::config(format!(
            "{key} must be a boolean, got '{raw}'"
        ))),
    }
}

fn validate_base_url(raw: &str) -> AppResult<String> {
    let url = url::Url::parse(raw.trim()).map_err(|e| {
        AppError::config(format!(
            "{} is not a valid URL: {e}",
            env_config::ANALYSIS_BASE_URL
        ))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config(format!(
            "{} must use http or https",
            env_config::ANALYSIS_BASE_URL
        )));
    }
    Ok(url.as_str().trim_end_matches('/').to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_path_extraction() {
        let config = AppConfig {
            storage_url: "sqlite:./data/peptidion.db?mode=rwc".to_owned(),
            ..AppConfig::default()
        };
        assert_eq!(config.sqlite_path(), Some(PathBuf::from("./data/peptidion.db")));

        let memory = AppConfig {
            storage_url: "sqlite::memory:".to_owned(),
            ..AppConfig::default()
        };
        assert_eq!(memory.sqlite_path(), None);
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        assert_eq!(
            validate_base_url("http://localhost:8080/v1/").ok().as_deref(),
            Some("http://localhost:8080/v1")
        );
        assert!(validate_base_url("ftp://example.com").is_err());
    }
}
