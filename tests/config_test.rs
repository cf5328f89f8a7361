// ABOUTME: Integration tests for environment configuration loading
// ABOUTME: Defaults, overrides and rejection of malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use std::collections::HashMap;
use std::env;

use peptidion::config::environment::default_storage_url;
use peptidion::config::AppConfig;
use peptidion::constants::env_config;
use peptidion::errors::ErrorCode;
use peptidion::logging::LogFormat;
use peptidion::store::UserStore;
use serial_test::serial;

fn load(vars: &[(&str, &str)]) -> peptidion::errors::AppResult<AppConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

const ALL_VARS: [&str; 6] = [
    env_config::STORAGE_URL,
    env_config::RECOVER_CORRUPT_STATE,
    env_config::ANALYSIS_BASE_URL,
    env_config::ANALYSIS_MODEL,
    env_config::ANALYSIS_TIMEOUT_SECS,
    env_config::LOG_FORMAT,
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
fn empty_environment_uses_defaults() {
    let config = load(&[]).unwrap();

    assert_eq!(config.storage_url, default_storage_url());
    assert!(config.storage_url.starts_with("sqlite:"));
    assert!(!config.store.recover_corrupt_state);
    assert_eq!(config.analysis.base_url, "https://api.openai.com/v1");
    assert_eq!(config.analysis.model, "gpt-4o");
    assert_eq!(config.analysis.timeout_secs, 60);
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn blank_values_count_as_unset() {
    let config = load(&[
        (env_config::STORAGE_URL, "  "),
        (env_config::ANALYSIS_TIMEOUT_SECS, ""),
    ])
    .unwrap();

    assert_eq!(config.storage_url, default_storage_url());
    assert_eq!(config.analysis.timeout_secs, 60);
}

#[test]
fn overrides_are_applied() {
    let config = load(&[
        (env_config::STORAGE_URL, "memory:"),
        (env_config::RECOVER_CORRUPT_STATE, "yes"),
        (env_config::ANALYSIS_BASE_URL, "http://localhost:11434/v1/"),
        (env_config::ANALYSIS_MODEL, "llava"),
        (env_config::ANALYSIS_TIMEOUT_SECS, "15"),
        (env_config::LOG_FORMAT, "json"),
    ])
    .unwrap();

    assert_eq!(config.storage_url, "memory:");
    assert_eq!(config.sqlite_path(), None);
    assert!(config.store.recover_corrupt_state);
    assert_eq!(config.analysis.base_url, "http://localhost:11434/v1");
    assert_eq!(config.analysis.model, "llava");
    assert_eq!(config.analysis.timeout_secs, 15);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn malformed_values_are_config_errors() {
    let cases = [
        (env_config::RECOVER_CORRUPT_STATE, "sometimes"),
        (env_config::ANALYSIS_TIMEOUT_SECS, "0"),
        (env_config::ANALYSIS_TIMEOUT_SECS, "ten"),
        (env_config::ANALYSIS_BASE_URL, "not a url"),
        (env_config::ANALYSIS_BASE_URL, "ftp://files.example.com"),
        (env_config::LOG_FORMAT, "xml"),
    ];

    for (key, value) in cases {
        let err = load(&[(key, value)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError, "{key}={value}");
        assert!(err.message.contains(key), "{key}={value}: {}", err.message);
    }
}

#[tokio::test]
#[serial]
async fn process_environment_drives_store_opening() {
    common::init_test_logging();
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("nested").join("peptidion.db");
    env::set_var(env_config::STORAGE_URL, format!("sqlite:{}", db.display()));
    env::set_var(env_config::RECOVER_CORRUPT_STATE, "true");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.sqlite_path().as_deref(), Some(db.as_path()));
    assert!(config.store.recover_corrupt_state);

    tokio::fs::create_dir_all(db.parent().unwrap()).await.unwrap();
    let backend = peptidion::storage::connect(&config.storage_url)
        .await
        .unwrap();
    assert_eq!(backend.backend_info(), "SQLite");
    let store = UserStore::open(backend, config.store).await.unwrap();
    assert!(store.toggle_favorite("bpc-157").await.unwrap());
    assert!(db.exists());
}

#[test]
#[serial]
fn process_environment_rejects_bad_log_format() {
    clear_env();
    env::set_var(env_config::LOG_FORMAT, "yaml");

    let err = AppConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigError);
}
