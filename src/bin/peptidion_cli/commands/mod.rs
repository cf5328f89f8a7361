// ABOUTME: Command implementations for peptidion-cli
// ABOUTME: Shared argument parsing and JSON output helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

pub mod catalog;
pub mod coaches;
pub mod journal;
pub mod onboarding;
pub mod profile;

use peptidion::errors::AppResult;
use peptidion::models::PeptideCategory;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Parse a persisted enum tag such as `fat_loss` or `3-6`
///
/// Hyphens are accepted in place of underscores.
pub fn parse_enum<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let tag = raw.trim().to_lowercase();
    serde_json::from_value(serde_json::Value::String(tag.clone()))
        .or_else(|_| serde_json::from_value(serde_json::Value::String(tag.replace('-', "_"))))
        .map_err(|_| format!("unknown value '{raw}'"))
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse a catalog category tag
pub fn parse_category(raw: &str) -> Result<PeptideCategory, String> {
    PeptideCategory::parse(raw.trim()).ok_or_else(|| format!("unknown category '{raw}'"))
}
