// ABOUTME: Directory listing command for peptidion-cli
// ABOUTME: Filters the static coach and doctor listings by role and text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use peptidion::coaches::{find_coaches, RoleFilter};
use peptidion::errors::{AppError, AppResult};

use super::print_json;

pub fn list(role: &str, query: &str) -> AppResult<()> {
    let role = RoleFilter::parse(role)
        .ok_or_else(|| AppError::invalid_input(format!("Unknown role filter '{role}'")))?;
    print_json(&find_coaches(role, query))
}
