// ABOUTME: Profile commands for peptidion-cli
// ABOUTME: Shows the profile with level progress and applies settings edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use peptidion::errors::AppResult;
use peptidion::progress::{profile_avatar_url, LevelProgress};
use peptidion::settings::{self, SettingsEdits};
use peptidion::store::UserStore;
use serde_json::json;

use super::print_json;

pub fn show(store: &UserStore) -> AppResult<()> {
    let profile = store.profile();
    let progress = LevelProgress::for_profile(&profile);

    print_json(&json!({
        "profile": profile,
        "progress": {
            "level": progress.level,
            "experiencePoints": progress.experience_points,
            "fraction": progress.fraction(),
            "nextThreshold": progress.next_threshold(),
        },
        "avatarUrl": profile_avatar_url(&profile),
        "analysisEnabled": profile.analysis_credential().is_some(),
    }))
}

pub async fn set(store: &UserStore, edits: SettingsEdits) -> AppResult<()> {
    if settings::apply(store, edits).await?.is_none() {
        println!("Nothing to update");
        return Ok(());
    }
    show(store)
}
