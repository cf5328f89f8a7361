// ABOUTME: Integration tests for profile settings edits
// ABOUTME: Blank text clears, omitted fields stay, goals and role are replaced
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use peptidion::errors::ErrorCode;
use peptidion::models::{UserGoal, UserRole};
use peptidion::settings::{self, SettingsEdits};

#[tokio::test]
async fn professional_fields_can_be_set_then_cleared() {
    let store = common::memory_store().await;

    settings::apply(
        &store,
        SettingsEdits {
            role: Some(UserRole::Coach),
            specialty: Some("Muscle Gain & Performance".to_owned()),
            bio: Some("Ten years of strength coaching".to_owned()),
            hourly_rate: Some("120".to_owned()),
            instagram: Some(" @liftwithjo ".to_owned()),
            ..SettingsEdits::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    let profile = settings::apply(
        &store,
        SettingsEdits {
            bio: Some("   ".to_owned()),
            hourly_rate: Some(String::new()),
            linkedin: Some("jo-lifts".to_owned()),
            ..SettingsEdits::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(profile.role, UserRole::Coach);
    assert_eq!(profile.specialty.as_deref(), Some("Muscle Gain & Performance"));
    assert_eq!(profile.bio, None);
    assert_eq!(profile.hourly_rate, None);
    assert_eq!(profile.instagram_handle.as_deref(), Some("@liftwithjo"));
    assert_eq!(profile.linkedin_handle.as_deref(), Some("jo-lifts"));
    assert_eq!(store.profile(), profile);
}

#[tokio::test]
async fn goals_are_replaced_and_duplicates_collapse() {
    let store = common::memory_store().await;
    assert!(store.profile().goals.is_empty());

    let profile = settings::apply(
        &store,
        SettingsEdits {
            goals: vec![UserGoal::Recovery, UserGoal::Recovery, UserGoal::Skin],
            ..SettingsEdits::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    let goals: Vec<_> = profile.goals.iter().collect();
    assert_eq!(goals, vec![UserGoal::Recovery, UserGoal::Skin]);

    let profile = settings::apply(
        &store,
        SettingsEdits {
            goals: vec![UserGoal::Longevity],
            ..SettingsEdits::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    let goals: Vec<_> = profile.goals.iter().collect();
    assert_eq!(goals, vec![UserGoal::Longevity]);
}

#[tokio::test]
async fn invalid_edits_write_nothing() {
    let store = common::memory_store().await;
    let before = store.profile();

    let cases = [
        SettingsEdits {
            goals: vec![
                UserGoal::FatLoss,
                UserGoal::Energy,
                UserGoal::Skin,
                UserGoal::Cognitive,
            ],
            ..SettingsEdits::default()
        },
        SettingsEdits {
            bio: Some("Will be discarded".to_owned()),
            hourly_rate: Some("-5".to_owned()),
            ..SettingsEdits::default()
        },
        SettingsEdits {
            scheduling_link: Some("javascript:alert(1)".to_owned()),
            ..SettingsEdits::default()
        },
    ];

    for edits in cases {
        let err = settings::apply(&store, edits).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
    assert_eq!(store.profile(), before);
}

#[tokio::test]
async fn empty_edits_report_nothing_to_update() {
    let (backend, store) = common::flaky_store().await;
    backend.set_fail_writes(true);

    let outcome = settings::apply(&store, SettingsEdits::default())
        .await
        .unwrap();
    assert!(outcome.is_none());
}
