// ABOUTME: Integration tests for level progress, avatars and journal helpers
// ABOUTME: Uses the store so helpers run over real persisted collections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use chrono::{Duration, Utc};
use peptidion::models::{BodyStat, FieldUpdate, Gender, PhotoType, ProfilePatch};
use peptidion::progress::{
    avatar_url, filter_photos, latest_weight, profile_avatar_url, LevelProgress,
};
use peptidion::store::PhotoDraft;

fn stat(days_ago: i64, weight: Option<f64>) -> BodyStat {
    BodyStat {
        date: Utc::now() - Duration::days(days_ago),
        weight,
        body_fat: Some(18.0),
        muscle_mass: None,
        notes: None,
    }
}

#[tokio::test]
async fn latest_weight_skips_entries_without_weight() {
    let store = common::memory_store().await;
    assert_eq!(latest_weight(&store.body_stats()), None);

    store.add_body_stat(stat(10, Some(84.0))).await.unwrap();
    store.add_body_stat(stat(3, Some(82.4))).await.unwrap();
    store.add_body_stat(stat(0, None)).await.unwrap();

    assert_eq!(latest_weight(&store.body_stats()), Some(82.4));
}

#[tokio::test]
async fn photos_filter_by_type_newest_first() {
    let store = common::memory_store().await;
    for (uri, photo_type) in [
        ("front-1.jpg", PhotoType::Front),
        ("face-1.jpg", PhotoType::Face),
        ("front-2.jpg", PhotoType::Front),
    ] {
        store
            .record_photo(PhotoDraft::new(uri, photo_type))
            .await
            .unwrap();
    }

    let photos = store.photos();
    let fronts: Vec<_> = filter_photos(&photos, Some(PhotoType::Front))
        .iter()
        .map(|p| p.uri.as_str())
        .collect();
    assert_eq!(fronts, vec!["front-2.jpg", "front-1.jpg"]);
    assert_eq!(filter_photos(&photos, None).len(), 3);
    assert!(filter_photos(&photos, Some(PhotoType::Back)).is_empty());
}

#[tokio::test]
async fn profile_drives_level_and_avatar() {
    let store = common::memory_store().await;
    let profile = store
        .update_profile(ProfilePatch {
            level: FieldUpdate::Set(4),
            experience_points: FieldUpdate::Set(370),
            gender: FieldUpdate::Set(Gender::Female),
            ..ProfilePatch::default()
        })
        .await
        .unwrap();

    let progress = LevelProgress::for_profile(&profile);
    assert_eq!(progress.level, 4);
    assert_eq!(progress.next_threshold(), 400);
    assert!((progress.fraction() - 0.7).abs() < 1e-9);

    assert_eq!(
        profile_avatar_url(&profile),
        "https://api.dicebear.com/7.x/avataaars/svg?seed=female4&backgroundColor=d1f4f9"
    );
}

#[test]
fn avatar_background_changes_per_level_until_five() {
    let urls: Vec<_> = (1..=6).map(|level| avatar_url(Gender::Other, level)).collect();
    assert!(urls[0].ends_with("backgroundColor=d1d4f9"));
    assert!(urls[4].ends_with("backgroundColor=ffdfbf"));
    assert!(urls[5].ends_with("backgroundColor=ffdfbf"));
    assert!(urls[5].contains("seed=other6"));
}
