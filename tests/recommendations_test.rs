// ABOUTME: Integration tests for the goal-based recommendation scorer
// ABOUTME: Weighting, zero-score filtering, tie order and the three-entry cut
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

use peptidion::catalog::Catalog;
use peptidion::models::{
    CatalogEntry, ExperienceLevel, GoalSet, PeptideCategory, Profile, UserGoal,
};
use peptidion::recommendations::{rank, recommend, recommend_for_profile, score_entry};

const fn entry(
    id: &'static str,
    goals: &'static [UserGoal],
    levels: &'static [ExperienceLevel],
) -> CatalogEntry {
    CatalogEntry {
        id,
        name: id,
        category: PeptideCategory::FatLoss,
        short_description: "",
        full_description: "",
        benefits: &[],
        risks: &[],
        dosage_example: "",
        cycle_length: "",
        experience_levels: levels,
        goals,
    }
}

static WEIGHTED: [CatalogEntry; 3] = [
    entry(
        "b",
        &[UserGoal::FatLoss],
        &[ExperienceLevel::Advanced],
    ),
    entry(
        "a",
        &[UserGoal::FatLoss, UserGoal::Recovery],
        &[ExperienceLevel::Beginner, ExperienceLevel::Intermediate],
    ),
    entry("unrelated", &[UserGoal::Skin], &[ExperienceLevel::Advanced]),
];

static TIED: [CatalogEntry; 5] = [
    entry("first", &[UserGoal::Energy], &[]),
    entry("second", &[UserGoal::Energy], &[]),
    entry("third", &[UserGoal::Energy], &[]),
    entry("fourth", &[UserGoal::Energy], &[]),
    entry("best", &[UserGoal::Energy, UserGoal::Cognitive], &[]),
];

fn goals(list: &[UserGoal]) -> GoalSet {
    GoalSet::try_from(list.to_vec()).unwrap()
}

#[test]
fn goal_and_level_points_add_up() {
    let fat_loss = goals(&[UserGoal::FatLoss]);
    let level = ExperienceLevel::Intermediate;

    assert_eq!(score_entry(&fat_loss, level, &WEIGHTED[1]), 15);
    assert_eq!(score_entry(&fat_loss, level, &WEIGHTED[0]), 10);
    assert_eq!(score_entry(&fat_loss, level, &WEIGHTED[2]), 0);

    let ids: Vec<_> = recommend(&fat_loss, level, &Catalog::from_entries(&WEIGHTED))
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn level_match_alone_still_counts() {
    let energy = goals(&[UserGoal::Energy]);
    let ranked = rank(&energy, ExperienceLevel::Advanced, &WEIGHTED);
    let ids: Vec<_> = ranked.iter().map(|s| (s.entry.id, s.score)).collect();
    assert_eq!(ids, vec![("b", 5), ("unrelated", 5)]);
}

#[test]
fn no_goals_means_no_recommendations() {
    let catalog = Catalog::builtin();
    for level in [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ] {
        assert!(recommend(&GoalSet::new(), level, &catalog).is_empty());
    }
    assert!(recommend_for_profile(&Profile::default(), &catalog).is_empty());
}

#[test]
fn ties_keep_catalog_order_and_list_is_capped() {
    let catalog = Catalog::from_entries(&TIED);
    let picked: Vec<_> = recommend(
        &goals(&[UserGoal::Energy, UserGoal::Cognitive]),
        ExperienceLevel::Beginner,
        &catalog,
    )
    .iter()
    .map(|e| e.id)
    .collect();

    assert_eq!(picked, vec!["best", "first", "second"]);
}

#[test]
fn builtin_results_are_bounded_sorted_and_stable() {
    let catalog = Catalog::builtin();
    let level = ExperienceLevel::Beginner;

    for goal_list in [
        vec![UserGoal::Recovery],
        vec![UserGoal::FatLoss, UserGoal::MuscleGain],
        vec![UserGoal::Longevity, UserGoal::Skin, UserGoal::Cognitive],
    ] {
        let set = goals(&goal_list);
        let first = recommend(&set, level, &catalog);
        let second = recommend(&set, level, &catalog);

        assert!(first.len() <= 3);
        assert_eq!(first, second);

        let scores: Vec<u32> = first.iter().map(|e| score_entry(&set, level, e)).collect();
        assert!(scores.iter().all(|s| *s > 0));
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }
}
