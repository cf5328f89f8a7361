// ABOUTME: Goal-based recommendation scorer over the peptide catalog
// ABOUTME: Pure weighted scoring with stable descending sort and a top-three cut
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

//! # Recommendations
//!
//! Each entry earns [`GOAL_MATCH_POINTS`] for every user goal it addresses and
//! [`LEVEL_MATCH_POINTS`] when it suits the user's experience level. Entries
//! scoring zero are dropped, the rest are sorted by descending score with
//! ties kept in catalog order, and the first [`RECOMMENDATION_LIMIT`] are
//! returned.
//!
//! A user with no goals gets no recommendations, even though the level bonus
//! alone would give most entries a non-zero score.

use peptidion_core::models::{CatalogEntry, ExperienceLevel, GoalSet, Profile};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::constants::scoring::{GOAL_MATCH_POINTS, LEVEL_MATCH_POINTS, RECOMMENDATION_LIMIT};

/// Catalog entry with its score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredEntry<'a> {
    /// The entry
    pub entry: &'a CatalogEntry,
    /// Accumulated score
    pub score: u32,
}

/// Score one entry for the given goals and level
#[must_use]
pub fn score_entry(goals: &GoalSet, level: ExperienceLevel, entry: &CatalogEntry) -> u32 {
    let goal_points: u32 = goals
        .iter()
        .filter(|goal| entry.addresses(*goal))
        .map(|_| GOAL_MATCH_POINTS)
        .sum();

    let level_points = if entry.suits(level) {
        LEVEL_MATCH_POINTS
    } else {
        0
    };

    goal_points + level_points
}

/// Every entry with a positive score, best first, ties in catalog order
#[must_use]
pub fn rank<'a>(
    goals: &GoalSet,
    level: ExperienceLevel,
    entries: &'a [CatalogEntry],
) -> Vec<ScoredEntry<'a>> {
    if goals.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredEntry<'a>> = entries
        .iter()
        .map(|entry| ScoredEntry {
            entry,
            score: score_entry(goals, level, entry),
        })
        .filter(|scored| scored.score > 0)
        .collect();

    // sort_by is stable, so equal scores keep catalog order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Top recommendations for the given goals and level
#[must_use]
pub fn recommend(
    goals: &GoalSet,
    level: ExperienceLevel,
    catalog: &Catalog,
) -> Vec<&'static CatalogEntry> {
    rank(goals, level, catalog.entries())
        .into_iter()
        .take(RECOMMENDATION_LIMIT)
        .map(|scored| scored.entry)
        .collect()
}

/// Top recommendations for a profile's goals and experience level
#[must_use]
pub fn recommend_for_profile(profile: &Profile, catalog: &Catalog) -> Vec<&'static CatalogEntry> {
    recommend(&profile.goals, profile.experience_level, catalog)
}
