// ABOUTME: Level progression, avatar URLs and photo/stat helpers for the progress screen
// ABOUTME: Pure functions over profile and journal data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use peptidion_core::models::{BodyStat, Gender, PhotoType, Profile, ProgressPhoto};
use serde::Serialize;

use crate::constants::avatars::BASE_URL;
use crate::constants::gamification::{STARTING_LEVEL, XP_PER_LEVEL};

const MALE_BACKGROUNDS: [&str; 5] = ["b6e3f4", "c0aede", "d1d4f9", "ffd5dc", "ffdfbf"];
const FEMALE_BACKGROUNDS: [&str; 5] = ["ffd5dc", "ffdfbf", "f0aede", "d1f4f9", "ffc0cb"];
const OTHER_BACKGROUNDS: [&str; 5] = ["d1d4f9", "b6e3f4", "c0aede", "ffd5dc", "ffdfbf"];

/// Level and progress towards the next one
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    /// Current level
    pub level: u32,
    /// Total experience points
    pub experience_points: u32,
}

impl LevelProgress {
    /// Progress for a profile, defaulting to level 1 with no points
    #[must_use]
    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            level: profile.level.unwrap_or(STARTING_LEVEL),
            experience_points: profile.experience_points.unwrap_or(0),
        }
    }

    /// Fraction of the current level completed, in `[0, 1)`
    #[must_use]
    pub fn fraction(&self) -> f64 {
        f64::from(self.experience_points % XP_PER_LEVEL) / f64::from(XP_PER_LEVEL)
    }

    /// Experience points at which the next level starts
    #[must_use]
    pub const fn next_threshold(&self) -> u32 {
        (self.experience_points / XP_PER_LEVEL + 1) * XP_PER_LEVEL
    }
}

/// Avatar image URL for a gender and level
///
/// Higher levels get a different seed and background; the background
/// palette stops changing after level 5.
#[must_use]
pub fn avatar_url(gender: Gender, level: u32) -> String {
    let (style, seed, palette) = match gender {
        Gender::Male => ("avataaars", "male", &MALE_BACKGROUNDS),
        Gender::Female => ("avataaars", "female", &FEMALE_BACKGROUNDS),
        Gender::Other => ("bottts", "other", &OTHER_BACKGROUNDS),
    };
    let index = usize::try_from(level.saturating_sub(1))
        .unwrap_or(usize::MAX)
        .min(palette.len() - 1);

    format!(
        "{BASE_URL}/{style}/svg?seed={seed}{level}&backgroundColor={}",
        palette[index]
    )
}

/// Avatar URL for a profile
#[must_use]
pub fn profile_avatar_url(profile: &Profile) -> String {
    avatar_url(
        profile.gender.unwrap_or_default(),
        profile.level.unwrap_or(STARTING_LEVEL),
    )
}

/// Photos of one type, or all photos for `None`, keeping their order
#[must_use]
pub fn filter_photos(photos: &[ProgressPhoto], photo_type: Option<PhotoType>) -> Vec<&ProgressPhoto> {
    photos
        .iter()
        .filter(|photo| photo_type.is_none_or(|t| photo.photo_type == t))
        .collect()
}

/// Weight from the newest body stat that has one
#[must_use]
pub fn latest_weight(stats: &[BodyStat]) -> Option<f64> {
    stats.iter().find_map(|stat| stat.weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_math() {
        let progress = LevelProgress {
            level: 3,
            experience_points: 250,
        };
        assert!((progress.fraction() - 0.5).abs() < f64::EPSILON);
        assert_eq!(progress.next_threshold(), 300);

        let start = LevelProgress::for_profile(&Profile::default());
        assert_eq!(start.level, 1);
        assert_eq!(start.next_threshold(), 100);
    }

    #[test]
    fn avatar_palette_caps_at_fifth_color() {
        assert_eq!(
            avatar_url(Gender::Male, 1),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=male1&backgroundColor=b6e3f4"
        );
        assert!(avatar_url(Gender::Female, 12).ends_with("seed=female12&backgroundColor=ffc0cb"));
        assert!(avatar_url(Gender::Other, 0).contains("/bottts/svg?seed=other0&backgroundColor=d1d4f9"));
    }
}
