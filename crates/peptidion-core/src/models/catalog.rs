// ABOUTME: Catalog entry model for the compiled-in peptide reference data
// ABOUTME: Entries are 'static and never mutated at runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use serde::Serialize;

use super::profile::{ExperienceLevel, UserGoal};

/// Catalog category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeptideCategory {
    /// Growth hormone secretagogues and anabolic support
    Growth,
    /// Tissue repair and recovery
    Recovery,
    /// Fat loss and metabolic
    FatLoss,
    /// Longevity and cellular health
    Longevity,
    /// Cognitive and nootropic
    Cognitive,
    /// Skin, hair and tanning
    Skin,
}

impl PeptideCategory {
    /// Every category, in display order
    pub const ALL: [Self; 6] = [
        Self::Growth,
        Self::Recovery,
        Self::FatLoss,
        Self::Longevity,
        Self::Cognitive,
        Self::Skin,
    ];

    /// Convert to the tag string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Growth => "growth",
            Self::Recovery => "recovery",
            Self::FatLoss => "fat_loss",
            Self::Longevity => "longevity",
            Self::Cognitive => "cognitive",
            Self::Skin => "skin",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Growth => "Growth",
            Self::Recovery => "Recovery",
            Self::FatLoss => "Fat Loss",
            Self::Longevity => "Longevity",
            Self::Cognitive => "Cognitive",
            Self::Skin => "Skin",
        }
    }

    /// Parse from the tag string (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// One informational peptide entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique identity (slug)
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Category tag
    pub category: PeptideCategory,
    /// One-line summary
    pub short_description: &'static str,
    /// Long-form description
    pub full_description: &'static str,
    /// Reported benefits
    pub benefits: &'static [&'static str],
    /// Known risks and side effects
    pub risks: &'static [&'static str],
    /// Example dosage text (educational)
    pub dosage_example: &'static str,
    /// Typical cycle length text
    pub cycle_length: &'static str,
    /// Experience levels the entry is suited to
    #[serde(rename = "experienceLevel")]
    pub experience_levels: &'static [ExperienceLevel],
    /// Goals the entry addresses
    pub goals: &'static [UserGoal],
}

impl CatalogEntry {
    /// Whether the entry lists the goal
    #[must_use]
    pub fn addresses(&self, goal: UserGoal) -> bool {
        self.goals.contains(&goal)
    }

    /// Whether the entry is suited to the experience level
    #[must_use]
    pub fn suits(&self, level: ExperienceLevel) -> bool {
        self.experience_levels.contains(&level)
    }
}
