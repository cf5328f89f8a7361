// ABOUTME: Progress journal models: photos, body stats and protocol cycles
// ABOUTME: Persisted as JSON arrays in their own storage slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body angle a progress photo was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoType {
    /// Face close-up
    Face,
    /// Front body
    Front,
    /// Side body
    Side,
    /// Back body
    Back,
}

impl PhotoType {
    /// Every photo type, in display order
    pub const ALL: [Self; 4] = [Self::Face, Self::Front, Self::Side, Self::Back];

    /// Convert to the tag string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Face => "face",
            Self::Front => "front",
            Self::Side => "side",
            Self::Back => "back",
        }
    }

    /// Parse from the tag string (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Rating attached to a photo by the analysis service
///
/// Scores are on a 1-10 scale. All fields are optional because older
/// records may carry a partial rating.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotoRating {
    /// Muscle definition and low body fat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leanness: Option<f64>,
    /// Minimal water retention
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debloatedness: Option<f64>,
    /// Skin quality and clarity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_skin: Option<f64>,
    /// Facial structure definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jawline: Option<f64>,
    /// Overall score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<f64>,
    /// Short written analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

/// A saved progress photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPhoto {
    /// Unique identity
    pub id: String,
    /// Image reference (file path or URI)
    pub uri: String,
    /// Body angle
    #[serde(rename = "type")]
    pub photo_type: PhotoType,
    /// When the photo was saved
    pub date: DateTime<Utc>,
    /// Weight at capture time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Body fat at capture time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Analysis rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<PhotoRating>,
}

impl ProgressPhoto {
    /// New photo with a fresh id, stamped now
    #[must_use]
    pub fn new(uri: impl Into<String>, photo_type: PhotoType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            uri: uri.into(),
            photo_type,
            date: Utc::now(),
            weight: None,
            body_fat: None,
            notes: None,
            rating: None,
        }
    }
}

/// A body measurement entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyStat {
    /// When the measurement was taken
    pub date: DateTime<Utc>,
    /// Weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Body fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    /// Muscle mass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A user-tracked run of one catalog entry's protocol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    /// Unique identity
    pub id: String,
    /// Catalog entry reference
    pub peptide_id: String,
    /// Denormalized catalog entry name
    pub peptide_name: String,
    /// When the cycle started
    pub start_date: DateTime<Utc>,
    /// When the cycle ended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Dosage text
    pub dosage: String,
    /// Frequency text
    pub frequency: String,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Observed side effects
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub side_effects: Vec<String>,
    /// Whether the cycle is running
    pub is_active: bool,
}

impl Cycle {
    /// Mark the cycle finished at `at`
    #[must_use]
    pub fn ended(mut self, at: DateTime<Utc>) -> Self {
        self.end_date = Some(at);
        self.is_active = false;
        self
    }
}
