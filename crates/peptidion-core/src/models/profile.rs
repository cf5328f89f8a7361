// ABOUTME: User profile record and the enumerations it is built from
// ABOUTME: Includes the bounded GoalSet that enforces the three-goal limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of goals a profile may hold
pub const MAX_GOALS: usize = 3;

/// Role chosen at the start of onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// End user learning about and tracking protocols
    #[default]
    User,
    /// Fitness coach offering sessions
    Coach,
    /// Medical doctor offering consultations
    Doctor,
}

impl UserRole {
    /// Convert to the persisted string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Coach => "coach",
            Self::Doctor => "doctor",
        }
    }

    /// Parse from the persisted string representation (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(Self::User),
            "coach" => Some(Self::Coach),
            "doctor" => Some(Self::Doctor),
            _ => None,
        }
    }

    /// Coaches and doctors go through the professional intake
    #[must_use]
    pub const fn is_professional(&self) -> bool {
        matches!(self, Self::Coach | Self::Doctor)
    }
}

/// Outcome a user wants from a protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserGoal {
    /// Build lean muscle
    MuscleGain,
    /// Burn fat / recomposition
    FatLoss,
    /// Longevity
    Longevity,
    /// Improve recovery / sleep
    Recovery,
    /// Increase energy / focus
    Energy,
    /// Cognitive enhancement
    Cognitive,
    /// Skin, hair and anti-aging
    Skin,
}

impl UserGoal {
    /// Every goal, in display order
    pub const ALL: [Self; 7] = [
        Self::MuscleGain,
        Self::FatLoss,
        Self::Longevity,
        Self::Recovery,
        Self::Energy,
        Self::Cognitive,
        Self::Skin,
    ];

    /// Convert to the persisted string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MuscleGain => "muscle_gain",
            Self::FatLoss => "fat_loss",
            Self::Longevity => "longevity",
            Self::Recovery => "recovery",
            Self::Energy => "energy",
            Self::Cognitive => "cognitive",
            Self::Skin => "skin",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MuscleGain => "Build Lean Muscle",
            Self::FatLoss => "Burn Fat / Recomposition",
            Self::Longevity => "Longevity",
            Self::Recovery => "Improve Recovery / Sleep",
            Self::Energy => "Increase Energy / Focus",
            Self::Cognitive => "Cognitive Enhancement",
            Self::Skin => "Skin / Hair / Anti-Aging",
        }
    }

    /// Parse from the persisted string representation (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL.into_iter().find(|g| g.as_str() == s)
    }
}

/// Self-reported familiarity with peptide protocols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to peptides
    #[default]
    Beginner,
    /// Has run at least one protocol
    Intermediate,
    /// Experienced
    Advanced,
}

impl ExperienceLevel {
    /// Convert to the persisted string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse from the persisted string representation (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

/// Gender used for avatar selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    #[default]
    Male,
    /// Female
    Female,
    /// Other / not specified
    Other,
}

/// Daily activity level captured during intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Mostly sitting
    Sedentary,
    /// Regular exercise
    #[default]
    Moderate,
    /// Trains most days
    Athlete,
}

/// Answer to "have you used peptides before?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PeptideHistory {
    /// Has used peptides
    Yes,
    /// Never used them
    #[default]
    No,
    /// Researched but never tried
    Researched,
}

/// How soon the user expects results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ResultsHorizon {
    /// One to three months
    #[serde(rename = "1-3")]
    OneToThreeMonths,
    /// Three to six months
    #[default]
    #[serde(rename = "3-6")]
    ThreeToSixMonths,
    /// Long term
    #[serde(rename = "long-term")]
    LongTerm,
}

/// Reasons a goal list cannot become a [`GoalSet`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoalSetError {
    /// More than [`MAX_GOALS`] goals
    #[error("at most 3 goals may be selected, got {0}")]
    TooMany(usize),
    /// Same goal listed twice
    #[error("goal '{}' is listed more than once", .0.as_str())]
    Duplicate(UserGoal),
}

/// Ordered set of at most [`MAX_GOALS`] distinct goals
///
/// Persisted as a plain JSON array. Deserialization rejects arrays that
/// violate the bound so a corrupted slot cannot smuggle in a fourth goal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<UserGoal>", into = "Vec<UserGoal>")]
pub struct GoalSet(Vec<UserGoal>);

impl GoalSet {
    /// Empty goal set
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Whether the goal is selected
    #[must_use]
    pub fn contains(&self, goal: UserGoal) -> bool {
        self.0.contains(&goal)
    }

    /// Number of selected goals
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no goal is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether another goal can still be added
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_GOALS
    }

    /// Selected goals in selection order
    pub fn iter(&self) -> impl Iterator<Item = UserGoal> + '_ {
        self.0.iter().copied()
    }

    /// Select a goal. Selecting an already selected goal is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GoalSetError::TooMany`] when the set is already full
    pub fn insert(&mut self, goal: UserGoal) -> Result<(), GoalSetError> {
        if self.contains(goal) {
            return Ok(());
        }
        if self.is_full() {
            return Err(GoalSetError::TooMany(self.0.len() + 1));
        }
        self.0.push(goal);
        Ok(())
    }

    /// Deselect a goal, returning whether it was selected
    pub fn remove(&mut self, goal: UserGoal) -> bool {
        let before = self.0.len();
        self.0.retain(|g| *g != goal);
        self.0.len() != before
    }

    /// Flip selection of a goal
    ///
    /// # Errors
    ///
    /// Returns [`GoalSetError::TooMany`] when selecting into a full set
    pub fn toggle(&mut self, goal: UserGoal) -> Result<(), GoalSetError> {
        if self.remove(goal) {
            Ok(())
        } else {
            self.insert(goal)
        }
    }
}

impl TryFrom<Vec<UserGoal>> for GoalSet {
    type Error = GoalSetError;

    fn try_from(goals: Vec<UserGoal>) -> Result<Self, Self::Error> {
        if goals.len() > MAX_GOALS {
            return Err(GoalSetError::TooMany(goals.len()));
        }
        for (i, goal) in goals.iter().enumerate() {
            if goals[..i].contains(goal) {
                return Err(GoalSetError::Duplicate(*goal));
            }
        }
        Ok(Self(goals))
    }
}

impl From<GoalSet> for Vec<UserGoal> {
    fn from(set: GoalSet) -> Self {
        set.0
    }
}

/// The single per-device user record
///
/// Field names follow the camelCase JSON layout the mobile app persisted,
/// so existing `@peptidion_user` blobs load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    /// Device-local identity
    pub id: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Role selected during onboarding
    pub role: UserRole,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Body weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Body fat percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    /// Activity level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Selected goals (max three)
    pub goals: GoalSet,
    /// Experience level used by the recommendation scorer
    pub experience_level: ExperienceLevel,
    /// Set once either intake branch completes
    pub has_completed_onboarding: bool,
    /// Educational-use disclaimer accepted
    pub has_accepted_disclaimer: bool,
    /// Gamification level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Gamification experience points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_points: Option<u32>,
    /// Gender used for avatars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Prior peptide use
    #[serde(
        rename = "hasUsedPeptidesBefore",
        skip_serializing_if = "Option::is_none"
    )]
    pub peptide_history: Option<PeptideHistory>,
    /// Expected results horizon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_results: Option<ResultsHorizon>,
    /// Wants progress tracking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wants_tracking: Option<bool>,
    /// Wants coaching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wants_coaching: Option<bool>,
    /// Credential for the photo analysis endpoint
    #[serde(rename = "openAIApiKey", skip_serializing_if = "Option::is_none")]
    pub analysis_api_key: Option<String>,
    /// Booking link shown to clients (professionals only)
    #[serde(rename = "calendlyLink", skip_serializing_if = "Option::is_none")]
    pub scheduling_link: Option<String>,
    /// Professional specialty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    /// Professional bio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Professional hourly rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    /// Instagram handle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_handle: Option<String>,
    /// Twitter handle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_handle: Option<String>,
    /// `LinkedIn` handle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_handle: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            id: "1".to_owned(),
            name: None,
            role: UserRole::User,
            age: None,
            weight: None,
            height: None,
            body_fat: None,
            activity_level: None,
            goals: GoalSet::new(),
            experience_level: ExperienceLevel::Beginner,
            has_completed_onboarding: false,
            has_accepted_disclaimer: false,
            level: Some(1),
            experience_points: Some(0),
            gender: None,
            peptide_history: None,
            expected_results: None,
            wants_tracking: None,
            wants_coaching: None,
            analysis_api_key: None,
            scheduling_link: None,
            specialty: None,
            bio: None,
            hourly_rate: None,
            instagram_handle: None,
            twitter_handle: None,
            linkedin_handle: None,
        }
    }
}

impl Profile {
    /// Coaches and doctors see the professional dashboard
    #[must_use]
    pub const fn is_professional(&self) -> bool {
        self.role.is_professional()
    }

    /// Analysis credential, if one is configured and non-blank
    #[must_use]
    pub fn analysis_credential(&self) -> Option<&str> {
        self.analysis_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn goal_set_rejects_fourth_goal() {
        let mut goals = GoalSet::new();
        goals.insert(UserGoal::FatLoss).unwrap();
        goals.insert(UserGoal::Recovery).unwrap();
        goals.insert(UserGoal::Skin).unwrap();
        assert_eq!(
            goals.insert(UserGoal::Energy),
            Err(GoalSetError::TooMany(4))
        );
        // re-selecting an existing goal is fine even when full
        goals.insert(UserGoal::Skin).unwrap();
        assert_eq!(goals.len(), 3);
    }

    #[test]
    fn goal_set_toggle_round_trips() {
        let mut goals = GoalSet::new();
        goals.toggle(UserGoal::Longevity).unwrap();
        assert!(goals.contains(UserGoal::Longevity));
        goals.toggle(UserGoal::Longevity).unwrap();
        assert!(goals.is_empty());
    }

    #[test]
    fn goal_set_deserialize_rejects_duplicates() {
        let err = serde_json::from_str::<GoalSet>(r#"["skin","skin"]"#).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn profile_reads_mobile_app_layout() {
        let json = r#"{
            "id": "1",
            "role": "coach",
            "goals": ["fat_loss", "recovery"],
            "experienceLevel": "intermediate",
            "hasCompletedOnboarding": true,
            "hasAcceptedDisclaimer": true,
            "hasUsedPeptidesBefore": "researched",
            "expectedResults": "long-term",
            "openAIApiKey": "sk-test",
            "calendlyLink": "https://calendly.com/coach"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.role, UserRole::Coach);
        assert_eq!(profile.experience_level, ExperienceLevel::Intermediate);
        assert_eq!(profile.peptide_history, Some(PeptideHistory::Researched));
        assert_eq!(profile.expected_results, Some(ResultsHorizon::LongTerm));
        assert_eq!(profile.analysis_credential(), Some("sk-test"));
        assert!(profile.is_professional());
        // fields absent from the blob fall back to defaults
        assert_eq!(profile.level, Some(1));
    }

    #[test]
    fn blank_credential_is_treated_as_missing() {
        let profile = Profile {
            analysis_api_key: Some("   ".to_owned()),
            ..Profile::default()
        };
        assert_eq!(profile.analysis_credential(), None);
    }
}
