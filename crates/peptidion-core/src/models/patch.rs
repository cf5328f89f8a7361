// ABOUTME: Typed merge-patch for the profile record
// ABOUTME: Distinguishes "leave unchanged" from "explicitly clear" for optional fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use super::profile::{
    ActivityLevel, ExperienceLevel, Gender, GoalSet, PeptideHistory, Profile, ResultsHorizon,
    UserRole,
};

/// Update instruction for an optional profile field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    /// Leave the current value as it is
    #[default]
    Keep,
    /// Remove the current value
    Clear,
    /// Replace the current value
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// `Set` for `Some`, `Clear` for `None`
    ///
    /// Handy for form fields where an empty input means "remove".
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Clear, Self::Set)
    }

    fn apply(self, slot: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Clear => *slot = None,
            Self::Set(value) => *slot = Some(value),
        }
    }
}

impl FieldUpdate<String> {
    /// `Set` for non-blank text, `Clear` for blank text
    pub fn from_text(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Self::Clear
        } else {
            Self::Set(trimmed.to_owned())
        }
    }
}

/// Partial update of [`Profile`]
///
/// Required fields use `Option<T>` where `None` keeps the current value.
/// Optional fields use [`FieldUpdate`] so a caller can clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    /// New role
    pub role: Option<UserRole>,
    /// Replacement goal set
    pub goals: Option<GoalSet>,
    /// New experience level
    pub experience_level: Option<ExperienceLevel>,
    /// Onboarding completion flag
    pub has_completed_onboarding: Option<bool>,
    /// Disclaimer acceptance flag
    pub has_accepted_disclaimer: Option<bool>,
    /// Display name
    pub name: FieldUpdate<String>,
    /// Age
    pub age: FieldUpdate<u32>,
    /// Weight
    pub weight: FieldUpdate<f64>,
    /// Height
    pub height: FieldUpdate<f64>,
    /// Body fat percentage
    pub body_fat: FieldUpdate<f64>,
    /// Activity level
    pub activity_level: FieldUpdate<ActivityLevel>,
    /// Gamification level
    pub level: FieldUpdate<u32>,
    /// Gamification experience points
    pub experience_points: FieldUpdate<u32>,
    /// Gender
    pub gender: FieldUpdate<Gender>,
    /// Prior peptide use
    pub peptide_history: FieldUpdate<PeptideHistory>,
    /// Expected results horizon
    pub expected_results: FieldUpdate<ResultsHorizon>,
    /// Wants tracking
    pub wants_tracking: FieldUpdate<bool>,
    /// Wants coaching
    pub wants_coaching: FieldUpdate<bool>,
    /// Analysis credential
    pub analysis_api_key: FieldUpdate<String>,
    /// Booking link
    pub scheduling_link: FieldUpdate<String>,
    /// Specialty
    pub specialty: FieldUpdate<String>,
    /// Bio
    pub bio: FieldUpdate<String>,
    /// Hourly rate
    pub hourly_rate: FieldUpdate<f64>,
    /// Instagram handle
    pub instagram_handle: FieldUpdate<String>,
    /// Twitter handle
    pub twitter_handle: FieldUpdate<String>,
    /// `LinkedIn` handle
    pub linkedin_handle: FieldUpdate<String>,
}

impl ProfilePatch {
    /// Whether applying this patch would change nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Produce the patched profile, leaving `profile` untouched
    #[must_use]
    pub fn apply(self, profile: &Profile) -> Profile {
        let mut next = profile.clone();

        if let Some(role) = self.role {
            next.role = role;
        }
        if let Some(goals) = self.goals {
            next.goals = goals;
        }
        if let Some(level) = self.experience_level {
            next.experience_level = level;
        }
        if let Some(done) = self.has_completed_onboarding {
            next.has_completed_onboarding = done;
        }
        if let Some(accepted) = self.has_accepted_disclaimer {
            next.has_accepted_disclaimer = accepted;
        }

        self.name.apply(&mut next.name);
        self.age.apply(&mut next.age);
        self.weight.apply(&mut next.weight);
        self.height.apply(&mut next.height);
        self.body_fat.apply(&mut next.body_fat);
        self.activity_level.apply(&mut next.activity_level);
        self.level.apply(&mut next.level);
        self.experience_points.apply(&mut next.experience_points);
        self.gender.apply(&mut next.gender);
        self.peptide_history.apply(&mut next.peptide_history);
        self.expected_results.apply(&mut next.expected_results);
        self.wants_tracking.apply(&mut next.wants_tracking);
        self.wants_coaching.apply(&mut next.wants_coaching);
        self.analysis_api_key.apply(&mut next.analysis_api_key);
        self.scheduling_link.apply(&mut next.scheduling_link);
        self.specialty.apply(&mut next.specialty);
        self.bio.apply(&mut next.bio);
        self.hourly_rate.apply(&mut next.hourly_rate);
        self.instagram_handle.apply(&mut next.instagram_handle);
        self.twitter_handle.apply(&mut next.twitter_handle);
        self.linkedin_handle.apply(&mut next.linkedin_handle);

        next
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::UserGoal;

    #[test]
    fn keep_leaves_existing_values() {
        let profile = Profile {
            bio: Some("Sports medicine".to_owned()),
            weight: Some(82.5),
            ..Profile::default()
        };
        let patched = ProfilePatch {
            role: Some(UserRole::Doctor),
            ..ProfilePatch::default()
        }
        .apply(&profile);

        assert_eq!(patched.role, UserRole::Doctor);
        assert_eq!(patched.bio.as_deref(), Some("Sports medicine"));
        assert_eq!(patched.weight, Some(82.5));
    }

    #[test]
    fn clear_differs_from_keep() {
        let profile = Profile {
            scheduling_link: Some("https://calendly.com/x".to_owned()),
            specialty: Some("Longevity".to_owned()),
            ..Profile::default()
        };
        let patched = ProfilePatch {
            scheduling_link: FieldUpdate::Clear,
            ..ProfilePatch::default()
        }
        .apply(&profile);

        assert_eq!(patched.scheduling_link, None);
        assert_eq!(patched.specialty.as_deref(), Some("Longevity"));
    }

    #[test]
    fn from_text_trims_and_clears_blank() {
        assert_eq!(FieldUpdate::from_text("  "), FieldUpdate::<String>::Clear);
        assert_eq!(
            FieldUpdate::from_text(" @handle "),
            FieldUpdate::Set("@handle".to_owned())
        );
    }

    #[test]
    fn goals_are_replaced_wholesale() {
        let mut goals = GoalSet::new();
        goals.insert(UserGoal::Skin).unwrap();
        let profile = Profile::default();
        let patched = ProfilePatch {
            goals: Some(goals.clone()),
            ..ProfilePatch::default()
        }
        .apply(&profile);
        assert_eq!(patched.goals, goals);
        assert!(ProfilePatch::default().is_empty());
    }
}
