// ABOUTME: Settings edits for an existing profile
// ABOUTME: Turns raw form values into a profile patch where blank text clears a field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use peptidion_core::models::{
    ExperienceLevel, FieldUpdate, Gender, GoalSet, Profile, ProfilePatch, UserGoal, UserRole,
};
use tracing::info;

use crate::coaches::SchedulingLink;
use crate::errors::AppResult;
use crate::onboarding::parse_measurement;
use crate::store::UserStore;

/// Requested edits; `None` (or no goals) leaves a field alone
///
/// Text fields follow the settings form: a blank value clears the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsEdits {
    /// New role
    pub role: Option<UserRole>,
    /// Replacement goals, in selection order; duplicates collapse
    pub goals: Vec<UserGoal>,
    /// New experience level
    pub experience: Option<ExperienceLevel>,
    /// Display name
    pub name: Option<String>,
    /// Age
    pub age: Option<u32>,
    /// Weight
    pub weight: Option<f64>,
    /// Height
    pub height: Option<f64>,
    /// Body fat percentage
    pub body_fat: Option<f64>,
    /// Gender
    pub gender: Option<Gender>,
    /// Photo analysis credential
    pub api_key: Option<String>,
    /// Booking link, http or https
    pub scheduling_link: Option<String>,
    /// Professional specialty
    pub specialty: Option<String>,
    /// Professional bio
    pub bio: Option<String>,
    /// Raw hourly rate; blank clears, otherwise a positive number
    pub hourly_rate: Option<String>,
    /// Instagram handle
    pub instagram: Option<String>,
    /// Twitter handle
    pub twitter: Option<String>,
    /// `LinkedIn` handle
    pub linkedin: Option<String>,
}

impl SettingsEdits {
    /// Validate the edits and build the matching patch
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for more than three goals, a
    /// malformed hourly rate or a scheduling link that is not http(s)
    pub fn into_patch(self) -> AppResult<ProfilePatch> {
        let goals = if self.goals.is_empty() {
            None
        } else {
            let mut set = GoalSet::new();
            for goal in self.goals {
                set.insert(goal)?;
            }
            Some(set)
        };

        let scheduling_link = match self.scheduling_link.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                FieldUpdate::Set(SchedulingLink::parse(raw)?.as_str().to_owned())
            }
            Some(_) => FieldUpdate::Clear,
            None => FieldUpdate::Keep,
        };

        let hourly_rate = match self.hourly_rate.as_deref() {
            Some(raw) => FieldUpdate::from_option(parse_measurement("Hourly rate", raw)?),
            None => FieldUpdate::Keep,
        };

        Ok(ProfilePatch {
            role: self.role,
            goals,
            experience_level: self.experience,
            name: text_update(self.name.as_deref()),
            age: kept_unless(self.age),
            weight: kept_unless(self.weight),
            height: kept_unless(self.height),
            body_fat: kept_unless(self.body_fat),
            gender: kept_unless(self.gender),
            analysis_api_key: text_update(self.api_key.as_deref()),
            scheduling_link,
            specialty: text_update(self.specialty.as_deref()),
            bio: text_update(self.bio.as_deref()),
            hourly_rate,
            instagram_handle: text_update(self.instagram.as_deref()),
            twitter_handle: text_update(self.twitter.as_deref()),
            linkedin_handle: text_update(self.linkedin.as_deref()),
            ..ProfilePatch::default()
        })
    }
}

/// Apply `edits` to the stored profile
///
/// Returns `None` when the edits change nothing; nothing is written then.
///
/// # Errors
///
/// Returns validation errors from [`SettingsEdits::into_patch`] or a
/// storage error if the write fails
pub async fn apply(store: &UserStore, edits: SettingsEdits) -> AppResult<Option<Profile>> {
    let patch = edits.into_patch()?;
    if patch.is_empty() {
        return Ok(None);
    }
    let profile = store.update_profile(patch).await?;
    info!(role = profile.role.as_str(), "Settings saved");
    Ok(Some(profile))
}

fn text_update(value: Option<&str>) -> FieldUpdate<String> {
    value.map_or(FieldUpdate::Keep, FieldUpdate::from_text)
}

fn kept_unless<T>(value: Option<T>) -> FieldUpdate<T> {
    value.map_or(FieldUpdate::Keep, FieldUpdate::Set)
}
