// ABOUTME: Onboarding state machine for the standard and professional intake branches
// ABOUTME: Step guards, back navigation and the completion patch written to the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

//! # Onboarding
//!
//! ```text
//! role selection ─┬─> standard intake (7 steps) ─────┬─> main
//!                 └─> professional intake (4 steps) ─┘
//! ```
//!
//! Choosing a role patches it into the profile right away. Each intake then
//! collects answers step by step; the last step writes everything in one
//! patch and only moves the flow to [`OnboardingStage::Main`] once that
//! write succeeded.

use peptidion_core::models::{
    ActivityLevel, ExperienceLevel, FieldUpdate, Gender, GoalSet, PeptideHistory, Profile,
    ProfilePatch, ResultsHorizon, UserGoal, UserRole,
};
use tracing::info;

use crate::coaches::SchedulingLink;
use crate::constants::gamification::STARTING_LEVEL;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::store::UserStore;

/// Steps of the standard intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StandardStep {
    /// Welcome screen
    #[default]
    Welcome,
    /// Goal selection and expected results
    Goals,
    /// Prior peptide use
    PeptideHistory,
    /// Weight, height, body fat and activity level
    Baseline,
    /// Experience level
    Experience,
    /// Tracking and coaching preferences, gender
    Personalization,
    /// Summary and disclaimer
    Complete,
}

impl StandardStep {
    /// Number of steps
    pub const COUNT: u8 = 7;

    /// 1-based step number
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Welcome => 1,
            Self::Goals => 2,
            Self::PeptideHistory => 3,
            Self::Baseline => 4,
            Self::Experience => 5,
            Self::Personalization => 6,
            Self::Complete => 7,
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::Welcome => Some(Self::Goals),
            Self::Goals => Some(Self::PeptideHistory),
            Self::PeptideHistory => Some(Self::Baseline),
            Self::Baseline => Some(Self::Experience),
            Self::Experience => Some(Self::Personalization),
            Self::Personalization => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    const fn previous(self) -> Option<Self> {
        match self {
            Self::Welcome => None,
            Self::Goals => Some(Self::Welcome),
            Self::PeptideHistory => Some(Self::Goals),
            Self::Baseline => Some(Self::PeptideHistory),
            Self::Experience => Some(Self::Baseline),
            Self::Personalization => Some(Self::Experience),
            Self::Complete => Some(Self::Personalization),
        }
    }
}

/// Steps of the professional intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProfessionalStep {
    /// Welcome screen
    #[default]
    Welcome,
    /// Name, specialty and bio
    ProfileInfo,
    /// Hourly rate
    Pricing,
    /// Scheduling link
    Booking,
}

impl ProfessionalStep {
    /// Number of steps
    pub const COUNT: u8 = 4;

    /// 1-based step number
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Welcome => 1,
            Self::ProfileInfo => 2,
            Self::Pricing => 3,
            Self::Booking => 4,
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::Welcome => Some(Self::ProfileInfo),
            Self::ProfileInfo => Some(Self::Pricing),
            Self::Pricing => Some(Self::Booking),
            Self::Booking => None,
        }
    }

    const fn previous(self) -> Option<Self> {
        match self {
            Self::Welcome => None,
            Self::ProfileInfo => Some(Self::Welcome),
            Self::Pricing => Some(Self::ProfileInfo),
            Self::Booking => Some(Self::Pricing),
        }
    }
}

/// Answers collected by the standard intake
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StandardIntake {
    step: StandardStep,
    /// Selected goals
    pub goals: GoalSet,
    /// Expected results horizon
    pub expected_results: ResultsHorizon,
    /// Prior peptide use
    pub peptide_history: PeptideHistory,
    /// Body weight
    pub weight: Option<f64>,
    /// Height
    pub height: Option<f64>,
    /// Body fat percentage
    pub body_fat: Option<f64>,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Experience level
    pub experience_level: ExperienceLevel,
    /// Wants progress tracking
    pub wants_tracking: bool,
    /// Wants coaching
    pub wants_coaching: bool,
    /// Gender for avatars
    pub gender: Gender,
}

impl StandardIntake {
    /// Current step
    #[must_use]
    pub const fn step(&self) -> StandardStep {
        self.step
    }

    /// Flip a goal, refusing a fourth
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when three goals are already selected
    pub fn toggle_goal(&mut self, goal: UserGoal) -> AppResult<()> {
        self.goals.toggle(goal)?;
        Ok(())
    }

    /// Select every goal in `goals`; repeats are ignored
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when more than three distinct goals
    /// would end up selected
    pub fn select_goals(&mut self, goals: &[UserGoal]) -> AppResult<()> {
        for &goal in goals {
            self.goals.insert(goal)?;
        }
        Ok(())
    }

    /// Fill the baseline step from raw text inputs; blank inputs clear
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if a non-blank input is not a
    /// positive number
    pub fn set_baseline(&mut self, weight: &str, height: &str, body_fat: &str) -> AppResult<()> {
        let weight = parse_measurement("weight", weight)?;
        let height = parse_measurement("height", height)?;
        let body_fat = parse_measurement("body fat", body_fat)?;
        self.weight = weight;
        self.height = height;
        self.body_fat = body_fat;
        Ok(())
    }

    /// Whether the current step's guard passes
    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.check_step().is_ok()
    }

    fn check_step(&self) -> AppResult<()> {
        if self.step == StandardStep::Goals && self.goals.is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "Select at least one goal to continue",
            ));
        }
        Ok(())
    }

    /// Patch written when the intake completes
    #[must_use]
    pub fn completion_patch(&self) -> ProfilePatch {
        ProfilePatch {
            role: Some(UserRole::User),
            goals: Some(self.goals.clone()),
            experience_level: Some(self.experience_level),
            has_completed_onboarding: Some(true),
            has_accepted_disclaimer: Some(true),
            weight: FieldUpdate::from_option(self.weight),
            height: FieldUpdate::from_option(self.height),
            body_fat: FieldUpdate::from_option(self.body_fat),
            activity_level: FieldUpdate::Set(self.activity_level),
            level: FieldUpdate::Set(STARTING_LEVEL),
            experience_points: FieldUpdate::Set(0),
            gender: FieldUpdate::Set(self.gender),
            peptide_history: FieldUpdate::Set(self.peptide_history),
            expected_results: FieldUpdate::Set(self.expected_results),
            wants_tracking: FieldUpdate::Set(self.wants_tracking),
            wants_coaching: FieldUpdate::Set(self.wants_coaching),
            ..ProfilePatch::default()
        }
    }
}

/// Answers collected by the professional intake
#[derive(Debug, Clone, PartialEq)]
pub struct ProfessionalIntake {
    step: ProfessionalStep,
    role: UserRole,
    /// Display name
    pub name: String,
    /// Specialty
    pub specialty: String,
    /// Bio
    pub bio: String,
    /// Hourly rate
    pub hourly_rate: Option<f64>,
    /// Booking link as entered
    pub scheduling_link: String,
}

impl ProfessionalIntake {
    fn new(role: UserRole) -> Self {
        Self {
            step: ProfessionalStep::Welcome,
            role,
            name: String::new(),
            specialty: String::new(),
            bio: String::new(),
            hourly_rate: None,
            scheduling_link: String::new(),
        }
    }

    /// Current step
    #[must_use]
    pub const fn step(&self) -> ProfessionalStep {
        self.step
    }

    /// Role the intake was started for
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// Greeting shown on the welcome step
    #[must_use]
    pub const fn welcome_message(&self) -> &'static str {
        match self.role {
            UserRole::Doctor => "Welcome, Doctor. Set up your practice profile to reach patients.",
            _ => "Welcome, Coach. Set up your coaching profile to reach clients.",
        }
    }

    /// Set the hourly rate from raw text; blank clears
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if the text is not a positive number
    pub fn set_hourly_rate(&mut self, raw: &str) -> AppResult<()> {
        self.hourly_rate = parse_measurement("hourly rate", raw)?;
        Ok(())
    }

    /// Whether the current step's guard passes
    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.check_step().is_ok()
    }

    fn check_step(&self) -> AppResult<()> {
        match self.step {
            ProfessionalStep::ProfileInfo => {
                for (field, value) in [
                    ("name", &self.name),
                    ("specialty", &self.specialty),
                    ("bio", &self.bio),
                ] {
                    if value.trim().is_empty() {
                        return Err(AppError::new(
                            ErrorCode::MissingRequiredField,
                            format!("Professional {field} is required"),
                        ));
                    }
                }
                Ok(())
            }
            ProfessionalStep::Booking if !self.scheduling_link.trim().is_empty() => {
                SchedulingLink::parse(&self.scheduling_link).map(|_| ())
            }
            _ => Ok(()),
        }
    }

    /// Patch written when the intake completes
    #[must_use]
    pub fn completion_patch(&self) -> ProfilePatch {
        ProfilePatch {
            has_completed_onboarding: Some(true),
            has_accepted_disclaimer: Some(true),
            name: FieldUpdate::from_text(&self.name),
            specialty: FieldUpdate::from_text(&self.specialty),
            bio: FieldUpdate::from_text(&self.bio),
            hourly_rate: FieldUpdate::from_option(self.hourly_rate),
            scheduling_link: FieldUpdate::from_text(&self.scheduling_link),
            ..ProfilePatch::default()
        }
    }
}

/// Where the flow currently is
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingStage {
    /// Choosing between user, coach and doctor
    RoleSelection,
    /// Standard user intake
    Standard(StandardIntake),
    /// Coach or doctor intake
    Professional(ProfessionalIntake),
    /// Onboarding finished
    Main,
}

/// The onboarding flow
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingFlow {
    stage: OnboardingStage,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingFlow {
    /// Fresh flow at role selection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stage: OnboardingStage::RoleSelection,
        }
    }

    /// Flow for a stored profile: `Main` if it already finished onboarding
    #[must_use]
    pub const fn resume(profile: &Profile) -> Self {
        if profile.has_completed_onboarding {
            Self {
                stage: OnboardingStage::Main,
            }
        } else {
            Self::new()
        }
    }

    /// Current stage
    #[must_use]
    pub const fn stage(&self) -> &OnboardingStage {
        &self.stage
    }

    /// Whether the flow reached `Main`
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.stage, OnboardingStage::Main)
    }

    /// Standard intake answers, when in that branch
    pub fn standard_mut(&mut self) -> Option<&mut StandardIntake> {
        match &mut self.stage {
            OnboardingStage::Standard(intake) => Some(intake),
            _ => None,
        }
    }

    /// Professional intake answers, when in that branch
    pub fn professional_mut(&mut self) -> Option<&mut ProfessionalIntake> {
        match &mut self.stage {
            OnboardingStage::Professional(intake) => Some(intake),
            _ => None,
        }
    }

    /// Choose a role, patch it into the profile and enter the matching intake
    ///
    /// # Errors
    ///
    /// Returns an error if the flow is past role selection or the write fails
    pub async fn select_role(&mut self, store: &UserStore, role: UserRole) -> AppResult<()> {
        if self.stage != OnboardingStage::RoleSelection {
            return Err(AppError::invalid_input(
                "Role can only be chosen at the start of onboarding",
            ));
        }

        store
            .update_profile(ProfilePatch {
                role: Some(role),
                ..ProfilePatch::default()
            })
            .await?;

        self.stage = if role.is_professional() {
            OnboardingStage::Professional(ProfessionalIntake::new(role))
        } else {
            OnboardingStage::Standard(StandardIntake::default())
        };
        info!(role = role.as_str(), "Onboarding role selected");
        Ok(())
    }

    /// Move to the next step, or finish from the last one
    ///
    /// Finishing writes the completion patch; the flow only reaches `Main`
    /// after that write succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the step guard fails, the flow is not in an
    /// intake, or the completion write fails
    pub async fn advance(&mut self, store: &UserStore) -> AppResult<()> {
        let patch = match &mut self.stage {
            OnboardingStage::Standard(intake) => {
                intake.check_step()?;
                match intake.step.next() {
                    Some(next) => {
                        intake.step = next;
                        return Ok(());
                    }
                    None => intake.completion_patch(),
                }
            }
            OnboardingStage::Professional(intake) => {
                intake.check_step()?;
                match intake.step.next() {
                    Some(next) => {
                        intake.step = next;
                        return Ok(());
                    }
                    None => intake.completion_patch(),
                }
            }
            OnboardingStage::RoleSelection => {
                return Err(AppError::invalid_input("Choose a role before continuing"));
            }
            OnboardingStage::Main => {
                return Err(AppError::invalid_input("Onboarding is already complete"));
            }
        };

        let profile = store.update_profile(patch).await?;
        self.stage = OnboardingStage::Main;
        info!(role = profile.role.as_str(), "Onboarding complete");
        Ok(())
    }

    /// Go back one step within the current intake
    ///
    /// # Errors
    ///
    /// Returns an error on the first step or outside an intake
    pub fn back(&mut self) -> AppResult<()> {
        let previous = match &mut self.stage {
            OnboardingStage::Standard(intake) => intake.step.previous().map(|step| {
                intake.step = step;
            }),
            OnboardingStage::Professional(intake) => intake.step.previous().map(|step| {
                intake.step = step;
            }),
            OnboardingStage::RoleSelection | OnboardingStage::Main => None,
        };
        previous.ok_or_else(|| AppError::invalid_input("No previous onboarding step"))
    }
}

/// Parse an optional positive measurement from form text
pub(crate) fn parse_measurement(field: &str, raw: &str) -> AppResult<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(Some(value)),
        _ => Err(AppError::invalid_input(format!(
            "{field} must be a positive number, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn steps_walk_forward_and_back() {
        let mut step = StandardStep::Welcome;
        let mut seen = vec![step.number()];
        while let Some(next) = step.next() {
            step = next;
            seen.push(step.number());
        }
        assert_eq!(seen, (1..=StandardStep::COUNT).collect::<Vec<_>>());
        assert_eq!(StandardStep::Welcome.previous(), None);
        assert_eq!(
            ProfessionalStep::Booking.previous(),
            Some(ProfessionalStep::Pricing)
        );
    }

    #[test]
    fn measurement_parsing() {
        assert_eq!(parse_measurement("weight", " 82.5 ").unwrap(), Some(82.5));
        assert_eq!(parse_measurement("weight", "").unwrap(), None);
        assert!(parse_measurement("weight", "-3").is_err());
        assert!(parse_measurement("weight", "heavy").is_err());
    }

    #[test]
    fn professional_patch_trims_text() {
        let mut intake = ProfessionalIntake::new(UserRole::Coach);
        intake.name = "  Sam ".to_owned();
        intake.specialty = "Strength".to_owned();
        intake.bio = "Ten years coaching".to_owned();

        let patch = intake.completion_patch();
        assert_eq!(patch.name, FieldUpdate::Set("Sam".to_owned()));
        assert_eq!(patch.scheduling_link, FieldUpdate::Clear);
        assert_eq!(patch.role, None);
    }
}
