// ABOUTME: Non-interactive onboarding for peptidion-cli
// ABOUTME: Drives the onboarding flow step by step with answers from flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use peptidion::errors::{AppError, AppResult};
use peptidion::models::{
    ActivityLevel, ExperienceLevel, Gender, PeptideHistory, ResultsHorizon, UserGoal, UserRole,
};
use peptidion::onboarding::{OnboardingFlow, OnboardingStage};
use peptidion::store::UserStore;

use super::print_json;

pub struct StandardAnswers {
    pub goals: Vec<UserGoal>,
    pub expected: ResultsHorizon,
    pub history: PeptideHistory,
    pub weight: String,
    pub height: String,
    pub body_fat: String,
    pub activity: ActivityLevel,
    pub experience: ExperienceLevel,
    pub tracking: bool,
    pub coaching: bool,
    pub gender: Gender,
}

pub struct ProfessionalAnswers {
    pub role: String,
    pub name: String,
    pub specialty: String,
    pub bio: String,
    pub rate: String,
    pub link: String,
}

fn start(store: &UserStore) -> AppResult<OnboardingFlow> {
    let flow = OnboardingFlow::resume(&store.profile());
    if flow.is_complete() {
        return Err(AppError::invalid_input("Onboarding is already complete"));
    }
    Ok(flow)
}

pub async fn standard(store: &UserStore, answers: StandardAnswers) -> AppResult<()> {
    let mut flow = start(store)?;
    flow.select_role(store, UserRole::User).await?;

    let intake = flow
        .standard_mut()
        .ok_or_else(|| AppError::internal("Standard intake not started"))?;
    intake.select_goals(&answers.goals)?;
    intake.expected_results = answers.expected;
    intake.peptide_history = answers.history;
    intake.set_baseline(&answers.weight, &answers.height, &answers.body_fat)?;
    intake.activity_level = answers.activity;
    intake.experience_level = answers.experience;
    intake.wants_tracking = answers.tracking;
    intake.wants_coaching = answers.coaching;
    intake.gender = answers.gender;

    finish(store, &mut flow).await
}

pub async fn professional(store: &UserStore, answers: ProfessionalAnswers) -> AppResult<()> {
    let role = UserRole::parse(&answers.role)
        .filter(UserRole::is_professional)
        .ok_or_else(|| AppError::invalid_input("Role must be 'coach' or 'doctor'"))?;

    let mut flow = start(store)?;
    flow.select_role(store, role).await?;

    let intake = flow
        .professional_mut()
        .ok_or_else(|| AppError::internal("Professional intake not started"))?;
    println!("{}", intake.welcome_message());
    intake.name = answers.name;
    intake.specialty = answers.specialty;
    intake.bio = answers.bio;
    intake.set_hourly_rate(&answers.rate)?;
    intake.scheduling_link = answers.link;

    finish(store, &mut flow).await
}

async fn finish(store: &UserStore, flow: &mut OnboardingFlow) -> AppResult<()> {
    while *flow.stage() != OnboardingStage::Main {
        flow.advance(store).await?;
    }
    print_json(&store.profile())
}
