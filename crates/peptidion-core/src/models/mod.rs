// ABOUTME: Domain model module root with re-exports of all public types
// ABOUTME: Groups profile, patch, catalog, journal and coach models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

/// Catalog entry types (compiled-in peptide reference data)
pub mod catalog;
/// Coach and doctor directory types
pub mod coach;
/// Progress photos, body stats and cycles
pub mod journal;
/// Typed merge-patch for the profile record
pub mod patch;
/// User profile, goals and enumerations
pub mod profile;

pub use catalog::{CatalogEntry, PeptideCategory};
pub use coach::{Coach, ProfessionalRole};
pub use journal::{BodyStat, Cycle, PhotoRating, PhotoType, ProgressPhoto};
pub use patch::{FieldUpdate, ProfilePatch};
pub use profile::{
    ActivityLevel, ExperienceLevel, Gender, GoalSet, GoalSetError, PeptideHistory, Profile,
    ResultsHorizon, UserGoal, UserRole, MAX_GOALS,
};
