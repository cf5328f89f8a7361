// ABOUTME: Coach and doctor directory model
// ABOUTME: Static professional listings shown to end users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use serde::Serialize;

/// Kind of professional in the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfessionalRole {
    /// Fitness coach
    Coach,
    /// Medical doctor
    Doctor,
}

impl ProfessionalRole {
    /// Convert to the tag string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Coach => "coach",
            Self::Doctor => "doctor",
        }
    }
}

/// A directory listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    /// Unique identity
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Coach or doctor
    pub role: ProfessionalRole,
    /// Specialty description
    pub specialty: &'static str,
    /// Average rating (0-5)
    pub rating: f64,
    /// Hourly rate in USD
    pub hourly_rate: f64,
    /// Years of experience
    pub experience: u32,
    /// Number of clients or patients seen
    pub patients_count: u32,
    /// Short bio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<&'static str>,
    /// External booking link
    #[serde(rename = "calendlyLink", skip_serializing_if = "Option::is_none")]
    pub scheduling_link: Option<&'static str>,
}
