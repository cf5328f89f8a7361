// ABOUTME: Static coach and doctor directory with search and role filtering
// ABOUTME: Also validates the external scheduling links professionals publish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use std::fmt;

use peptidion_core::models::{Coach, ProfessionalRole};
use url::Url;

use crate::errors::{AppError, AppResult};

/// Built-in directory listings
pub static DIRECTORY: [Coach; 5] = [
    Coach {
        id: "dr-elena-marsh",
        name: "Dr. Elena Marsh",
        role: ProfessionalRole::Doctor,
        specialty: "Anti-Aging & Longevity Medicine",
        rating: 4.9,
        hourly_rate: 220.0,
        experience: 14,
        patients_count: 860,
        bio: Some("Board-certified internist focused on metabolic health and healthy aging."),
        scheduling_link: Some("https://calendly.com/dr-elena-marsh"),
    },
    Coach {
        id: "marcus-reid",
        name: "Marcus Reid",
        role: ProfessionalRole::Coach,
        specialty: "Muscle Gain & Performance",
        rating: 4.8,
        hourly_rate: 95.0,
        experience: 9,
        patients_count: 410,
        bio: Some("Strength coach working with athletes on body recomposition."),
        scheduling_link: Some("https://calendly.com/marcus-reid"),
    },
    Coach {
        id: "dr-samir-patel",
        name: "Dr. Samir Patel",
        role: ProfessionalRole::Doctor,
        specialty: "Sports Medicine & Injury Recovery",
        rating: 4.7,
        hourly_rate: 180.0,
        experience: 11,
        patients_count: 620,
        bio: Some("Sports medicine physician with a focus on tendon and ligament injuries."),
        scheduling_link: None,
    },
    Coach {
        id: "jade-okafor",
        name: "Jade Okafor",
        role: ProfessionalRole::Coach,
        specialty: "Fat Loss & Nutrition",
        rating: 4.9,
        hourly_rate: 80.0,
        experience: 7,
        patients_count: 530,
        bio: Some("Nutrition coach building sustainable fat loss habits."),
        scheduling_link: Some("https://calendly.com/jade-okafor"),
    },
    Coach {
        id: "dr-hannah-lowe",
        name: "Dr. Hannah Lowe",
        role: ProfessionalRole::Doctor,
        specialty: "Dermatology & Skin Health",
        rating: 4.6,
        hourly_rate: 200.0,
        experience: 12,
        patients_count: 700,
        bio: None,
        scheduling_link: Some("https://calendly.com/dr-hannah-lowe"),
    },
];

/// Directory role filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    /// Coaches and doctors
    #[default]
    All,
    /// Doctors only
    Doctor,
    /// Coaches only
    Coach,
}

impl RoleFilter {
    /// Parse `all`, `coach` or `doctor` (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(Self::All),
            "coach" | "coaches" => Some(Self::Coach),
            "doctor" | "doctors" => Some(Self::Doctor),
            _ => None,
        }
    }

    /// Whether `role` passes the filter
    #[must_use]
    pub const fn matches(&self, role: ProfessionalRole) -> bool {
        match self {
            Self::All => true,
            Self::Doctor => matches!(role, ProfessionalRole::Doctor),
            Self::Coach => matches!(role, ProfessionalRole::Coach),
        }
    }
}

/// Directory listings passing `role` whose name or specialty contains `query`
#[must_use]
pub fn find_coaches(role: RoleFilter, query: &str) -> Vec<&'static Coach> {
    let query = query.trim().to_lowercase();
    DIRECTORY
        .iter()
        .filter(|coach| role.matches(coach.role))
        .filter(|coach| {
            query.is_empty()
                || coach.name.to_lowercase().contains(&query)
                || coach.specialty.to_lowercase().contains(&query)
        })
        .collect()
}

/// A validated external booking link
///
/// Only absolute `http` and `https` URLs with a host are accepted. The
/// link is opaque otherwise; nothing is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulingLink(Url);

impl SchedulingLink {
    /// Validate `raw`
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for unparsable URLs, other schemes or
    /// missing hosts
    pub fn parse(raw: &str) -> AppResult<Self> {
        let url = Url::parse(raw.trim())
            .map_err(|e| AppError::invalid_input(format!("Invalid scheduling link: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::invalid_input(format!(
                "Scheduling link must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(AppError::invalid_input("Scheduling link has no host"));
        }

        Ok(Self(url))
    }

    /// The link as a string
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SchedulingLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
