// ABOUTME: Application constants grouped by concern
// ABOUTME: Storage slot keys, scoring weights, gamification and analysis defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

/// Key-value slot names
///
/// These match the keys the mobile app wrote, so an exported device store
/// can be loaded as-is.
pub mod storage_keys {
    /// Profile record
    pub const PROFILE: &str = "@peptidion_user";
    /// Progress photo list
    pub const PHOTOS: &str = "@peptidion_photos";
    /// Body stats list
    pub const BODY_STATS: &str = "@peptidion_stats";
    /// Cycle list
    pub const CYCLES: &str = "@peptidion_cycles";
    /// Favorite catalog ids
    pub const FAVORITES: &str = "@peptidion_favorites";
}

/// Recommendation scorer weights
pub mod scoring {
    /// Points per user goal present in the entry's goal list
    pub const GOAL_MATCH_POINTS: u32 = 10;
    /// Points when the entry suits the user's experience level
    pub const LEVEL_MATCH_POINTS: u32 = 5;
    /// Maximum number of recommendations returned
    pub const RECOMMENDATION_LIMIT: usize = 3;
}

/// Level / experience point progression
pub mod gamification {
    /// Experience points per level
    pub const XP_PER_LEVEL: u32 = 100;
    /// Level of a fresh profile
    pub const STARTING_LEVEL: u32 = 1;
}

/// Cycle defaults
pub mod cycles {
    /// Frequency text for a freshly started cycle
    pub const DEFAULT_FREQUENCY: &str = "Daily";
}

/// Photo analysis endpoint defaults
pub mod analysis {
    /// Service name used in error messages and logs
    pub const SERVICE_NAME: &str = "Photo analysis";
    /// OpenAI-compatible base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
    /// Multimodal model
    pub const DEFAULT_MODEL: &str = "gpt-4o";
    /// Completion token budget
    pub const MAX_TOKENS: u32 = 500;
    /// Request timeout
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
    /// Highest score on the rating scale
    pub const MAX_SCORE: f64 = 10.0;
}

/// Avatar image service
pub mod avatars {
    /// Dicebear base URL
    pub const BASE_URL: &str = "https://api.dicebear.com/7.x";
}

/// Environment variable names
pub mod env_config {
    /// Key-value backend URL
    pub const STORAGE_URL: &str = "PEPTIDION_STORAGE_URL";
    /// Reset malformed slots instead of failing
    pub const RECOVER_CORRUPT_STATE: &str = "PEPTIDION_RECOVER_CORRUPT_STATE";
    /// Analysis endpoint base URL
    pub const ANALYSIS_BASE_URL: &str = "PEPTIDION_ANALYSIS_BASE_URL";
    /// Analysis model
    pub const ANALYSIS_MODEL: &str = "PEPTIDION_ANALYSIS_MODEL";
    /// Analysis request timeout
    pub const ANALYSIS_TIMEOUT_SECS: &str = "PEPTIDION_ANALYSIS_TIMEOUT_SECS";
    /// Log output format (`pretty` or `json`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
