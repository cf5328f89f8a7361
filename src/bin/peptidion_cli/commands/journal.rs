// ABOUTME: Cycle, photo and body stat commands for peptidion-cli
// ABOUTME: Photo capture optionally runs the analysis service before saving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use std::path::PathBuf;

use chrono::Utc;
use peptidion::analysis::{image_file_data_url, AnalysisService};
use peptidion::catalog::Catalog;
use peptidion::config::AppConfig;
use peptidion::errors::{AppError, AppResult, ErrorCode};
use peptidion::models::{BodyStat, PhotoType};
use peptidion::progress::{filter_photos, latest_weight};
use peptidion::store::{PhotoDraft, UserStore};
use serde_json::json;
use tracing::warn;

use super::print_json;

pub struct PhotoInput {
    pub path: PathBuf,
    pub photo_type: PhotoType,
    pub weight: Option<f64>,
    pub body_fat: Option<f64>,
    pub notes: Option<String>,
    pub analyze: bool,
}

pub async fn start_cycle(store: &UserStore, peptide_id: &str) -> AppResult<()> {
    let entry = Catalog::builtin()
        .get(peptide_id)
        .ok_or_else(|| AppError::not_found(format!("Catalog entry {peptide_id} not found")))?;
    let cycle = store.start_cycle(entry).await?;
    print_json(&cycle)
}

pub async fn end_cycle(store: &UserStore, id: &str) -> AppResult<()> {
    let cycle = store.end_cycle(id).await?;
    print_json(&cycle)
}

pub fn cycles(store: &UserStore, active_only: bool) -> AppResult<()> {
    let cycles = if active_only {
        store.active_cycles()
    } else {
        store.cycles()
    };
    print_json(&cycles)
}

pub async fn add_photo(store: &UserStore, config: &AppConfig, input: PhotoInput) -> AppResult<()> {
    let rating = if input.analyze {
        let service = AnalysisService::from_profile(&store.profile(), config.analysis.clone())?
            .ok_or_else(|| {
                AppError::new(
                    ErrorCode::FeatureDisabled,
                    "Photo analysis needs a credential; set one with `profile set --api-key`",
                )
            })?;
        let image_url = image_file_data_url(&input.path).await?;
        match service.rate(&image_url, input.photo_type).await {
            Ok(rating) => Some(rating),
            Err(e) => {
                // the photo is still worth keeping without a rating
                warn!(error = %e, "Photo analysis failed, saving without rating");
                None
            }
        }
    } else {
        None
    };

    let draft = PhotoDraft {
        weight: input.weight,
        body_fat: input.body_fat,
        notes: input.notes,
        rating,
        ..PhotoDraft::new(input.path.display().to_string(), input.photo_type)
    };
    let photo = store.record_photo(draft).await?;
    print_json(&photo)
}

pub fn photos(store: &UserStore, photo_type: Option<PhotoType>) -> AppResult<()> {
    let photos = store.photos();
    print_json(&filter_photos(&photos, photo_type))
}

pub async fn add_stat(
    store: &UserStore,
    weight: Option<f64>,
    body_fat: Option<f64>,
    muscle_mass: Option<f64>,
    notes: Option<String>,
) -> AppResult<()> {
    if weight.is_none() && body_fat.is_none() && muscle_mass.is_none() {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            "Provide at least one of --weight, --body-fat or --muscle-mass",
        ));
    }

    let stat = BodyStat {
        date: Utc::now(),
        weight,
        body_fat,
        muscle_mass,
        notes,
    };
    store.add_body_stat(stat.clone()).await?;
    print_json(&stat)
}

pub fn stats(store: &UserStore) -> AppResult<()> {
    let stats = store.body_stats();
    print_json(&json!({
        "latestWeight": latest_weight(&stats),
        "entries": stats,
    }))
}
