// ABOUTME: Catalog, recommendation and favorite commands for peptidion-cli
// ABOUTME: Entries are printed with the user's favorite flag attached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use peptidion::catalog::{with_favorites, Catalog, CatalogFilter};
use peptidion::errors::{AppError, AppResult};
use peptidion::models::PeptideCategory;
use peptidion::recommendations::recommend_for_profile;
use peptidion::store::UserStore;
use serde_json::json;
use tracing::info;

use super::print_json;

pub fn list(
    store: &UserStore,
    category: Option<PeptideCategory>,
    query: Option<String>,
) -> AppResult<()> {
    let entries = Catalog::builtin().filter(&CatalogFilter { category, query });
    let favorites = store.favorites();
    print_json(&with_favorites(&entries, favorites.as_slice()))
}

pub fn show(store: &UserStore, id: &str) -> AppResult<()> {
    let entry = Catalog::builtin()
        .get(id)
        .ok_or_else(|| AppError::not_found(format!("Catalog entry {id} not found")))?;
    let favorites = store.favorites();
    print_json(&with_favorites(&[entry], favorites.as_slice()))
}

pub fn recommend(store: &UserStore) -> AppResult<()> {
    let profile = store.profile();
    if profile.goals.is_empty() {
        println!("No goals selected yet; run onboarding or `profile set --goal <goal>` first");
        return Ok(());
    }
    let entries = recommend_for_profile(&profile, &Catalog::builtin());
    let favorites = store.favorites();
    let goals: Vec<_> = profile.goals.iter().map(|goal| goal.label()).collect();
    print_json(&json!({
        "goals": goals,
        "recommendations": with_favorites(&entries, favorites.as_slice()),
    }))
}

pub fn categories() -> AppResult<()> {
    let catalog = Catalog::builtin();
    let rows: Vec<_> = PeptideCategory::ALL
        .iter()
        .map(|category| {
            json!({
                "id": category.as_str(),
                "label": category.label(),
                "entries": catalog.by_category(*category).len(),
            })
        })
        .collect();
    print_json(&rows)
}

pub async fn toggle_favorite(store: &UserStore, id: &str) -> AppResult<()> {
    if Catalog::builtin().get(id).is_none() {
        return Err(AppError::not_found(format!("Catalog entry {id} not found")));
    }
    let now_favorite = store.toggle_favorite(id).await?;
    info!(entry = id, favorite = now_favorite, "Favorite toggled");
    println!(
        "{id} {}",
        if now_favorite { "added to favorites" } else { "removed from favorites" }
    );
    Ok(())
}

pub fn favorites(store: &UserStore) -> AppResult<()> {
    print_json(&store.favorite_entries(&Catalog::builtin()))
}
