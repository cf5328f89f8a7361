// ABOUTME: Profile and collection store over the key-value backend
// ABOUTME: Write-then-publish mutations with per-slot serialization and watch channels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

//! # User Store
//!
//! [`UserStore`] owns the five persisted slots: the profile record and the
//! photo, body stat, cycle and favorite collections. It is constructed once
//! at startup and shared by reference (usually behind an `Arc`).
//!
//! Every mutation follows the same sequence:
//!
//! 1. take the slot's write lock so mutations on one slot never interleave
//! 2. compute the new value from the current one
//! 3. write the full serialized value to the backend
//! 4. only after the write succeeds, publish the value to subscribers
//!
//! A failed write returns the error and leaves both the in-memory value and
//! what subscribers see untouched.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use peptidion_core::models::{
    BodyStat, CatalogEntry, Cycle, PhotoRating, PhotoType, ProfilePatch, ProgressPhoto, Profile,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::constants::cycles::DEFAULT_FREQUENCY;
use crate::constants::storage_keys;
use crate::errors::{AppError, AppResult};
use crate::storage::KeyValueStore;

/// Behavior when opening the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Reset a slot holding malformed JSON to its default instead of failing
    pub recover_corrupt_state: bool,
}

/// Input for [`UserStore::record_photo`]
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoDraft {
    /// Image reference
    pub uri: String,
    /// Body angle
    pub photo_type: PhotoType,
    /// Weight at capture time
    pub weight: Option<f64>,
    /// Body fat at capture time
    pub body_fat: Option<f64>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Rating from the analysis service
    pub rating: Option<PhotoRating>,
}

impl PhotoDraft {
    /// Draft with only the required fields
    pub fn new(uri: impl Into<String>, photo_type: PhotoType) -> Self {
        Self {
            uri: uri.into(),
            photo_type,
            weight: None,
            body_fat: None,
            notes: None,
            rating: None,
        }
    }
}

/// One persisted value with its write lock and publication channel
struct Slot<T> {
    key: &'static str,
    write_lock: Mutex<()>,
    published: watch::Sender<T>,
}

impl<T> Slot<T> {
    fn new(key: &'static str, initial: T) -> Self {
        let (published, _) = watch::channel(initial);
        Self {
            key,
            write_lock: Mutex::new(()),
            published,
        }
    }
}

/// The on-device profile and collection store
pub struct UserStore {
    backend: Arc<dyn KeyValueStore>,
    profile: Slot<Profile>,
    photos: Slot<Vec<ProgressPhoto>>,
    body_stats: Slot<Vec<BodyStat>>,
    cycles: Slot<Vec<Cycle>>,
    favorites: Slot<Vec<String>>,
}

impl fmt::Debug for UserStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserStore")
            .field("backend", &self.backend.backend_info())
            .finish_non_exhaustive()
    }
}

impl UserStore {
    /// Load every slot from `backend`
    ///
    /// Missing slots start from their defaults (a fresh profile, empty
    /// collections).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The backend read fails
    /// - A slot holds malformed JSON and `recover_corrupt_state` is off
    pub async fn open(backend: Arc<dyn KeyValueStore>, options: StoreOptions) -> AppResult<Self> {
        let profile = load_slot(backend.as_ref(), storage_keys::PROFILE, options).await?;
        let photos = load_slot(backend.as_ref(), storage_keys::PHOTOS, options).await?;
        let body_stats = load_slot(backend.as_ref(), storage_keys::BODY_STATS, options).await?;
        let cycles = load_slot(backend.as_ref(), storage_keys::CYCLES, options).await?;
        let favorites = load_slot(backend.as_ref(), storage_keys::FAVORITES, options).await?;

        info!(backend = backend.backend_info(), "Loaded user store");

        Ok(Self {
            profile: Slot::new(storage_keys::PROFILE, profile),
            photos: Slot::new(storage_keys::PHOTOS, photos),
            body_stats: Slot::new(storage_keys::BODY_STATS, body_stats),
            cycles: Slot::new(storage_keys::CYCLES, cycles),
            favorites: Slot::new(storage_keys::FAVORITES, favorites),
            backend,
        })
    }

    // ================================
    // Reads
    // ================================

    /// Current profile
    #[must_use]
    pub fn profile(&self) -> Profile {
        self.profile.published.borrow().clone()
    }

    /// Progress photos, newest first
    #[must_use]
    pub fn photos(&self) -> Vec<ProgressPhoto> {
        self.photos.published.borrow().clone()
    }

    /// Body stats, newest first
    #[must_use]
    pub fn body_stats(&self) -> Vec<BodyStat> {
        self.body_stats.published.borrow().clone()
    }

    /// Cycles, newest first
    #[must_use]
    pub fn cycles(&self) -> Vec<Cycle> {
        self.cycles.published.borrow().clone()
    }

    /// Favorite catalog ids in the order they were added
    #[must_use]
    pub fn favorites(&self) -> Vec<String> {
        self.favorites.published.borrow().clone()
    }

    /// Whether a catalog id is a favorite
    #[must_use]
    pub fn is_favorite(&self, entry_id: &str) -> bool {
        self.favorites
            .published
            .borrow()
            .iter()
            .any(|id| id == entry_id)
    }

    /// Favorite entries that exist in `catalog`, in catalog order
    #[must_use]
    pub fn favorite_entries(&self, catalog: &Catalog) -> Vec<&'static CatalogEntry> {
        let favorites = self.favorites.published.borrow();
        catalog.favorites(favorites.as_slice())
    }

    /// Cycles with the active flag set
    #[must_use]
    pub fn active_cycles(&self) -> Vec<Cycle> {
        self.cycles
            .published
            .borrow()
            .iter()
            .filter(|cycle| cycle.is_active)
            .cloned()
            .collect()
    }

    // ================================
    // Subscriptions
    // ================================

    /// Receive every published profile
    #[must_use]
    pub fn subscribe_profile(&self) -> watch::Receiver<Profile> {
        self.profile.published.subscribe()
    }

    /// Receive every published photo list
    #[must_use]
    pub fn subscribe_photos(&self) -> watch::Receiver<Vec<ProgressPhoto>> {
        self.photos.published.subscribe()
    }

    /// Receive every published body stat list
    #[must_use]
    pub fn subscribe_body_stats(&self) -> watch::Receiver<Vec<BodyStat>> {
        self.body_stats.published.subscribe()
    }

    /// Receive every published cycle list
    #[must_use]
    pub fn subscribe_cycles(&self) -> watch::Receiver<Vec<Cycle>> {
        self.cycles.published.subscribe()
    }

    /// Receive every published favorite list
    #[must_use]
    pub fn subscribe_favorites(&self) -> watch::Receiver<Vec<String>> {
        self.favorites.published.subscribe()
    }

    // ================================
    // Mutations
    // ================================

    /// Merge `patch` into the profile
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the profile is then unchanged
    pub async fn update_profile(&self, patch: ProfilePatch) -> AppResult<Profile> {
        self.mutate(&self.profile, |current| Ok(patch.apply(current)))
            .await
    }

    /// Prepend a progress photo
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the collection is then unchanged
    pub async fn add_photo(&self, photo: ProgressPhoto) -> AppResult<Vec<ProgressPhoto>> {
        self.mutate(&self.photos, |current| Ok(prepend(photo, current)))
            .await
    }

    /// Build a photo with a fresh id and the current time, then prepend it
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn record_photo(&self, draft: PhotoDraft) -> AppResult<ProgressPhoto> {
        let photo = ProgressPhoto {
            weight: draft.weight,
            body_fat: draft.body_fat,
            notes: draft.notes,
            rating: draft.rating,
            ..ProgressPhoto::new(draft.uri, draft.photo_type)
        };
        self.add_photo(photo.clone()).await?;
        Ok(photo)
    }

    /// Prepend a body stat entry
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the collection is then unchanged
    pub async fn add_body_stat(&self, stat: BodyStat) -> AppResult<Vec<BodyStat>> {
        self.mutate(&self.body_stats, |current| Ok(prepend(stat, current)))
            .await
    }

    /// Prepend a cycle
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the collection is then unchanged
    pub async fn add_cycle(&self, cycle: Cycle) -> AppResult<Vec<Cycle>> {
        self.mutate(&self.cycles, |current| Ok(prepend(cycle, current)))
            .await
    }

    /// Replace the cycle whose id matches `cycle.id`
    ///
    /// An unknown id leaves the list as it was; the unchanged list is still
    /// written back.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the collection is then unchanged
    pub async fn update_cycle(&self, cycle: Cycle) -> AppResult<Vec<Cycle>> {
        self.mutate(&self.cycles, |current| {
            if !current.iter().any(|c| c.id == cycle.id) {
                warn!(cycle_id = %cycle.id, "Cycle update matched no stored cycle");
            }
            Ok(current
                .iter()
                .map(|c| if c.id == cycle.id { cycle.clone() } else { c.clone() })
                .collect())
        })
        .await
    }

    /// Start a cycle of `entry`'s protocol now
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn start_cycle(&self, entry: &CatalogEntry) -> AppResult<Cycle> {
        let cycle = Cycle {
            id: Uuid::new_v4().to_string(),
            peptide_id: entry.id.to_owned(),
            peptide_name: entry.name.to_owned(),
            start_date: Utc::now(),
            end_date: None,
            dosage: entry.dosage_example.to_owned(),
            frequency: DEFAULT_FREQUENCY.to_owned(),
            notes: None,
            side_effects: Vec::new(),
            is_active: true,
        };
        self.add_cycle(cycle.clone()).await?;
        info!(cycle_id = %cycle.id, peptide = entry.id, "Started cycle");
        Ok(cycle)
    }

    /// End the cycle with `cycle_id` now
    ///
    /// # Errors
    ///
    /// Returns an error if no cycle has that id or the write fails
    pub async fn end_cycle(&self, cycle_id: &str) -> AppResult<Cycle> {
        let existing = self
            .cycles
            .published
            .borrow()
            .iter()
            .find(|c| c.id == cycle_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Cycle {cycle_id} not found")))?;

        let ended = existing.ended(Utc::now());
        self.update_cycle(ended.clone()).await?;
        Ok(ended)
    }

    /// Flip favorite membership of a catalog id
    ///
    /// Returns whether the id is a favorite afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the set is then unchanged
    pub async fn toggle_favorite(&self, entry_id: &str) -> AppResult<bool> {
        let updated = self
            .mutate(&self.favorites, |current| {
                let mut next = current.clone();
                if next.iter().any(|id| id == entry_id) {
                    next.retain(|id| id != entry_id);
                } else {
                    next.push(entry_id.to_owned());
                }
                Ok(next)
            })
            .await?;

        Ok(updated.iter().any(|id| id == entry_id))
    }

    /// Serialize, persist, then publish
    async fn mutate<T, F>(&self, slot: &Slot<T>, compute: F) -> AppResult<T>
    where
        T: Serialize + Clone + Send + Sync,
        F: FnOnce(&T) -> AppResult<T>,
    {
        let _guard = slot.write_lock.lock().await;

        let current = slot.published.borrow().clone();
        let next = compute(&current)?;
        let json = serde_json::to_string(&next)?;

        self.backend.set(slot.key, &json).await.inspect_err(|e| {
            warn!(key = slot.key, error = %e, "Slot write failed, keeping previous value");
        })?;

        slot.published.send_replace(next.clone());
        debug!(key = slot.key, "Published slot update");
        Ok(next)
    }
}

fn prepend<T: Clone>(item: T, current: &[T]) -> Vec<T> {
    let mut next = Vec::with_capacity(current.len() + 1);
    next.push(item);
    next.extend_from_slice(current);
    next
}

async fn load_slot<T>(backend: &dyn KeyValueStore, key: &str, options: StoreOptions) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = backend.get(key).await? else {
        debug!(key, "Slot empty, starting from default");
        return Ok(T::default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) if options.recover_corrupt_state => {
            warn!(key, error = %e, "Slot holds malformed JSON, resetting to default");
            Ok(T::default())
        }
        Err(e) => Err(AppError::corrupt_state(key, e)),
    }
}
