// ABOUTME: Read-only access to the compiled-in peptide catalog
// ABOUTME: Lookup by id, category filtering, text search and favorite decoration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

use peptidion_core::models::{CatalogEntry, PeptideCategory};
use serde::Serialize;

/// Built-in catalog data
pub mod entries;

/// Filter applied by the learn screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Restrict to one category (`None` = all)
    pub category: Option<PeptideCategory>,
    /// Case-insensitive text matched against name and short description
    pub query: Option<String>,
}

/// Catalog entry decorated with the user's favorite flag
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteAware<'a> {
    /// The entry
    #[serde(flatten)]
    pub entry: &'a CatalogEntry,
    /// Whether the entry is in the favorite set
    pub is_favorite: bool,
}

/// Immutable view over a list of catalog entries
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [CatalogEntry],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The compiled-in catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: &entries::BUILTIN_ENTRIES,
        }
    }

    /// Catalog over caller-supplied static entries
    #[must_use]
    pub const fn from_entries(entries: &'static [CatalogEntry]) -> Self {
        Self { entries }
    }

    /// All entries in catalog order
    #[must_use]
    pub const fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    /// Look up an entry by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries matching `filter`, in catalog order
    #[must_use]
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&'static CatalogEntry> {
        let query = filter
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        self.entries
            .iter()
            .filter(|entry| filter.category.is_none_or(|c| entry.category == c))
            .filter(|entry| {
                query.as_deref().is_none_or(|q| {
                    entry.name.to_lowercase().contains(q)
                        || entry.short_description.to_lowercase().contains(q)
                })
            })
            .collect()
    }

    /// Entries in one category
    #[must_use]
    pub fn by_category(&self, category: PeptideCategory) -> Vec<&'static CatalogEntry> {
        self.filter(&CatalogFilter {
            category: Some(category),
            query: None,
        })
    }

    /// Free-text search over name and short description
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&'static CatalogEntry> {
        self.filter(&CatalogFilter {
            category: None,
            query: Some(query.to_owned()),
        })
    }

    /// Favorite entries in catalog order; unknown ids are skipped
    #[must_use]
    pub fn favorites<S: AsRef<str>>(&self, favorite_ids: &[S]) -> Vec<&'static CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| favorite_ids.iter().any(|id| id.as_ref() == entry.id))
            .collect()
    }
}

/// Attach favorite flags to `entries`
#[must_use]
pub fn with_favorites<'a, S: AsRef<str>>(
    entries: &[&'a CatalogEntry],
    favorite_ids: &[S],
) -> Vec<FavoriteAware<'a>> {
    entries
        .iter()
        .map(|&entry| FavoriteAware {
            entry,
            is_favorite: favorite_ids.iter().any(|id| id.as_ref() == entry.id),
        })
        .collect()
}
