// ABOUTME: Integration tests for the compiled-in peptide catalog
// ABOUTME: Data integrity, filtering, search and favorite decoration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Peptidion

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

use std::collections::HashSet;

use peptidion::catalog::{with_favorites, Catalog, CatalogFilter};
use peptidion::models::PeptideCategory;

#[test]
fn entries_have_unique_ids_and_goals() {
    let catalog = Catalog::builtin();
    assert!(!catalog.is_empty());

    let ids: HashSet<_> = catalog.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), catalog.len());

    for entry in catalog.entries() {
        assert!(!entry.goals.is_empty(), "{} has no goals", entry.id);
        assert!(!entry.experience_levels.is_empty(), "{} has no levels", entry.id);
        assert!(!entry.benefits.is_empty());
        assert!(!entry.risks.is_empty());
    }
}

#[test]
fn every_category_is_populated() {
    let catalog = Catalog::builtin();
    for category in PeptideCategory::ALL {
        assert!(
            !catalog.by_category(category).is_empty(),
            "no entries in {}",
            category.as_str()
        );
    }
}

#[test]
fn search_is_case_insensitive_over_name_and_description() {
    let catalog = Catalog::builtin();

    let by_name: Vec<_> = catalog.search("bpc").iter().map(|e| e.id).collect();
    assert_eq!(by_name, vec!["bpc-157"]);

    let by_description: Vec<_> = catalog.search("COPPER").iter().map(|e| e.id).collect();
    assert_eq!(by_description, vec!["ghk-cu"]);

    assert_eq!(catalog.search("   ").len(), catalog.len());
    assert!(catalog.search("no such peptide").is_empty());
}

#[test]
fn category_and_query_combine() {
    let catalog = Catalog::builtin();
    let hits = catalog.filter(&CatalogFilter {
        category: Some(PeptideCategory::Cognitive),
        query: Some("anx".to_owned()),
    });
    let ids: Vec<_> = hits.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["selank"]);
}

#[test]
fn favorites_follow_catalog_order() {
    let catalog = Catalog::builtin();
    let favorites = vec!["ghk-cu".to_owned(), "bpc-157".to_owned(), "gone".to_owned()];

    let ids: Vec<_> = catalog.favorites(favorites.as_slice()).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["bpc-157", "ghk-cu"]);

    let decorated = with_favorites(&catalog.by_category(PeptideCategory::Recovery), favorites.as_slice());
    let flags: Vec<_> = decorated.iter().map(|d| (d.entry.id, d.is_favorite)).collect();
    assert_eq!(flags, vec![("bpc-157", true), ("tb-500", false)]);

    let json = serde_json::to_value(&decorated[0]).unwrap();
    assert_eq!(json["id"], "bpc-157");
    assert_eq!(json["isFavorite"], true);
}
