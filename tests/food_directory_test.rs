// ABOUTME: Integration tests for the food identifier directory
// ABOUTME: Covers dataset loading, fail-soft degradation, and lookup normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;

use souschef_pantry::directory::{normalize_name, FoodDirectory};
use souschef_pantry::errors::DirectoryError;

fn write_dataset(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_try_load_valid_dataset() {
    let file = write_dataset(
        r#"{"entries": {"egg": "food_e1", "milk": "food_m1", "flour": "food_f1"}}"#,
    );

    let directory = FoodDirectory::try_load(file.path()).unwrap();
    assert_eq!(directory.count(), 3);
    assert!(!directory.is_degraded());
    assert_eq!(directory.lookup("egg").unwrap().as_str(), "food_e1");
    assert!(directory.lookup("butter").is_none());
}

#[test]
fn test_load_missing_dataset_degrades_to_fallback() {
    let directory = FoodDirectory::load("/nonexistent/path/food_directory.json");

    assert!(directory.is_degraded());
    assert!(directory.count() > 0);
}

#[test]
fn test_load_malformed_dataset_degrades_to_fallback() {
    let file = write_dataset("this is not json {{");

    let directory = FoodDirectory::load(file.path());
    assert!(directory.is_degraded());
}

#[test]
fn test_try_load_missing_dataset_is_io_error() {
    let err = FoodDirectory::try_load("/nonexistent/path/food_directory.json").unwrap_err();
    assert!(matches!(err, DirectoryError::Io(_)));
}

#[test]
fn test_try_load_malformed_dataset_is_parse_error() {
    let file = write_dataset(r#"{"entries": 42}"#);

    let err = FoodDirectory::try_load(file.path()).unwrap_err();
    assert!(matches!(err, DirectoryError::Parse(_)));
}

#[test]
fn test_try_load_empty_dataset_is_error() {
    let file = write_dataset(r#"{"entries": {}}"#);

    let err = FoodDirectory::try_load(file.path()).unwrap_err();
    assert!(matches!(err, DirectoryError::Empty));
}

#[test]
fn test_fallback_resolves_documented_staples() {
    let directory = FoodDirectory::fallback();

    assert!(directory.is_degraded());
    for staple in ["egg", "apple", "banana", "potato"] {
        assert!(
            directory.lookup(staple).is_some(),
            "fallback table must resolve {staple}"
        );
    }
}

#[test]
fn test_lookup_is_case_insensitive() {
    let directory = FoodDirectory::from_entries([("egg", "food_e1")]);

    assert!(directory.lookup("EGG").is_some());
    assert!(directory.lookup("Egg").is_some());
    assert!(directory.lookup("egg").is_some());
}

#[test]
fn test_lookup_is_whitespace_insensitive() {
    let directory = FoodDirectory::from_entries([("chicken breast", "food_cb1")]);

    assert!(directory.lookup("  chicken   breast ").is_some());
    assert!(directory.lookup("\tChicken Breast\n").is_some());
}

#[test]
fn test_lookup_is_exact_match_only() {
    let directory = FoodDirectory::from_entries([("egg", "food_e1")]);

    // No fuzzy or substring matching
    assert!(directory.lookup("egg yolk").is_none());
    assert!(directory.lookup("eg").is_none());
}

#[test]
fn test_keys_are_normalized_at_load_time() {
    let directory = FoodDirectory::from_entries([("  Olive   Oil ", "food_oo1")]);

    assert_eq!(directory.count(), 1);
    assert!(directory.lookup("olive oil").is_some());
}

#[test]
fn test_duplicate_keys_after_normalization_keep_last() {
    let directory = FoodDirectory::from_entries([("Egg", "food_old"), (" egg ", "food_new")]);

    assert_eq!(directory.count(), 1);
    assert_eq!(directory.lookup("egg").unwrap().as_str(), "food_new");
}

#[test]
fn test_blank_keys_are_dropped() {
    let directory = FoodDirectory::from_entries([("   ", "food_x"), ("egg", "food_e1")]);

    assert_eq!(directory.count(), 1);
}

#[test]
fn test_normalize_name() {
    assert_eq!(normalize_name("  Chicken   Breast "), "chicken breast");
    assert_eq!(normalize_name("EGG"), "egg");
    assert_eq!(normalize_name("   "), "");
}

#[test]
fn test_bundled_dataset_loads() {
    let directory = FoodDirectory::load("data/food_directory.json");

    assert!(!directory.is_degraded());
    assert!(directory.count() >= 90);
    assert!(directory.lookup("eggs").is_some());
    assert!(directory.lookup("olive oil").is_some());
}
