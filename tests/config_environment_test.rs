// ABOUTME: Integration tests for environment-driven directory configuration
// ABOUTME: Verifies SOUSCHEF_FOOD_DATASET override and bundled-path default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;
use std::path::Path;

use serial_test::serial;
use souschef_pantry::config::DirectoryConfig;
use souschef_pantry::constants::{DEFAULT_FOOD_DATASET_PATH, FOOD_DATASET_ENV};

#[test]
#[serial]
fn test_default_points_at_bundled_dataset() {
    std::env::remove_var(FOOD_DATASET_ENV);

    let config = DirectoryConfig::from_env();
    assert_eq!(config.dataset_path, Path::new(DEFAULT_FOOD_DATASET_PATH));
}

#[test]
#[serial]
fn test_env_var_overrides_dataset_path() {
    std::env::set_var(FOOD_DATASET_ENV, "/tmp/custom_foods.json");

    let config = DirectoryConfig::from_env();
    assert_eq!(config.dataset_path, Path::new("/tmp/custom_foods.json"));

    std::env::remove_var(FOOD_DATASET_ENV);
}

#[test]
#[serial]
fn test_load_directory_from_override_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"entries": {"egg": "food_e1"}}"#).unwrap();
    file.flush().unwrap();

    std::env::set_var(FOOD_DATASET_ENV, file.path());

    let directory = DirectoryConfig::from_env().load_directory();
    assert!(!directory.is_degraded());
    assert_eq!(directory.count(), 1);

    std::env::remove_var(FOOD_DATASET_ENV);
}

#[test]
#[serial]
fn test_load_directory_degrades_on_bad_override() {
    std::env::set_var(FOOD_DATASET_ENV, "/nonexistent/foods.json");

    let directory = DirectoryConfig::from_env().load_directory();
    assert!(directory.is_degraded());

    std::env::remove_var(FOOD_DATASET_ENV);
}
