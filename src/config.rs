// ABOUTME: Configuration for the food directory dataset location
// ABOUTME: Environment-first: SOUSCHEF_FOOD_DATASET overrides the bundled default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_FOOD_DATASET_PATH, FOOD_DATASET_ENV};
use crate::directory::FoodDirectory;

/// Configuration for locating the bundled food directory dataset
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Path of the dataset file
    pub dataset_path: PathBuf,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_FOOD_DATASET_PATH),
        }
    }
}

impl DirectoryConfig {
    /// Build configuration from the environment
    ///
    /// Honors `SOUSCHEF_FOOD_DATASET`, falling back to the bundled dataset
    /// path.
    #[must_use]
    pub fn from_env() -> Self {
        let dataset_path = env::var(FOOD_DATASET_ENV)
            .map_or_else(|_| PathBuf::from(DEFAULT_FOOD_DATASET_PATH), PathBuf::from);
        Self { dataset_path }
    }

    /// Load the food directory from the configured dataset path
    ///
    /// Fail-soft: degrades to the embedded fallback table when the dataset
    /// cannot be loaded.
    #[must_use]
    pub fn load_directory(&self) -> FoodDirectory {
        FoodDirectory::load(&self.dataset_path)
    }
}
