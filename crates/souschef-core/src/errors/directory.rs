// ABOUTME: Error type for food directory dataset loading
// ABOUTME: Covers I/O failures, malformed JSON, and empty datasets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

use thiserror::Error;

/// Errors raised while loading the bundled food directory dataset.
///
/// These are surfaced by `FoodDirectory::try_load` for callers that want
/// the cause. The fail-soft `FoodDirectory::load` recovers from all of
/// them by switching to the embedded fallback table.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Dataset file was missing or unreadable
    #[error("failed to read food directory dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file was not valid JSON or had the wrong shape
    #[error("failed to parse food directory dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Dataset parsed but contained no entries
    #[error("food directory dataset contained no entries")]
    Empty,
}
