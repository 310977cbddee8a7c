// ABOUTME: Food Identifier Directory - static name to catalog-id lookup table
// ABOUTME: Loads the bundled dataset once, degrading to an embedded fallback table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

//! # Food Identifier Directory
//!
//! A one-shot, read-only lookup table from canonical food name to catalog
//! [`FoodId`]. The directory is loaded once by the application's composition
//! root and passed by reference to call sites; it is immutable afterwards,
//! so concurrent lookups need no locking.
//!
//! Loading fails soft: a missing, unreadable, or malformed dataset degrades
//! to a small embedded table of staple foods rather than preventing the
//! application from functioning. Callers can observe this via
//! [`FoodDirectory::is_degraded`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::constants::FALLBACK_FOODS;
use crate::errors::DirectoryError;
use crate::models::FoodId;

/// On-disk shape of the bundled dataset
#[derive(Debug, Deserialize)]
struct DirectoryDataset {
    /// Canonical food name to catalog identifier
    entries: HashMap<String, String>,
}

/// Static name-to-identifier lookup table for foods
///
/// See the [module documentation](self) for lifecycle and degradation
/// semantics.
#[derive(Debug, Clone)]
pub struct FoodDirectory {
    entries: HashMap<String, FoodId>,
    degraded: bool,
}

impl FoodDirectory {
    /// Load the dataset at `path`, returning the failure cause on error
    ///
    /// Most callers want the fail-soft [`FoodDirectory::load`] instead.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Io` if the file is missing or unreadable,
    /// `DirectoryError::Parse` if it is not valid dataset JSON, and
    /// `DirectoryError::Empty` if it parsed but contained no entries.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let raw = fs::read_to_string(path)?;
        let dataset: DirectoryDataset = serde_json::from_str(&raw)?;
        if dataset.entries.is_empty() {
            return Err(DirectoryError::Empty);
        }
        Ok(Self::from_entries(dataset.entries))
    }

    /// Load the dataset at `path`, degrading to the embedded fallback table
    ///
    /// Never fails and never panics: any load error is logged and recovered
    /// locally by switching to [`FoodDirectory::fallback`].
    #[must_use]
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(directory) => {
                debug!(
                    path = %path.display(),
                    entries = directory.count(),
                    "loaded food directory dataset"
                );
                directory
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to load food directory dataset, using embedded fallback table"
                );
                Self::fallback()
            }
        }
    }

    /// The embedded fallback table of staple foods
    ///
    /// Marked degraded; resolves at minimum "egg", "apple", "banana", and
    /// "potato".
    #[must_use]
    pub fn fallback() -> Self {
        let entries = FALLBACK_FOODS
            .iter()
            .map(|&(name, id)| (name.to_owned(), FoodId::new(id)))
            .collect();
        Self {
            entries,
            degraded: true,
        }
    }

    /// Build a directory from in-memory name/identifier pairs
    ///
    /// Keys are normalized the same way lookups are. When two keys collide
    /// after normalization the last one wins.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<FoodId>,
    {
        let mut normalized: HashMap<String, FoodId> = HashMap::new();
        for (name, id) in entries {
            let key = normalize_name(name.as_ref());
            if key.is_empty() {
                continue;
            }
            if let Some(previous) = normalized.insert(key, id.into()) {
                debug!(
                    name = name.as_ref(),
                    previous = %previous,
                    "duplicate directory key after normalization, keeping last entry"
                );
            }
        }
        Self {
            entries: normalized,
            degraded: false,
        }
    }

    /// Resolve a food name to its catalog identifier
    ///
    /// The name is normalized (trimmed, lowercased, inner whitespace
    /// collapsed) before lookup. Exact match only; no fuzzy matching.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&FoodId> {
        self.entries.get(normalize_name(name).as_str())
    }

    /// Number of entries currently loaded
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory is operating on the embedded fallback table
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }
}

/// Normalize a food name for directory lookup
///
/// Lowercases, trims, and collapses runs of whitespace to single spaces, so
/// "  Chicken   Breast " and "chicken breast" resolve identically.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
