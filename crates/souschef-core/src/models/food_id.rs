// ABOUTME: FoodId newtype distinguishing catalog identifiers from placeholders
// ABOUTME: Placeholders are UUID-shaped tokens that must never match by raw equality
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a food item in the external food catalog.
///
/// A `FoodId` is either a catalog-issued alphanumeric code, or a locally
/// generated UUID-shaped placeholder created when no catalog identifier was
/// available. Placeholders signal "unresolved": they must never be compared
/// by raw equality against catalog identifiers, and callers are expected to
/// route them through name-based directory lookup instead. Use
/// [`FoodId::is_placeholder`] to tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(String);

impl FoodId {
    /// Wrap a catalog-issued identifier code
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generate a fresh placeholder identifier for a food with no catalog id
    #[must_use]
    pub fn placeholder() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Check whether this identifier is a locally generated placeholder
    ///
    /// A placeholder is UUID-shaped: 36 characters in the hyphenated
    /// 8-4-4-4-12 hex layout. Catalog codes never take this form.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        let bytes = self.0.as_bytes();
        if bytes.len() != 36 {
            return false;
        }
        self.0.char_indices().all(|(i, c)| match i {
            8 | 13 | 18 | 23 => c == '-',
            _ => c.is_ascii_hexdigit(),
        })
    }

    /// The identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for FoodId {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for FoodId {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}
