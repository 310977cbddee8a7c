// ABOUTME: RecipeIngredient model representing one line of a recipe ingredient list
// ABOUTME: Carries free text, an optional parsed name, category, and optional FoodId
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

use serde::{Deserialize, Serialize};

use super::{FoodCategory, FoodId};

/// Single ingredient line from a recipe
///
/// Constructed once from a decoded recipe response and treated as immutable
/// afterwards. The `food_id` may be absent or a placeholder; matching falls
/// back to name-based directory lookup in those cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Raw free-text description ("2 large eggs, beaten")
    pub text: String,
    /// Parsed canonical food name, when the upstream parser produced one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
    /// Category, when the upstream response carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FoodCategory>,
    /// Catalog identifier, absent or placeholder-shaped when unresolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_id: Option<FoodId>,
}

impl RecipeIngredient {
    /// Create an ingredient from its free-text description
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            food_name: None,
            category: None,
            food_id: None,
        }
    }

    /// Attach the parsed canonical food name
    #[must_use]
    pub fn with_food_name(mut self, name: impl Into<String>) -> Self {
        self.food_name = Some(name.into());
        self
    }

    /// Attach the upstream category
    #[must_use]
    pub const fn with_category(mut self, category: FoodCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Attach the catalog (or placeholder) identifier
    #[must_use]
    pub fn with_food_id(mut self, id: FoodId) -> Self {
        self.food_id = Some(id);
        self
    }

    /// The name to use for fallback directory lookup
    ///
    /// Prefers the parsed canonical name and falls back to the raw text.
    /// Returns `None` when neither carries any non-whitespace content, in
    /// which case the ingredient cannot be resolved by name at all.
    #[must_use]
    pub fn lookup_name(&self) -> Option<&str> {
        let candidate = self
            .food_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.text);
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}
