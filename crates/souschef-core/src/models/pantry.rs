// ABOUTME: PantryEntry model for items in the user's tracked pantry inventory
// ABOUTME: Entries always carry a catalog-valid FoodId plus quantity metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FoodCategory, FoodId};

/// Single item in the user's pantry
///
/// Pantry entries are created by the pantry add flow, which resolves a
/// catalog identifier before storing. The matching core reads snapshots of
/// these entries and never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryEntry {
    /// Canonical food name ("egg", "whole milk")
    pub name: String,
    /// Pantry section this item belongs to
    pub category: FoodCategory,
    /// Catalog identifier, valid by construction
    pub food_id: FoodId,
    /// Amount on hand, in `unit`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit for `quantity` ("g", "pieces", "ml")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// When the item was added to the pantry
    pub added_at: DateTime<Utc>,
}

impl PantryEntry {
    /// Create a pantry entry with the minimum required fields
    #[must_use]
    pub fn new(name: impl Into<String>, food_id: FoodId) -> Self {
        Self {
            name: name.into(),
            category: FoodCategory::Other,
            food_id,
            quantity: None,
            unit: None,
            added_at: Utc::now(),
        }
    }

    /// Set the pantry section
    #[must_use]
    pub const fn with_category(mut self, category: FoodCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the quantity on hand
    #[must_use]
    pub fn with_quantity(mut self, quantity: f64, unit: impl Into<String>) -> Self {
        self.quantity = Some(quantity);
        self.unit = Some(unit.into());
        self
    }
}
