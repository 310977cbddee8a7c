// ABOUTME: FatSecret food API adapter producing canonical PantryEntry records
// ABOUTME: Decodes foods.food[] search results and skips records without a food_id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

use serde::Deserialize;
use tracing::debug;

use crate::errors::AdapterError;
use crate::models::{FoodId, PantryEntry};

/// One food record from a `FatSecret` `foods.search` response
#[derive(Debug, Clone, Deserialize)]
pub struct FatSecretFood {
    /// `FatSecret` food database identifier
    #[serde(default)]
    pub food_id: String,
    /// Food display name
    pub food_name: String,
    /// "Generic" or "Brand"
    #[serde(default)]
    pub food_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FoodList {
    #[serde(default)]
    food: Vec<FatSecretFood>,
}

#[derive(Debug, Deserialize)]
struct FoodsEnvelope {
    foods: FoodList,
}

/// Convert one `FatSecret` food record into a pantry entry
///
/// Pantry entries are catalog-valid by construction, so records without a
/// food identifier yield `None` rather than an entry with a placeholder.
#[must_use]
pub fn pantry_entry(food: FatSecretFood) -> Option<PantryEntry> {
    if food.food_id.trim().is_empty() {
        debug!(name = %food.food_name, "skipping FatSecret record without food_id");
        return None;
    }
    Some(PantryEntry::new(food.food_name, FoodId::new(food.food_id)))
}

/// Decode a FatSecret `foods.search` response into pantry entries
///
/// Records without a food identifier are skipped per-record; they are not
/// an error for the rest of the payload.
///
/// # Errors
///
/// Returns `AdapterError::Json` when the payload is not a valid
/// `foods.search` response.
pub fn pantry_entries(json: &str) -> Result<Vec<PantryEntry>, AdapterError> {
    let envelope: FoodsEnvelope = serde_json::from_str(json)?;
    Ok(envelope
        .foods
        .food
        .into_iter()
        .filter_map(pantry_entry)
        .collect())
}
