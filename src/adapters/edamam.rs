// ABOUTME: Edamam recipe API adapter producing canonical RecipeIngredient records
// ABOUTME: Decodes recipe ingredient lines and maps foodId/foodCategory fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

use serde::Deserialize;

use crate::errors::AdapterError;
use crate::models::{FoodCategory, FoodId, RecipeIngredient};

/// One ingredient line of an Edamam recipe response
///
/// Mirrors the `ingredients[]` objects of the Edamam recipe search v2 API.
/// Only the fields the matching core consumes are decoded; everything else
/// in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct EdamamIngredient {
    /// Raw ingredient line as written in the recipe
    pub text: String,
    /// Parsed food name, when Edamam's parser produced one
    #[serde(default)]
    pub food: Option<String>,
    /// Edamam food category label
    #[serde(default, rename = "foodCategory")]
    pub food_category: Option<String>,
    /// Edamam food database identifier
    #[serde(default, rename = "foodId")]
    pub food_id: Option<String>,
}

/// An Edamam recipe with its ingredient lines
#[derive(Debug, Clone, Deserialize)]
pub struct EdamamRecipe {
    /// Recipe title
    pub label: String,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<EdamamIngredient>,
}

impl From<EdamamIngredient> for RecipeIngredient {
    fn from(upstream: EdamamIngredient) -> Self {
        let mut ingredient = Self::new(upstream.text);
        if let Some(food) = upstream.food.filter(|f| !f.trim().is_empty()) {
            ingredient = ingredient.with_food_name(food);
        }
        if let Some(category) = upstream.food_category {
            ingredient = ingredient.with_category(FoodCategory::from_str_lossy(&category));
        }
        // An absent or blank foodId stays None: the adapter never fabricates
        // a catalog identifier.
        if let Some(id) = upstream.food_id.filter(|id| !id.trim().is_empty()) {
            ingredient = ingredient.with_food_id(FoodId::new(id));
        }
        ingredient
    }
}

/// Decode a single Edamam recipe object
///
/// # Errors
///
/// Returns `AdapterError::Json` when the payload is not a valid Edamam
/// recipe object.
pub fn parse_recipe(json: &str) -> Result<EdamamRecipe, AdapterError> {
    Ok(serde_json::from_str(json)?)
}

/// Decode an Edamam recipe object into canonical recipe ingredients
///
/// # Errors
///
/// Returns `AdapterError::Json` when the payload is not a valid Edamam
/// recipe object.
pub fn recipe_ingredients(json: &str) -> Result<Vec<RecipeIngredient>, AdapterError> {
    let recipe = parse_recipe(json)?;
    Ok(recipe
        .ingredients
        .into_iter()
        .map(RecipeIngredient::from)
        .collect())
}
