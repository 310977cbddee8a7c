// ABOUTME: Integration tests for the Edamam and FatSecret payload adapters
// ABOUTME: Verifies mapping into canonical models and per-record failure handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use souschef_pantry::adapters::{edamam, fatsecret};
use souschef_pantry::directory::FoodDirectory;
use souschef_pantry::errors::AdapterError;
use souschef_pantry::matcher::PantryMatcher;
use souschef_pantry::models::FoodCategory;

const EDAMAM_RECIPE: &str = r#"{
    "label": "Simple Omelette",
    "ingredients": [
        {
            "text": "2 large eggs",
            "food": "egg",
            "foodCategory": "Eggs",
            "foodId": "food_bhpradua77pk16aipcvzeayg732r"
        },
        {
            "text": "1 tbsp butter",
            "food": "butter",
            "foodCategory": "Dairy",
            "foodId": ""
        },
        {
            "text": "a pinch of unicorn dust"
        }
    ]
}"#;

const FATSECRET_SEARCH: &str = r#"{
    "foods": {
        "food": [
            {
                "food_id": "35718",
                "food_name": "Egg",
                "food_type": "Generic"
            },
            {
                "food_id": "",
                "food_name": "Mystery Item",
                "food_type": "Generic"
            },
            {
                "food_id": "33814",
                "food_name": "Butter",
                "food_type": "Generic"
            }
        ]
    }
}"#;

#[test]
fn test_edamam_recipe_maps_to_canonical_ingredients() {
    let ingredients = edamam::recipe_ingredients(EDAMAM_RECIPE).unwrap();

    assert_eq!(ingredients.len(), 3);

    assert_eq!(ingredients[0].text, "2 large eggs");
    assert_eq!(ingredients[0].food_name.as_deref(), Some("egg"));
    assert_eq!(ingredients[0].category, Some(FoodCategory::Dairy));
    assert_eq!(
        ingredients[0].food_id.as_ref().unwrap().as_str(),
        "food_bhpradua77pk16aipcvzeayg732r"
    );

    // Blank foodId must stay unresolved, never fabricated
    assert!(ingredients[1].food_id.is_none());
    assert_eq!(ingredients[1].category, Some(FoodCategory::Dairy));

    // Sparse lines decode with everything optional absent
    assert!(ingredients[2].food_name.is_none());
    assert!(ingredients[2].food_id.is_none());
    assert!(ingredients[2].category.is_none());
}

#[test]
fn test_edamam_invalid_payload_is_json_error() {
    let err = edamam::recipe_ingredients("{not json").unwrap_err();
    assert!(matches!(err, AdapterError::Json(_)));
}

#[test]
fn test_edamam_parse_recipe_keeps_label() {
    let recipe = edamam::parse_recipe(EDAMAM_RECIPE).unwrap();
    assert_eq!(recipe.label, "Simple Omelette");
    assert_eq!(recipe.ingredients.len(), 3);
}

#[test]
fn test_fatsecret_search_maps_to_pantry_entries() {
    let entries = fatsecret::pantry_entries(FATSECRET_SEARCH).unwrap();

    // The record without a food_id is skipped, not an error
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "Egg");
    assert_eq!(entries[0].food_id.as_str(), "35718");
    assert_eq!(entries[1].name, "Butter");
}

#[test]
fn test_fatsecret_empty_food_list_is_ok() {
    let entries = fatsecret::pantry_entries(r#"{"foods": {"food": []}}"#).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_fatsecret_invalid_payload_is_json_error() {
    let err = fatsecret::pantry_entries(r#"{"food": []}"#).unwrap_err();
    assert!(matches!(err, AdapterError::Json(_)));
}

#[test]
fn test_adapted_payloads_flow_through_matcher() {
    // Pantry from FatSecret, recipe from Edamam, names bridged by the
    // directory: the butter line has no catalog id and resolves by name.
    let directory = FoodDirectory::from_entries([("butter", "33814")]);
    let matcher = PantryMatcher::new(Arc::new(directory));

    let recipe = edamam::recipe_ingredients(EDAMAM_RECIPE).unwrap();
    let pantry = fatsecret::pantry_entries(FATSECRET_SEARCH).unwrap();

    let result = matcher.match_ingredients(&recipe, &pantry);

    // Egg ids differ between catalogs and "unicorn dust" resolves nowhere,
    // so only the butter line matches.
    assert_eq!(result.matched_indices(), vec![1]);
}
