// ABOUTME: PantryMatcher - computes which recipe ingredients are already in the pantry
// ABOUTME: Matches by catalog FoodId equality with name-based directory fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

//! # Pantry Matching
//!
//! Determines, for a recipe's ingredient list and a snapshot of the user's
//! pantry, which ingredients the user already has.
//!
//! Matching is by exact catalog identifier equality. An ingredient that
//! carries a valid (non-placeholder) [`FoodId`] compares under it directly;
//! otherwise its name is resolved through the [`FoodDirectory`] first.
//! Availability is binary presence: there is no fuzzy matching and no
//! quantity or unit reasoning.
//!
//! The match is a pure function of its two inputs plus the directory table.
//! Nothing is cached between calls, so pantry or recipe changes between
//! invocations can never leak stale results.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::directory::{normalize_name, FoodDirectory};
use crate::models::{IngredientMatch, MatchKey, MatchResult, PantryEntry, RecipeIngredient};

/// Matches recipe ingredient lists against pantry snapshots
///
/// Constructed once by the composition root with a shared directory
/// reference. Stateless beyond that reference, so a single matcher can be
/// shared across concurrent callers.
#[derive(Debug, Clone)]
pub struct PantryMatcher {
    directory: Arc<FoodDirectory>,
}

impl PantryMatcher {
    /// Create a matcher over the given food directory
    #[must_use]
    pub fn new(directory: Arc<FoodDirectory>) -> Self {
        Self { directory }
    }

    /// The directory this matcher resolves names through
    #[must_use]
    pub fn directory(&self) -> &FoodDirectory {
        &self.directory
    }

    /// Compute which recipe ingredients are present in the pantry snapshot
    ///
    /// Returns the matched ingredients in input order. Ingredients that
    /// carry neither a usable identifier nor a resolvable name are treated
    /// as not available, never as an error.
    #[must_use]
    pub fn match_ingredients(
        &self,
        recipe: &[RecipeIngredient],
        pantry: &[PantryEntry],
    ) -> MatchResult {
        // Placeholder-shaped pantry identifiers are excluded: placeholders
        // signal "unresolved" and must never match by raw equality.
        let on_hand: HashSet<_> = pantry
            .iter()
            .map(|entry| &entry.food_id)
            .filter(|id| !id.is_placeholder())
            .collect();

        let matches: Vec<IngredientMatch> = recipe
            .iter()
            .enumerate()
            .filter_map(|(index, ingredient)| {
                let key = self.comparison_key(ingredient)?;
                on_hand
                    .contains(key.food_id())
                    .then_some(IngredientMatch { index, key })
            })
            .collect();

        debug!(
            recipe_ingredients = recipe.len(),
            pantry_entries = pantry.len(),
            matched = matches.len(),
            "matched recipe against pantry"
        );

        MatchResult::new(matches)
    }

    /// Determine the comparison key for one recipe ingredient
    ///
    /// A valid catalog identifier is used directly. Otherwise the
    /// ingredient's name is resolved through the directory. `None` means
    /// the ingredient cannot be matched at all (fails closed).
    fn comparison_key(&self, ingredient: &RecipeIngredient) -> Option<MatchKey> {
        if let Some(id) = &ingredient.food_id {
            if !id.is_placeholder() {
                return Some(MatchKey::Catalog(id.clone()));
            }
        }

        let name = normalize_name(ingredient.lookup_name()?);
        let id = self.directory.lookup(&name)?;
        Some(MatchKey::Resolved {
            name,
            id: id.clone(),
        })
    }
}
