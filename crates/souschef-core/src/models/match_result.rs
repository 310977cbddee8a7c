// ABOUTME: MatchResult types describing which recipe ingredients are in the pantry
// ABOUTME: Records the comparison key each ingredient matched under, in input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

use serde::{Deserialize, Serialize};

use super::FoodId;

/// Comparison key under which a recipe ingredient matched the pantry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKey {
    /// The ingredient carried a valid catalog identifier and it matched directly
    Catalog(FoodId),
    /// The ingredient's name was resolved through the food directory
    Resolved {
        /// Normalized name that was looked up
        name: String,
        /// Identifier the directory resolved the name to
        id: FoodId,
    },
}

impl MatchKey {
    /// The catalog identifier this key compares under
    #[must_use]
    pub const fn food_id(&self) -> &FoodId {
        match self {
            Self::Catalog(id) | Self::Resolved { id, .. } => id,
        }
    }
}

/// One matched recipe ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientMatch {
    /// Index into the recipe ingredient list passed to the matcher
    pub index: usize,
    /// Key the ingredient matched under
    pub key: MatchKey,
}

/// Result of matching a recipe ingredient list against a pantry snapshot
///
/// Holds the matched ingredients in the order they appeared in the input
/// list, so presentation code can render stable available/missing
/// indicators. Always a subset of the input; never invents ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MatchResult {
    matches: Vec<IngredientMatch>,
}

impl MatchResult {
    /// Build a result from matches already ordered by input index
    #[must_use]
    pub fn new(matches: Vec<IngredientMatch>) -> Self {
        Self { matches }
    }

    /// Number of matched ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Iterate over the matches in input order
    pub fn iter(&self) -> std::slice::Iter<'_, IngredientMatch> {
        self.matches.iter()
    }

    /// Indices of the matched ingredients in the input list
    #[must_use]
    pub fn matched_indices(&self) -> Vec<usize> {
        self.matches.iter().map(|m| m.index).collect()
    }

    /// Whether the ingredient at `index` in the input list matched
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        self.matches.iter().any(|m| m.index == index)
    }

    /// Whether any ingredient matched under the given catalog identifier
    #[must_use]
    pub fn contains_id(&self, id: &FoodId) -> bool {
        self.matches.iter().any(|m| m.key.food_id() == id)
    }
}

impl<'a> IntoIterator for &'a MatchResult {
    type Item = &'a IngredientMatch;
    type IntoIter = std::slice::Iter<'a, IngredientMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
