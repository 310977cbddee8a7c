// ABOUTME: Food category enumeration for pantry and shopping organization
// ABOUTME: Defines supported categories with lossy parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a food item
///
/// Covers the sections used for pantry display and shopping-list grouping.
/// The `Other` variant absorbs upstream categories that don't map to a
/// standard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Fruits and vegetables
    Produce,
    /// Milk, cheese, yogurt, eggs
    Dairy,
    /// Meat, poultry, fish, plant proteins
    Protein,
    /// Bread, rice, pasta, cereals
    Grains,
    /// Herbs, spices, seasonings
    Spices,
    /// Sauces, oils, dressings
    Condiments,
    /// Frozen foods
    Frozen,
    /// Drinks and drink mixes
    Beverages,
    /// Anything that doesn't fit a standard section
    #[default]
    Other,
}

impl FoodCategory {
    /// Parse a category from an upstream label, falling back to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "produce" | "fruit" | "fruits" | "vegetable" | "vegetables" => Self::Produce,
            "dairy" | "eggs" | "dairy and egg products" => Self::Dairy,
            "protein" | "meat" | "meats" | "poultry" | "fish" | "seafood" => Self::Protein,
            "grains" | "grain" | "bread" | "bakery" | "pasta" | "cereal" => Self::Grains,
            "spices" | "spice" | "herbs" | "seasonings" => Self::Spices,
            "condiments" | "condiments and sauces" | "oils" | "sauces" => Self::Condiments,
            "frozen" | "frozen foods" => Self::Frozen,
            "beverages" | "drinks" | "water" => Self::Beverages,
            _ => Self::Other,
        }
    }

    /// Display name for pantry section headers
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Produce => "produce",
            Self::Dairy => "dairy",
            Self::Protein => "protein",
            Self::Grains => "grains",
            Self::Spices => "spices",
            Self::Condiments => "condiments",
            Self::Frozen => "frozen",
            Self::Beverages => "beverages",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
