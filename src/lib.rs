// ABOUTME: Main library entry point for the SousChef pantry matching core
// ABOUTME: Exposes the food directory, pantry matcher, and upstream adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

#![deny(unsafe_code)]

//! # SousChef Pantry
//!
//! The ingredient/recipe matching core of the `SousChef` pantry application:
//! given a recipe's ingredient list and a snapshot of the user's pantry,
//! compute which ingredients the user already has.
//!
//! This is a pure in-process library. It performs no I/O beyond the one-shot
//! directory dataset load, owns no network calls, and exposes no wire
//! protocol; recipe and pantry data arrive as already-decoded snapshots.
//!
//! ## Architecture
//!
//! - **models**: Canonical data structures (`FoodId`, `RecipeIngredient`,
//!   `PantryEntry`, `MatchResult`), shared via the `souschef-core` crate
//! - **directory**: Static food-name-to-identifier lookup table, loaded once
//!   and read-only thereafter, with an embedded degraded fallback
//! - **matcher**: The pantry matching algorithm
//! - **adapters**: Per-upstream-API mapping into the canonical models
//! - **config**: Environment-first dataset location
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use souschef_pantry::directory::FoodDirectory;
//! use souschef_pantry::matcher::PantryMatcher;
//! use souschef_pantry::models::{FoodId, PantryEntry, RecipeIngredient};
//!
//! let directory = Arc::new(FoodDirectory::fallback());
//! let matcher = PantryMatcher::new(directory);
//!
//! let pantry = vec![PantryEntry::new("egg", FoodId::new("food_bhpradua77pk16aipcvzeayg732r"))];
//! let recipe = vec![RecipeIngredient::new("2 large eggs").with_food_name("Egg")];
//!
//! let result = matcher.match_ingredients(&recipe, &pantry);
//! assert!(result.contains_index(0));
//! ```

/// Adapters mapping upstream API payloads into canonical models
pub mod adapters;

/// Dataset location configuration
pub mod config;

/// Application constants from the foundation crate
pub mod constants;

/// Food identifier directory (name-to-identifier lookup)
pub mod directory;

/// Library error types from the foundation crate
pub mod errors;

/// Pantry matching algorithm
pub mod matcher;

/// Canonical data models from the foundation crate
pub mod models;
