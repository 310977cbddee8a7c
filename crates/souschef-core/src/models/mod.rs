// ABOUTME: Canonical data models for the SousChef pantry platform
// ABOUTME: Re-exports FoodId, RecipeIngredient, PantryEntry, and match result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

//! # Data Models
//!
//! This module contains the canonical data structures used throughout the
//! `SousChef` pantry library. Upstream food APIs (Edamam, `FatSecret`) each ship
//! their own near-identical ingredient shapes; those are collapsed into the
//! single representation here by the adapter modules in the root crate.
//!
//! ## Design Principles
//!
//! - **Provider Agnostic**: Models abstract away upstream API differences
//! - **Extensible**: Optional fields accommodate partial upstream data
//! - **Serializable**: All models support JSON serialization
//! - **Type Safe**: `FoodId` distinguishes catalog identifiers from
//!   locally generated placeholders

// Domain modules
mod category;
mod food_id;
mod ingredient;
mod match_result;
mod pantry;

// Food identity
pub use food_id::FoodId;

// Categorization
pub use category::FoodCategory;

// Recipe domain
pub use ingredient::RecipeIngredient;

// Pantry domain
pub use pantry::PantryEntry;

// Matching domain
pub use match_result::{IngredientMatch, MatchKey, MatchResult};
