// ABOUTME: Adapters mapping upstream food API payloads into canonical models
// ABOUTME: One explicit adapter per upstream API (Edamam, FatSecret)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

//! # Upstream Adapters
//!
//! Each upstream food API ships its own near-identical ingredient shape.
//! Rather than carrying parallel model hierarchies through the codebase,
//! every upstream payload is collapsed into the canonical
//! [`RecipeIngredient`](crate::models::RecipeIngredient) /
//! [`PantryEntry`](crate::models::PantryEntry) representation at this
//! boundary, via one explicit adapter per API.
//!
//! Adapters consume already-decoded response bodies; the HTTP fetch and
//! its retry/timeout policy belong to the calling application.

/// Edamam recipe search responses to canonical recipe ingredients
pub mod edamam;

/// `FatSecret` food search responses to canonical pantry entries
pub mod fatsecret;
