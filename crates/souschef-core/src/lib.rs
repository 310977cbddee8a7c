// ABOUTME: Core types and constants for the SousChef pantry platform
// ABOUTME: Foundation crate with food identifiers, domain models, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

#![deny(unsafe_code)]

//! # SousChef Core
//!
//! Foundation crate providing shared types for the `SousChef` pantry and recipe
//! matching library. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Library error types (`DirectoryError`, `AdapterError`)
//! - **constants**: Dataset locations and the embedded fallback food table
//! - **models**: Canonical domain models (`FoodId`, `RecipeIngredient`,
//!   `PantryEntry`, `MatchResult`)

/// Library error types for directory loading and upstream adapters
pub mod errors;

/// Dataset locations and the embedded fallback food table
pub mod constants;

/// Canonical domain models shared across the workspace
pub mod models;
