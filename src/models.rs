// ABOUTME: Canonical data models for the SousChef pantry matching core
// ABOUTME: Re-exports the shared model types from the souschef-core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

pub use souschef_core::models::*;
