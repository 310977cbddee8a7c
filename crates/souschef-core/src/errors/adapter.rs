// ABOUTME: Error type for upstream API payload adapters
// ABOUTME: Covers JSON decode failures and structurally incomplete records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

use thiserror::Error;

/// Errors raised while adapting an upstream API payload into canonical
/// models.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Payload was not valid JSON for the expected upstream shape
    #[error("failed to decode upstream payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload decoded but a required field was missing or empty
    #[error("upstream payload missing required field: {field}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },
}
