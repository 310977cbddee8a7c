// ABOUTME: Error types for the SousChef pantry library
// ABOUTME: Re-exports DirectoryError and AdapterError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

//! # Error Types
//!
//! Structured errors for the two fallible boundaries of the library:
//! - `DirectoryError` - loading the bundled food directory dataset
//! - `AdapterError` - decoding upstream API payloads into canonical models
//!
//! Neither is ever fatal: directory load failures degrade to the embedded
//! fallback table, and adapter failures are reported to the caller as
//! ordinary `Result` values.

mod adapter;
mod directory;

pub use adapter::AdapterError;
pub use directory::DirectoryError;
