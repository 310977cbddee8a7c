// ABOUTME: Application-wide constants for the SousChef pantry library
// ABOUTME: Dataset locations, environment variable names, and the fallback food table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SousChef

//! # Constants
//!
//! Dataset locations and the embedded fallback food table used when the
//! bundled directory dataset cannot be loaded.

/// Environment variable overriding the bundled food directory dataset path
pub const FOOD_DATASET_ENV: &str = "SOUSCHEF_FOOD_DATASET";

/// Default path of the bundled food directory dataset, relative to the
/// application bundle root
pub const DEFAULT_FOOD_DATASET_PATH: &str = "data/food_directory.json";

/// Embedded fallback food table
///
/// Used when the bundled dataset is missing, unreadable, or malformed.
/// Keys are already in normalized form (lowercase, single-spaced).
/// Deliberately small: just enough staples that scanning and matching keep
/// working in a degraded install.
pub const FALLBACK_FOODS: &[(&str, &str)] = &[
    ("egg", "food_bhpradua77pk16aipcvzeayg732r"),
    ("apple", "food_a1gb9ubb72c7snbuxr3weagwv0dd"),
    ("banana", "food_b0yuze4b1g3afpanijno5abtiu28"),
    ("potato", "food_abiw5baauresjmb6xpap2bg3otzu"),
    ("milk", "food_b49rs1kaw0jktabzkg2vvanvvsis"),
    ("butter", "food_awz3iefajbk1fwahq9logahmgltj"),
    ("flour", "food_ar3x97tbq9o9p6b6gzwj0am0c81m"),
    ("sugar", "food_axi2ijobrk819yb0adceobnhm1c2"),
    ("salt", "food_btxz81db72hwbra2pncvebzzzum9"),
    ("rice", "food_bpumdjzb5rtqaeabb0kbgbcgr4t9"),
    ("onion", "food_bmrvi4ob4binw9a5m7l07amlfcoy"),
    ("garlic", "food_avtcmx6bgjv1jvay6s6stan8dnyp"),
    ("chicken breast", "food_b1d1izaiawd7sua7af6mvaqb96fd"),
    ("olive oil", "food_b1d1izaiauj4dvbqanfmwaw4x25y"),
    ("bread", "food_a4pa3zpbvlf8tkb2he9dpb9k61x5"),
    ("cheese", "food_bpa78kxa5ydob2bbjzgi4apftcb9"),
    ("tomato", "food_a6k79rrahp8fe2b26zussa3wtkqh"),
    ("carrot", "food_ai215e5b85pdh5ajd4aafa3w2zm8"),
];
