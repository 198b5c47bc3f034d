// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for storage, units, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat file.

/// Unit conversion factors and quantity adjustment steps
pub mod units;

/// Validation thresholds for profile and registration input
pub mod limits;

/// Keys under which state is persisted in the key-value store
pub mod storage_keys {
    /// Serialized ingredient inventory
    pub const INVENTORY: &str = "fridgeIngredients";
    /// Serialized profile configuration
    pub const PROFILE: &str = "profileConfig";
    /// Favorite recipe identifiers
    pub const FAVORITES: &str = "FAVORITES";
}

/// Service identity used by logging
pub mod service_names {
    /// Library and CLI service name
    pub const YMEAL: &str = "ymeal";
}
