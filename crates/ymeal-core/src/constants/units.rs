// ABOUTME: Unit conversion factors and quantity adjustment step sizes
// ABOUTME: Shared by the inventory model and recipe ingredient parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

/// Grams stored per displayed kilogram
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Milliliters stored per displayed centiliter
pub const ML_PER_CL: f64 = 10.0;

/// Milliliters per liter (recipe lines only, no liter display format)
pub const ML_PER_L: f64 = 1000.0;

/// Adjustment step for count-based entries
pub const STEP_COUNT: f64 = 1.0;

/// Adjustment step for centiliter entries, in milliliters
pub const STEP_CENTILITERS: f64 = 10.0;

/// Adjustment step for kilogram entries, in grams
pub const STEP_KILOGRAMS: f64 = 100.0;

/// Adjustment step for gram and milliliter entries
pub const STEP_DEFAULT: f64 = 100.0;

/// Quantity given to a suggestion added with a count format
pub const SUGGESTION_DEFAULT_COUNT: f64 = 1.0;

/// Quantity given to a suggestion added with a measured format
pub const SUGGESTION_DEFAULT_MEASURED: f64 = 200.0;
