// ABOUTME: Validation thresholds for profile configuration and registration
// ABOUTME: Minimum lengths and suggestion list caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

/// Minimum trimmed length of a city name or postal code
pub const MIN_LOCATION_LEN: usize = 3;

/// Maximum number of suggestions returned by profile searches
pub const MAX_PROFILE_SUGGESTIONS: usize = 6;

/// Minimum password length at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Trimmed email length must exceed this before the form can be submitted
pub const MIN_EMAIL_LEN_EXCLUSIVE: usize = 3;
