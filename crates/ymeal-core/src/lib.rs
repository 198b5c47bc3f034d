// ABOUTME: Core types and constants for the Ymeal meal-planning library
// ABOUTME: Foundation crate with the unified error type and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

#![deny(unsafe_code)]

//! # Ymeal Core
//!
//! Foundation crate shared by the Ymeal library and its binaries. It changes
//! rarely, which keeps incremental builds of the main crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Storage keys, unit factors, step sizes and validation limits

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;
