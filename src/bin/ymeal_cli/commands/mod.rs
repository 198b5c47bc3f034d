// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal
// ABOUTME: Re-exports command modules for ymeal-cli
// ABOUTME: Provides access to fridge, recipe, profile and account commands

pub mod account;
pub mod fridge;
pub mod profile;
pub mod recipes;
