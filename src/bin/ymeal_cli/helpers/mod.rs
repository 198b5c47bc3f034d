// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal
// ABOUTME: Re-exports helper modules for ymeal-cli
// ABOUTME: Provides access to display formatting utilities

pub mod display;
