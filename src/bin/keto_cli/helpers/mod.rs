// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for keto-cli
// ABOUTME: Provides access to JSON file loading and output formatting utilities

pub mod display;
pub mod io;
