// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for keto-cli
// ABOUTME: Provides access to nutrition, shopping, weight, and plan commands

pub mod nutrition;
pub mod plan;
pub mod shopping;
pub mod weight;
