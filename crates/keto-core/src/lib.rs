// ABOUTME: Core types and constants for the keto planner workspace
// ABOUTME: Foundation crate with error handling, meal-plan data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Keto Core
//!
//! Foundation crate providing shared types and constants for the keto meal planning
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities, rounding steps, and other domain constants
//! - **models**: Foods, recipes, meal plans, shopping lists, and weight history

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Food, Recipe, `MealPlan`, `ShoppingList`, `WeightEntry`)
pub mod models;
