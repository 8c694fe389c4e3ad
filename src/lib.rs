// ABOUTME: Main library entry point for the Sazon recipe and nutrition engine
// ABOUTME: Exposes search, nutrition tracking, goal calculation, and storage backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sazon Project

#![deny(unsafe_code)]

//! # Sazon
//!
//! A recipe discovery and nutrition tracking engine. Users name the four
//! ingredients they have on hand; Sazon finds recipes whose canonical
//! ingredient lists match at least three of them, filters and sorts the
//! results, and tracks logged meals against per-user nutritional goals.
//!
//! ## Features
//!
//! - **Ingredient search**: 3-of-4 fuzzy matching with time, difficulty,
//!   and cost filters plus stable sorting
//! - **Meal tracking**: daily nutrition summaries with serving-scaled
//!   totals compared against stored goals
//! - **Goal calculation**: Mifflin-St Jeor based target suggestions from
//!   a user's biometric profile
//! - **Pluggable storage**: in-memory and SQLite backends behind one trait
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sazon::models::RecipeSearchParams;
//! use sazon::search::search_recipes;
//! use sazon::storage::Storage;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let storage = Storage::from_url("memory").await?;
//!     let params = RecipeSearchParams {
//!         ingredient1: "pollo".into(),
//!         ingredient2: "arroz".into(),
//!         ingredient3: "cebolla".into(),
//!         ingredient4: "ajo".into(),
//!         ..RecipeSearchParams::default()
//!     };
//!     let results = search_recipes(&storage, &params).await?;
//!     println!("{} recipes found", results.len());
//!     Ok(())
//! }
//! ```

/// Environment-driven application configuration
pub mod config;

/// Application error types and error codes
pub mod errors;

/// Profile-driven nutrition goal derivation
pub mod goal_calculator;

/// Structured logging setup
pub mod logging;

/// Ingredient matching rules for recipe search
pub mod matching;

/// Core data structures for recipes, meals, goals, and profiles
pub mod models;

/// Daily nutrition aggregation
pub mod nutrition;

/// Recipe search pipeline and service entry point
pub mod search;

/// Storage backends and the provider trait
pub mod storage;
