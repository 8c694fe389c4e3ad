// ABOUTME: Storage abstraction layer for recipes, meal logs, goals, and favorites
// ABOUTME: Plugin architecture with in-memory and SQLite backends behind one trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sazon Project

use crate::models::{
    FavoriteRecipe, MealEntry, NewMealEntry, NewNutritionalGoal, NewRecipe, NewSearchRequest,
    NutritionalGoal, NutritionalGoalUpdate, Recipe, SearchRequest, UserProfile, UserProfileUpdate,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub mod factory;
pub mod memory;
pub mod sqlite;

pub use factory::Storage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Core storage abstraction trait
///
/// All storage backends implement this trait to provide a consistent
/// interface for the service layer. Absence is modeled as `Option`, never
/// as an error; write-through consistency is per-call (no client-side
/// caching).
#[async_trait]
pub trait StorageProvider: Send + Sync + Clone {
    // ================================
    // Recipes
    // ================================

    /// Create a new recipe; the id is assigned by the backend
    async fn create_recipe(&self, recipe: NewRecipe) -> Result<Recipe>;

    /// Get a recipe by id
    async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>>;

    /// Get all recipes in insertion order
    async fn get_all_recipes(&self) -> Result<Vec<Recipe>>;

    // ================================
    // Search Log
    // ================================

    /// Record a search request for analytics. Callers treat this as
    /// fire-and-forget: a failure here must never abort the search itself.
    async fn record_search(&self, request: NewSearchRequest) -> Result<SearchRequest>;

    // ================================
    // Nutritional Goals
    // ================================

    /// Get the user's current goal (latest by update time)
    async fn get_nutritional_goal(&self, user_id: &str) -> Result<Option<NutritionalGoal>>;

    /// Create a new goal for a user
    async fn create_nutritional_goal(&self, goal: NewNutritionalGoal) -> Result<NutritionalGoal>;

    /// Apply a partial update to the user's current goal, refreshing its
    /// update timestamp. Fails if the user has no goal.
    async fn update_nutritional_goal(
        &self,
        user_id: &str,
        update: NutritionalGoalUpdate,
    ) -> Result<NutritionalGoal>;

    // ================================
    // Meal Entries
    // ================================

    /// Log a meal entry
    async fn create_meal_entry(&self, entry: NewMealEntry) -> Result<MealEntry>;

    /// Get all meal entries for a (date, user), ordered by creation
    async fn get_meal_entries_for_date(
        &self,
        date: NaiveDate,
        user_id: &str,
    ) -> Result<Vec<MealEntry>>;

    /// Delete a meal entry by id; no-op if absent
    async fn delete_meal_entry(&self, id: i64) -> Result<()>;

    // ================================
    // User Profiles
    // ================================

    /// Get a user's profile
    async fn get_user_profile(&self, user_id: &str) -> Result<Option<UserProfile>>;

    /// Create a user's profile
    async fn create_user_profile(&self, profile: UserProfile) -> Result<UserProfile>;

    /// Apply a partial update to a user's profile. Fails if the user has
    /// no profile.
    async fn update_user_profile(
        &self,
        user_id: &str,
        update: UserProfileUpdate,
    ) -> Result<UserProfile>;

    // ================================
    // Favorites
    // ================================

    /// Get the full recipes a user has favorited
    async fn get_favorite_recipes(&self, user_id: &str) -> Result<Vec<Recipe>>;

    /// Mark a recipe as favorite. Idempotent: adding an existing favorite
    /// returns the existing row, and (user, recipe) uniqueness is enforced
    /// by the backend.
    async fn add_favorite_recipe(&self, user_id: &str, recipe_id: i64) -> Result<FavoriteRecipe>;

    /// Remove a favorite; no-op if absent
    async fn remove_favorite_recipe(&self, user_id: &str, recipe_id: i64) -> Result<()>;

    /// Whether the user has favorited the recipe
    async fn is_recipe_favorite(&self, user_id: &str, recipe_id: i64) -> Result<bool>;
}
