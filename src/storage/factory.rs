// ABOUTME: Storage factory with runtime backend selection from connection URLs
// ABOUTME: Wraps the in-memory and SQLite backends behind one delegating enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sazon Project

//! Storage factory.
//!
//! Backends are chosen from the connection string: `memory` selects the
//! in-memory store, anything starting with `sqlite:` selects SQLite.

use super::memory::MemoryStorage;
use super::sqlite::SqliteStorage;
use super::StorageProvider;
use crate::models::{
    FavoriteRecipe, MealEntry, NewMealEntry, NewNutritionalGoal, NewRecipe, NewSearchRequest,
    NutritionalGoal, NutritionalGoalUpdate, Recipe, SearchRequest, UserProfile, UserProfileUpdate,
};
use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    Memory,
    Sqlite,
}

/// Storage instance wrapper that delegates to the selected backend
#[derive(Clone)]
pub enum Storage {
    Memory(MemoryStorage),
    Sqlite(SqliteStorage),
}

impl Storage {
    /// Create a storage instance from a connection string.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL scheme is unrecognized or the SQLite
    /// connection fails.
    pub async fn from_url(database_url: &str) -> Result<Self> {
        if database_url == "memory" || database_url.starts_with("memory:") {
            info!("Using in-memory storage backend");
            return Ok(Self::Memory(MemoryStorage::new()));
        }
        if database_url.starts_with("sqlite:") {
            info!("Using SQLite storage backend: {database_url}");
            return Ok(Self::Sqlite(SqliteStorage::new(database_url).await?));
        }
        bail!("unsupported database URL: {database_url} (expected `memory` or `sqlite:...`)")
    }

    /// Get the backend type enum
    #[must_use]
    pub const fn storage_type(&self) -> StorageType {
        match self {
            Self::Memory(_) => StorageType::Memory,
            Self::Sqlite(_) => StorageType::Sqlite,
        }
    }

    /// Get a descriptive string for the current backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "In-Memory (Testing/Demo)",
            Self::Sqlite(_) => "SQLite (Persistent)",
        }
    }
}

#[async_trait]
impl StorageProvider for Storage {
    async fn create_recipe(&self, recipe: NewRecipe) -> Result<Recipe> {
        match self {
            Self::Memory(s) => s.create_recipe(recipe).await,
            Self::Sqlite(s) => s.create_recipe(recipe).await,
        }
    }

    async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>> {
        match self {
            Self::Memory(s) => s.get_recipe(id).await,
            Self::Sqlite(s) => s.get_recipe(id).await,
        }
    }

    async fn get_all_recipes(&self) -> Result<Vec<Recipe>> {
        match self {
            Self::Memory(s) => s.get_all_recipes().await,
            Self::Sqlite(s) => s.get_all_recipes().await,
        }
    }

    async fn record_search(&self, request: NewSearchRequest) -> Result<SearchRequest> {
        match self {
            Self::Memory(s) => s.record_search(request).await,
            Self::Sqlite(s) => s.record_search(request).await,
        }
    }

    async fn get_nutritional_goal(&self, user_id: &str) -> Result<Option<NutritionalGoal>> {
        match self {
            Self::Memory(s) => s.get_nutritional_goal(user_id).await,
            Self::Sqlite(s) => s.get_nutritional_goal(user_id).await,
        }
    }

    async fn create_nutritional_goal(&self, goal: NewNutritionalGoal) -> Result<NutritionalGoal> {
        match self {
            Self::Memory(s) => s.create_nutritional_goal(goal).await,
            Self::Sqlite(s) => s.create_nutritional_goal(goal).await,
        }
    }

    async fn update_nutritional_goal(
        &self,
        user_id: &str,
        update: NutritionalGoalUpdate,
    ) -> Result<NutritionalGoal> {
        match self {
            Self::Memory(s) => s.update_nutritional_goal(user_id, update).await,
            Self::Sqlite(s) => s.update_nutritional_goal(user_id, update).await,
        }
    }

    async fn create_meal_entry(&self, entry: NewMealEntry) -> Result<MealEntry> {
        match self {
            Self::Memory(s) => s.create_meal_entry(entry).await,
            Self::Sqlite(s) => s.create_meal_entry(entry).await,
        }
    }

    async fn get_meal_entries_for_date(
        &self,
        date: NaiveDate,
        user_id: &str,
    ) -> Result<Vec<MealEntry>> {
        match self {
            Self::Memory(s) => s.get_meal_entries_for_date(date, user_id).await,
            Self::Sqlite(s) => s.get_meal_entries_for_date(date, user_id).await,
        }
    }

    async fn delete_meal_entry(&self, id: i64) -> Result<()> {
        match self {
            Self::Memory(s) => s.delete_meal_entry(id).await,
            Self::Sqlite(s) => s.delete_meal_entry(id).await,
        }
    }

    async fn get_user_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        match self {
            Self::Memory(s) => s.get_user_profile(user_id).await,
            Self::Sqlite(s) => s.get_user_profile(user_id).await,
        }
    }

    async fn create_user_profile(&self, profile: UserProfile) -> Result<UserProfile> {
        match self {
            Self::Memory(s) => s.create_user_profile(profile).await,
            Self::Sqlite(s) => s.create_user_profile(profile).await,
        }
    }

    async fn update_user_profile(
        &self,
        user_id: &str,
        update: UserProfileUpdate,
    ) -> Result<UserProfile> {
        match self {
            Self::Memory(s) => s.update_user_profile(user_id, update).await,
            Self::Sqlite(s) => s.update_user_profile(user_id, update).await,
        }
    }

    async fn get_favorite_recipes(&self, user_id: &str) -> Result<Vec<Recipe>> {
        match self {
            Self::Memory(s) => s.get_favorite_recipes(user_id).await,
            Self::Sqlite(s) => s.get_favorite_recipes(user_id).await,
        }
    }

    async fn add_favorite_recipe(&self, user_id: &str, recipe_id: i64) -> Result<FavoriteRecipe> {
        match self {
            Self::Memory(s) => s.add_favorite_recipe(user_id, recipe_id).await,
            Self::Sqlite(s) => s.add_favorite_recipe(user_id, recipe_id).await,
        }
    }

    async fn remove_favorite_recipe(&self, user_id: &str, recipe_id: i64) -> Result<()> {
        match self {
            Self::Memory(s) => s.remove_favorite_recipe(user_id, recipe_id).await,
            Self::Sqlite(s) => s.remove_favorite_recipe(user_id, recipe_id).await,
        }
    }

    async fn is_recipe_favorite(&self, user_id: &str, recipe_id: i64) -> Result<bool> {
        match self {
            Self::Memory(s) => s.is_recipe_favorite(user_id, recipe_id).await,
            Self::Sqlite(s) => s.is_recipe_favorite(user_id, recipe_id).await,
        }
    }
}
