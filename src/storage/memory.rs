// ABOUTME: In-memory storage backend for tests, demos, and local development
// ABOUTME: DashMap tables with atomic id assignment, mirroring the SQLite schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sazon Project

//! In-memory storage implementation.
//!
//! Ids are assigned from per-table atomic counters starting at 1, so id
//! order is insertion order. Favorites are keyed by (user, recipe), which
//! makes the uniqueness guarantee structural: concurrent duplicate adds
//! land on the same map entry.

use super::StorageProvider;
use crate::models::{
    FavoriteRecipe, MealEntry, NewMealEntry, NewNutritionalGoal, NewRecipe, NewSearchRequest,
    NutritionalGoal, NutritionalGoalUpdate, Recipe, SearchRequest, UserProfile, UserProfileUpdate,
};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Tables {
    recipes: DashMap<i64, Recipe>,
    searches: DashMap<i64, SearchRequest>,
    goals: DashMap<i64, NutritionalGoal>,
    meals: DashMap<i64, MealEntry>,
    profiles: DashMap<String, UserProfile>,
    favorites: DashMap<(String, i64), FavoriteRecipe>,

    next_recipe_id: AtomicI64,
    next_search_id: AtomicI64,
    next_goal_id: AtomicI64,
    next_meal_id: AtomicI64,
    next_favorite_id: AtomicI64,
}

/// In-memory storage backend
#[derive(Clone, Default)]
pub struct MemoryStorage {
    tables: Arc<Tables>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all stored data
    pub fn clear(&self) {
        self.tables.recipes.clear();
        self.tables.searches.clear();
        self.tables.goals.clear();
        self.tables.meals.clear();
        self.tables.profiles.clear();
        self.tables.favorites.clear();
    }
}

fn next_id(counter: &AtomicI64) -> i64 {
    counter.fetch_add(1, Ordering::Relaxed) + 1
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn create_recipe(&self, recipe: NewRecipe) -> Result<Recipe> {
        let id = next_id(&self.tables.next_recipe_id);
        let recipe = recipe.into_recipe(id);
        self.tables.recipes.insert(id, recipe.clone());
        Ok(recipe)
    }

    async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>> {
        Ok(self.tables.recipes.get(&id).map(|r| r.clone()))
    }

    async fn get_all_recipes(&self) -> Result<Vec<Recipe>> {
        let mut recipes: Vec<Recipe> = self
            .tables
            .recipes
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        recipes.sort_by_key(|r| r.id);
        Ok(recipes)
    }

    async fn record_search(&self, request: NewSearchRequest) -> Result<SearchRequest> {
        let id = next_id(&self.tables.next_search_id);
        let stored = SearchRequest {
            id,
            ingredient1: request.ingredient1,
            ingredient2: request.ingredient2,
            ingredient3: request.ingredient3,
            ingredient4: request.ingredient4,
            max_time: request.max_time,
            difficulty: request.difficulty,
            max_cost: request.max_cost,
            sort_by: request.sort_by,
        };
        self.tables.searches.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_nutritional_goal(&self, user_id: &str) -> Result<Option<NutritionalGoal>> {
        let goal = self
            .tables
            .goals
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .max_by_key(|g| (g.updated_at, g.id));
        Ok(goal)
    }

    async fn create_nutritional_goal(&self, goal: NewNutritionalGoal) -> Result<NutritionalGoal> {
        let now = Utc::now();
        let id = next_id(&self.tables.next_goal_id);
        let stored = NutritionalGoal {
            id,
            user_id: goal.user_id,
            daily_calories: goal.daily_calories,
            daily_protein: goal.daily_protein,
            daily_carbs: goal.daily_carbs,
            daily_fat: goal.daily_fat,
            daily_fiber: goal.daily_fiber,
            daily_sodium: goal.daily_sodium,
            created_at: now,
            updated_at: now,
        };
        self.tables.goals.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_nutritional_goal(
        &self,
        user_id: &str,
        update: NutritionalGoalUpdate,
    ) -> Result<NutritionalGoal> {
        let current = self
            .get_nutritional_goal(user_id)
            .await?
            .ok_or_else(|| anyhow!("no nutritional goal exists for user {user_id}"))?;
        let updated = update.apply(&current);
        self.tables.goals.insert(updated.id, updated.clone());
        Ok(updated)
    }

    async fn create_meal_entry(&self, entry: NewMealEntry) -> Result<MealEntry> {
        let id = next_id(&self.tables.next_meal_id);
        let stored = MealEntry {
            id,
            user_id: entry.user_id,
            recipe_id: entry.recipe_id,
            servings: entry.servings,
            meal_type: entry.meal_type,
            date: entry.date,
            created_at: Utc::now(),
        };
        self.tables.meals.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_meal_entries_for_date(
        &self,
        date: NaiveDate,
        user_id: &str,
    ) -> Result<Vec<MealEntry>> {
        let mut entries: Vec<MealEntry> = self
            .tables
            .meals
            .iter()
            .filter(|entry| entry.value().date == date && entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by_key(|e| (e.created_at, e.id));
        Ok(entries)
    }

    async fn delete_meal_entry(&self, id: i64) -> Result<()> {
        self.tables.meals.remove(&id);
        Ok(())
    }

    async fn get_user_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        Ok(self.tables.profiles.get(user_id).map(|p| p.clone()))
    }

    async fn create_user_profile(&self, profile: UserProfile) -> Result<UserProfile> {
        self.tables
            .profiles
            .insert(profile.user_id.clone(), profile.clone());
        Ok(profile)
    }

    async fn update_user_profile(
        &self,
        user_id: &str,
        update: UserProfileUpdate,
    ) -> Result<UserProfile> {
        let current = self
            .get_user_profile(user_id)
            .await?
            .ok_or_else(|| anyhow!("no profile exists for user {user_id}"))?;
        let updated = update.apply(&current);
        self.tables
            .profiles
            .insert(user_id.to_owned(), updated.clone());
        Ok(updated)
    }

    async fn get_favorite_recipes(&self, user_id: &str) -> Result<Vec<Recipe>> {
        let mut favorites: Vec<FavoriteRecipe> = self
            .tables
            .favorites
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        favorites.sort_by_key(|f| f.id);

        // A favorite pointing at a deleted recipe is simply omitted.
        let recipes = favorites
            .into_iter()
            .filter_map(|f| self.tables.recipes.get(&f.recipe_id).map(|r| r.clone()))
            .collect();
        Ok(recipes)
    }

    async fn add_favorite_recipe(&self, user_id: &str, recipe_id: i64) -> Result<FavoriteRecipe> {
        let key = (user_id.to_owned(), recipe_id);
        let favorite = self
            .tables
            .favorites
            .entry(key)
            .or_insert_with(|| FavoriteRecipe {
                id: next_id(&self.tables.next_favorite_id),
                user_id: user_id.to_owned(),
                recipe_id,
                created_at: Utc::now(),
            })
            .clone();
        Ok(favorite)
    }

    async fn remove_favorite_recipe(&self, user_id: &str, recipe_id: i64) -> Result<()> {
        self.tables
            .favorites
            .remove(&(user_id.to_owned(), recipe_id));
        Ok(())
    }

    async fn is_recipe_favorite(&self, user_id: &str, recipe_id: i64) -> Result<bool> {
        Ok(self
            .tables
            .favorites
            .contains_key(&(user_id.to_owned(), recipe_id)))
    }
}
