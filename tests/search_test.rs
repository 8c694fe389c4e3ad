// ABOUTME: Integration tests for the recipe search pipeline
// ABOUTME: Covers ingredient matching, filters, sorting, and search logging behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sazon Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sazon::matching::matches_ingredients;
use sazon::models::{
    Difficulty, FavoriteRecipe, MealEntry, NewMealEntry, NewNutritionalGoal, NewRecipe,
    NewSearchRequest, NutritionInfo, NutritionalGoal, NutritionalGoalUpdate, Recipe,
    RecipeSearchParams, SearchRequest, SortKey, UserProfile, UserProfileUpdate,
};
use sazon::search::search_recipes;
use sazon::storage::{MemoryStorage, StorageProvider};

fn new_recipe(name: &str, base: [&str; 4]) -> NewRecipe {
    NewRecipe {
        name: name.into(),
        description: String::new(),
        ingredients: Vec::new(),
        base_ingredients: base.iter().map(|s| (*s).to_owned()).collect(),
        steps: Vec::new(),
        nutrition: NutritionInfo::default(),
        estimated_cost: 10.0,
        prep_time_mins: 10,
        cook_time_mins: 20,
        difficulty: Difficulty::Facil,
        health_score: 50,
        servings: 2,
        image_url: None,
        tags: Vec::new(),
    }
}

fn params(ingredients: [&str; 4]) -> RecipeSearchParams {
    RecipeSearchParams {
        ingredient1: ingredients[0].into(),
        ingredient2: ingredients[1].into(),
        ingredient3: ingredients[2].into(),
        ingredient4: ingredients[3].into(),
        ..RecipeSearchParams::default()
    }
}

#[test]
fn test_three_of_four_threshold() {
    let base = vec![
        "pollo".to_owned(),
        "arroz".to_owned(),
        "cebolla".to_owned(),
        "ajo".to_owned(),
    ];
    assert!(matches_ingredients(
        ["pollo", "arroz", "cebolla", "zanahoria"],
        &base
    ));
    assert!(!matches_ingredients(
        ["pollo", "arroz", "tomate", "zanahoria"],
        &base
    ));
}

#[test]
fn test_matching_is_order_independent() {
    let base = vec![
        "pollo".to_owned(),
        "arroz".to_owned(),
        "cebolla".to_owned(),
        "ajo".to_owned(),
    ];
    assert!(matches_ingredients(["ajo", "cebolla", "arroz", "pollo"], &base));
    assert!(matches_ingredients(["cebolla", "pollo", "ajo", "arroz"], &base));
}

#[test]
fn test_bidirectional_substring_match() {
    let base = vec![
        "pechuga de pollo".to_owned(),
        "arroz".to_owned(),
        "cebolla".to_owned(),
        "ajo".to_owned(),
    ];
    // Query term inside base ingredient
    assert!(matches_ingredients(["pollo", "arroz", "cebolla", "x"], &base));
    // Base ingredient inside query term
    assert!(matches_ingredients(
        ["pechuga de pollo asada", "arroz blanco", "cebolla roja", "x"],
        &base
    ));
}

#[test]
fn test_empty_terms_never_match() {
    let base = vec![
        "pollo".to_owned(),
        "arroz".to_owned(),
        "cebolla".to_owned(),
        "ajo".to_owned(),
    ];
    // An empty query term must not count as a hit against every ingredient
    assert!(!matches_ingredients(["", "", "pollo", "arroz"], &base));
}

#[tokio::test]
async fn test_search_applies_filters() -> Result<()> {
    let storage = MemoryStorage::new();

    let mut quick = new_recipe("rápida", ["pollo", "arroz", "cebolla", "ajo"]);
    quick.prep_time_mins = 5;
    quick.cook_time_mins = 10;
    let mut slow = new_recipe("lenta", ["pollo", "arroz", "cebolla", "ajo"]);
    slow.prep_time_mins = 30;
    slow.cook_time_mins = 60;

    storage.create_recipe(quick).await?;
    storage.create_recipe(slow).await?;

    let p = RecipeSearchParams {
        max_time: Some(30),
        ..params(["pollo", "arroz", "cebolla", "ajo"])
    };
    let results = search_recipes(&storage, &p).await?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "rápida");
    Ok(())
}

#[tokio::test]
async fn test_search_sorts_by_difficulty_rank() -> Result<()> {
    let storage = MemoryStorage::new();

    for (name, diff) in [
        ("avanzada", Difficulty::Avanzado),
        ("trivial", Difficulty::MuyFacil),
        ("media", Difficulty::Intermedio),
    ] {
        let mut r = new_recipe(name, ["pollo", "arroz", "cebolla", "ajo"]);
        r.difficulty = diff;
        storage.create_recipe(r).await?;
    }

    let p = RecipeSearchParams {
        sort_by: SortKey::Difficulty,
        ..params(["pollo", "arroz", "cebolla", "ajo"])
    };
    let results = search_recipes(&storage, &p).await?;
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["trivial", "media", "avanzada"]);
    Ok(())
}

#[tokio::test]
async fn test_repeated_search_is_deterministic() -> Result<()> {
    let storage = MemoryStorage::new();

    for health in [80, 80, 80, 60] {
        let mut r = new_recipe("receta", ["pollo", "arroz", "cebolla", "ajo"]);
        r.health_score = health;
        storage.create_recipe(r).await?;
    }

    let p = params(["pollo", "arroz", "cebolla", "ajo"]);
    let first = search_recipes(&storage, &p).await?;
    let second = search_recipes(&storage, &p).await?;
    let ids = |rs: &[Recipe]| rs.iter().map(|r| r.id).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
    Ok(())
}

#[tokio::test]
async fn test_search_rejects_blank_ingredients() {
    let storage = MemoryStorage::new();
    let p = params(["pollo", "arroz", "cebolla", "   "]);
    let result = search_recipes(&storage, &p).await;
    assert!(result.is_err());
}

/// Storage wrapper whose search log always fails, for verifying that the
/// search itself still succeeds.
#[derive(Clone)]
struct FailingSearchLog {
    inner: MemoryStorage,
}

#[async_trait]
impl StorageProvider for FailingSearchLog {
    async fn create_recipe(&self, recipe: NewRecipe) -> Result<Recipe> {
        self.inner.create_recipe(recipe).await
    }

    async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>> {
        self.inner.get_recipe(id).await
    }

    async fn get_all_recipes(&self) -> Result<Vec<Recipe>> {
        self.inner.get_all_recipes().await
    }

    async fn record_search(&self, _request: NewSearchRequest) -> Result<SearchRequest> {
        bail!("search log unavailable")
    }

    async fn get_nutritional_goal(&self, user_id: &str) -> Result<Option<NutritionalGoal>> {
        self.inner.get_nutritional_goal(user_id).await
    }

    async fn create_nutritional_goal(&self, goal: NewNutritionalGoal) -> Result<NutritionalGoal> {
        self.inner.create_nutritional_goal(goal).await
    }

    async fn update_nutritional_goal(
        &self,
        user_id: &str,
        update: NutritionalGoalUpdate,
    ) -> Result<NutritionalGoal> {
        self.inner.update_nutritional_goal(user_id, update).await
    }

    async fn create_meal_entry(&self, entry: NewMealEntry) -> Result<MealEntry> {
        self.inner.create_meal_entry(entry).await
    }

    async fn get_meal_entries_for_date(
        &self,
        date: NaiveDate,
        user_id: &str,
    ) -> Result<Vec<MealEntry>> {
        self.inner.get_meal_entries_for_date(date, user_id).await
    }

    async fn delete_meal_entry(&self, id: i64) -> Result<()> {
        self.inner.delete_meal_entry(id).await
    }

    async fn get_user_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        self.inner.get_user_profile(user_id).await
    }

    async fn create_user_profile(&self, profile: UserProfile) -> Result<UserProfile> {
        self.inner.create_user_profile(profile).await
    }

    async fn update_user_profile(
        &self,
        user_id: &str,
        update: UserProfileUpdate,
    ) -> Result<UserProfile> {
        self.inner.update_user_profile(user_id, update).await
    }

    async fn get_favorite_recipes(&self, user_id: &str) -> Result<Vec<Recipe>> {
        self.inner.get_favorite_recipes(user_id).await
    }

    async fn add_favorite_recipe(&self, user_id: &str, recipe_id: i64) -> Result<FavoriteRecipe> {
        self.inner.add_favorite_recipe(user_id, recipe_id).await
    }

    async fn remove_favorite_recipe(&self, user_id: &str, recipe_id: i64) -> Result<()> {
        self.inner.remove_favorite_recipe(user_id, recipe_id).await
    }

    async fn is_recipe_favorite(&self, user_id: &str, recipe_id: i64) -> Result<bool> {
        self.inner.is_recipe_favorite(user_id, recipe_id).await
    }
}

#[tokio::test]
async fn test_search_succeeds_when_logging_fails() -> Result<()> {
    let storage = FailingSearchLog {
        inner: MemoryStorage::new(),
    };
    storage
        .create_recipe(new_recipe("receta", ["pollo", "arroz", "cebolla", "ajo"]))
        .await?;

    let results = search_recipes(&storage, &params(["pollo", "arroz", "cebolla", "ajo"])).await?;
    assert_eq!(results.len(), 1);
    Ok(())
}
