// ABOUTME: SQLite storage backend over sqlx with inline schema migrations
// ABOUTME: Nested recipe data lives in JSON TEXT columns; dates are ISO strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sazon Project

//! SQLite storage implementation.
//!
//! Schema is created on connect via `CREATE TABLE IF NOT EXISTS`
//! migrations. Recipe ingredient lists, steps, nutrition facts, and tags
//! are serialized to JSON TEXT columns; timestamps are RFC 3339 TEXT and
//! calendar dates are `YYYY-MM-DD` TEXT.

use super::StorageProvider;
use crate::models::{
    FavoriteRecipe, MealEntry, NewMealEntry, NewNutritionalGoal, NewRecipe, NewSearchRequest,
    NutritionalGoal, NutritionalGoalUpdate, Recipe, SearchRequest, UserProfile, UserProfileUpdate,
};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// SQLite storage backend
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Open (creating if necessary) the database at `database_url` and run
    /// migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") && !database_url.contains('?')
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .with_context(|| format!("failed to connect to {database_url}"))?;

        let storage = Self { pool };
        storage.migrate().await?;
        Ok(storage)
    }

    /// Access the underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run schema migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any DDL statement fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                ingredients TEXT NOT NULL,      -- JSON array
                base_ingredients TEXT NOT NULL, -- JSON array, the 4 search terms
                steps TEXT NOT NULL,            -- JSON array
                nutrition TEXT NOT NULL,        -- JSON object, per serving
                estimated_cost REAL NOT NULL,
                prep_time INTEGER NOT NULL,
                cook_time INTEGER NOT NULL,
                difficulty TEXT NOT NULL,
                health_score INTEGER NOT NULL,
                servings INTEGER NOT NULL DEFAULT 2,
                image_url TEXT,
                tags TEXT NOT NULL DEFAULT '[]'
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS search_requests (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                ingredient1 TEXT NOT NULL,
                ingredient2 TEXT NOT NULL,
                ingredient3 TEXT NOT NULL,
                ingredient4 TEXT NOT NULL,
                max_time INTEGER,
                difficulty TEXT,
                max_cost REAL,
                sort_by TEXT NOT NULL DEFAULT 'health'
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutritional_goals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                daily_calories INTEGER NOT NULL,
                daily_protein INTEGER NOT NULL,
                daily_carbs INTEGER NOT NULL,
                daily_fat INTEGER NOT NULL,
                daily_fiber INTEGER NOT NULL,
                daily_sodium INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_goals_user ON nutritional_goals(user_id, updated_at)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS meal_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                recipe_id INTEGER NOT NULL,
                servings REAL NOT NULL DEFAULT 1,
                meal_type TEXT NOT NULL,
                date TEXT NOT NULL, -- YYYY-MM-DD
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_meals_user_date ON meal_entries(user_id, date)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_profiles (
                user_id TEXT PRIMARY KEY,
                age INTEGER,
                height_cm REAL,
                weight_kg REAL,
                gender TEXT,
                activity_level TEXT NOT NULL DEFAULT 'Moderado',
                goal TEXT NOT NULL DEFAULT 'Mantener peso',
                restrictions TEXT NOT NULL DEFAULT '[]', -- JSON array
                allergies TEXT NOT NULL DEFAULT '[]',    -- JSON array
                preferences TEXT NOT NULL DEFAULT '[]',  -- JSON array
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS favorite_recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                recipe_id INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                UNIQUE(user_id, recipe_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn row_to_recipe(row: &SqliteRow) -> Result<Recipe> {
    Ok(Recipe {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        ingredients: serde_json::from_str(row.get::<&str, _>("ingredients"))?,
        base_ingredients: serde_json::from_str(row.get::<&str, _>("base_ingredients"))?,
        steps: serde_json::from_str(row.get::<&str, _>("steps"))?,
        nutrition: serde_json::from_str(row.get::<&str, _>("nutrition"))?,
        estimated_cost: row.get("estimated_cost"),
        prep_time_mins: row.get::<i64, _>("prep_time").try_into()?,
        cook_time_mins: row.get::<i64, _>("cook_time").try_into()?,
        difficulty: row.get::<&str, _>("difficulty").parse().map_err(|e| anyhow!("{e}"))?,
        health_score: row.get::<i64, _>("health_score").try_into()?,
        servings: row.get::<i64, _>("servings").try_into()?,
        image_url: row.get("image_url"),
        tags: serde_json::from_str(row.get::<&str, _>("tags"))?,
    })
}

fn row_to_goal(row: &SqliteRow) -> Result<NutritionalGoal> {
    Ok(NutritionalGoal {
        id: row.get("id"),
        user_id: row.get("user_id"),
        daily_calories: row.get::<i64, _>("daily_calories").try_into()?,
        daily_protein: row.get::<i64, _>("daily_protein").try_into()?,
        daily_carbs: row.get::<i64, _>("daily_carbs").try_into()?,
        daily_fat: row.get::<i64, _>("daily_fat").try_into()?,
        daily_fiber: row.get::<i64, _>("daily_fiber").try_into()?,
        daily_sodium: row.get::<i64, _>("daily_sodium").try_into()?,
        created_at: parse_timestamp(row.get("created_at"))?,
        updated_at: parse_timestamp(row.get("updated_at"))?,
    })
}

fn row_to_meal_entry(row: &SqliteRow) -> Result<MealEntry> {
    Ok(MealEntry {
        id: row.get("id"),
        user_id: row.get("user_id"),
        recipe_id: row.get("recipe_id"),
        servings: row.get("servings"),
        meal_type: row.get::<&str, _>("meal_type").parse().map_err(|e| anyhow!("{e}"))?,
        date: parse_date(row.get("date"))?,
        created_at: parse_timestamp(row.get("created_at"))?,
    })
}

fn row_to_favorite(row: &SqliteRow) -> Result<FavoriteRecipe> {
    Ok(FavoriteRecipe {
        id: row.get("id"),
        user_id: row.get("user_id"),
        recipe_id: row.get("recipe_id"),
        created_at: parse_timestamp(row.get("created_at"))?,
    })
}

fn row_to_profile(row: &SqliteRow) -> Result<UserProfile> {
    let gender = row
        .get::<Option<&str>, _>("gender")
        .map(|s| s.parse::<crate::models::Gender>())
        .transpose()
        .map_err(|e| anyhow!("{e}"))?;
    Ok(UserProfile {
        user_id: row.get("user_id"),
        age: row
            .get::<Option<i64>, _>("age")
            .map(TryInto::try_into)
            .transpose()?,
        height_cm: row.get("height_cm"),
        weight_kg: row.get("weight_kg"),
        gender,
        activity_level: row
            .get::<&str, _>("activity_level")
            .parse()
            .map_err(|e| anyhow!("{e}"))?,
        goal: row.get::<&str, _>("goal").parse().map_err(|e| anyhow!("{e}"))?,
        restrictions: serde_json::from_str(row.get::<&str, _>("restrictions"))?,
        allergies: serde_json::from_str(row.get::<&str, _>("allergies"))?,
        preferences: serde_json::from_str(row.get::<&str, _>("preferences"))?,
        created_at: parse_timestamp(row.get("created_at"))?,
        updated_at: parse_timestamp(row.get("updated_at"))?,
    })
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("invalid timestamp: {raw}"))?
        .with_timezone(&Utc))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("invalid date: {raw}"))
}

#[async_trait]
impl StorageProvider for SqliteStorage {
    async fn create_recipe(&self, recipe: NewRecipe) -> Result<Recipe> {
        let result = sqlx::query(
            r"
            INSERT INTO recipes (
                name, description, ingredients, base_ingredients, steps,
                nutrition, estimated_cost, prep_time, cook_time, difficulty,
                health_score, servings, image_url, tags
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&recipe.name)
        .bind(&recipe.description)
        .bind(serde_json::to_string(&recipe.ingredients)?)
        .bind(serde_json::to_string(&recipe.base_ingredients)?)
        .bind(serde_json::to_string(&recipe.steps)?)
        .bind(serde_json::to_string(&recipe.nutrition)?)
        .bind(recipe.estimated_cost)
        .bind(i64::from(recipe.prep_time_mins))
        .bind(i64::from(recipe.cook_time_mins))
        .bind(recipe.difficulty.as_str())
        .bind(i64::from(recipe.health_score))
        .bind(i64::from(recipe.servings))
        .bind(&recipe.image_url)
        .bind(serde_json::to_string(&recipe.tags)?)
        .execute(&self.pool)
        .await?;

        Ok(recipe.into_recipe(result.last_insert_rowid()))
    }

    async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>> {
        let row = sqlx::query("SELECT * FROM recipes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_recipe).transpose()
    }

    async fn get_all_recipes(&self) -> Result<Vec<Recipe>> {
        let rows = sqlx::query("SELECT * FROM recipes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_recipe).collect()
    }

    async fn record_search(&self, request: NewSearchRequest) -> Result<SearchRequest> {
        let result = sqlx::query(
            r"
            INSERT INTO search_requests (
                ingredient1, ingredient2, ingredient3, ingredient4,
                max_time, difficulty, max_cost, sort_by
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&request.ingredient1)
        .bind(&request.ingredient2)
        .bind(&request.ingredient3)
        .bind(&request.ingredient4)
        .bind(request.max_time.map(i64::from))
        .bind(request.difficulty.map(|d| d.as_str()))
        .bind(request.max_cost)
        .bind(request.sort_by.as_str())
        .execute(&self.pool)
        .await?;

        Ok(SearchRequest {
            id: result.last_insert_rowid(),
            ingredient1: request.ingredient1,
            ingredient2: request.ingredient2,
            ingredient3: request.ingredient3,
            ingredient4: request.ingredient4,
            max_time: request.max_time,
            difficulty: request.difficulty,
            max_cost: request.max_cost,
            sort_by: request.sort_by,
        })
    }

    async fn get_nutritional_goal(&self, user_id: &str) -> Result<Option<NutritionalGoal>> {
        let row = sqlx::query(
            r"
            SELECT * FROM nutritional_goals
            WHERE user_id = ?
            ORDER BY updated_at DESC, id DESC
            LIMIT 1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_goal).transpose()
    }

    async fn create_nutritional_goal(&self, goal: NewNutritionalGoal) -> Result<NutritionalGoal> {
        let now = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO nutritional_goals (
                user_id, daily_calories, daily_protein, daily_carbs,
                daily_fat, daily_fiber, daily_sodium, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&goal.user_id)
        .bind(i64::from(goal.daily_calories))
        .bind(i64::from(goal.daily_protein))
        .bind(i64::from(goal.daily_carbs))
        .bind(i64::from(goal.daily_fat))
        .bind(i64::from(goal.daily_fiber))
        .bind(i64::from(goal.daily_sodium))
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(NutritionalGoal {
            id: result.last_insert_rowid(),
            user_id: goal.user_id,
            daily_calories: goal.daily_calories,
            daily_protein: goal.daily_protein,
            daily_carbs: goal.daily_carbs,
            daily_fat: goal.daily_fat,
            daily_fiber: goal.daily_fiber,
            daily_sodium: goal.daily_sodium,
            created_at: now,
            updated_at: now,
        })
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

        sqlx::query(
            r"
            UPDATE nutritional_goals SET
                daily_calories = ?, daily_protein = ?, daily_carbs = ?,
                daily_fat = ?, daily_fiber = ?, daily_sodium = ?, updated_at = ?
            WHERE id = ?
            ",
        )
        .bind(i64::from(updated.daily_calories))
        .bind(i64::from(updated.daily_protein))
        .bind(i64::from(updated.daily_carbs))
        .bind(i64::from(updated.daily_fat))
        .bind(i64::from(updated.daily_fiber))
        .bind(i64::from(updated.daily_sodium))
        .bind(updated.updated_at.to_rfc3339())
        .bind(updated.id)
        .execute(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn create_meal_entry(&self, entry: NewMealEntry) -> Result<MealEntry> {
        let now = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO meal_entries (user_id, recipe_id, servings, meal_type, date, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&entry.user_id)
        .bind(entry.recipe_id)
        .bind(entry.servings)
        .bind(entry.meal_type.as_str())
        .bind(entry.date.format("%Y-%m-%d").to_string())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(MealEntry {
            id: result.last_insert_rowid(),
            user_id: entry.user_id,
            recipe_id: entry.recipe_id,
            servings: entry.servings,
            meal_type: entry.meal_type,
            date: entry.date,
            created_at: now,
        })
    }

    async fn get_meal_entries_for_date(
        &self,
        date: NaiveDate,
        user_id: &str,
    ) -> Result<Vec<MealEntry>> {
        let rows = sqlx::query(
            r"
            SELECT * FROM meal_entries
            WHERE date = ? AND user_id = ?
            ORDER BY created_at, id
            ",
        )
        .bind(date.format("%Y-%m-%d").to_string())
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_meal_entry).collect()
    }

    async fn delete_meal_entry(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM meal_entries WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_user_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let row = sqlx::query("SELECT * FROM user_profiles WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_profile).transpose()
    }

    async fn create_user_profile(&self, profile: UserProfile) -> Result<UserProfile> {
        sqlx::query(
            r"
            INSERT INTO user_profiles (
                user_id, age, height_cm, weight_kg, gender, activity_level,
                goal, restrictions, allergies, preferences, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&profile.user_id)
        .bind(profile.age.map(i64::from))
        .bind(profile.height_cm)
        .bind(profile.weight_kg)
        .bind(profile.gender.map(|g| g.as_str()))
        .bind(profile.activity_level.as_str())
        .bind(profile.goal.as_str())
        .bind(serde_json::to_string(&profile.restrictions)?)
        .bind(serde_json::to_string(&profile.allergies)?)
        .bind(serde_json::to_string(&profile.preferences)?)
        .bind(profile.created_at.to_rfc3339())
        .bind(profile.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

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

        sqlx::query(
            r"
            UPDATE user_profiles SET
                age = ?, height_cm = ?, weight_kg = ?, gender = ?,
                activity_level = ?, goal = ?, restrictions = ?, allergies = ?,
                preferences = ?, updated_at = ?
            WHERE user_id = ?
            ",
        )
        .bind(updated.age.map(i64::from))
        .bind(updated.height_cm)
        .bind(updated.weight_kg)
        .bind(updated.gender.map(|g| g.as_str()))
        .bind(updated.activity_level.as_str())
        .bind(updated.goal.as_str())
        .bind(serde_json::to_string(&updated.restrictions)?)
        .bind(serde_json::to_string(&updated.allergies)?)
        .bind(serde_json::to_string(&updated.preferences)?)
        .bind(updated.updated_at.to_rfc3339())
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn get_favorite_recipes(&self, user_id: &str) -> Result<Vec<Recipe>> {
        let rows = sqlx::query(
            r"
            SELECT r.* FROM favorite_recipes f
            INNER JOIN recipes r ON r.id = f.recipe_id
            WHERE f.user_id = ?
            ORDER BY f.id
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_recipe).collect()
    }

    async fn add_favorite_recipe(&self, user_id: &str, recipe_id: i64) -> Result<FavoriteRecipe> {
        // The UNIQUE(user_id, recipe_id) constraint makes concurrent
        // duplicate adds converge on a single row.
        sqlx::query(
            r"
            INSERT INTO favorite_recipes (user_id, recipe_id, created_at)
            VALUES (?, ?, ?)
            ON CONFLICT(user_id, recipe_id) DO NOTHING
            ",
        )
        .bind(user_id)
        .bind(recipe_id)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        let row = sqlx::query(
            "SELECT * FROM favorite_recipes WHERE user_id = ? AND recipe_id = ?",
        )
        .bind(user_id)
        .bind(recipe_id)
        .fetch_one(&self.pool)
        .await?;
        row_to_favorite(&row)
    }

    async fn remove_favorite_recipe(&self, user_id: &str, recipe_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM favorite_recipes WHERE user_id = ? AND recipe_id = ?")
            .bind(user_id)
            .bind(recipe_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn is_recipe_favorite(&self, user_id: &str, recipe_id: i64) -> Result<bool> {
        let row = sqlx::query(
            "SELECT 1 FROM favorite_recipes WHERE user_id = ? AND recipe_id = ? LIMIT 1",
        )
        .bind(user_id)
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }
}
