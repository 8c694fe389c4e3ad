// ABOUTME: Daily nutrition aggregation across a day's logged meal entries
// ABOUTME: Sums serving-scaled recipe nutrition and compares against the user's goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sazon Project

//! Nutrition aggregator.
//!
//! Each meal entry contributes its recipe's per-serving nutrition scaled by
//! the entry's serving count. Sums accumulate in floating point and are
//! rounded once at the end, so rounding error does not compound per meal.
//! Entries whose recipe no longer exists are skipped silently.

use crate::errors::{AppError, AppResult};
use crate::models::{
    DailyNutritionSummary, NutritionalGoal, DEFAULT_GOAL_CALORIES, DEFAULT_GOAL_CARBS,
    DEFAULT_GOAL_FAT, DEFAULT_GOAL_FIBER, DEFAULT_GOAL_PROTEIN, DEFAULT_GOAL_SODIUM,
};
use crate::storage::StorageProvider;
use chrono::NaiveDate;
use tracing::debug;

#[derive(Default)]
struct Totals {
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    sodium: f64,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_total(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Compute the nutrition summary for one (date, user).
///
/// Fetches the day's meal entries, resolves each referenced recipe
/// (skipping orphaned references), scales by servings, sums, and rounds
/// the final totals. Goals come from the user's stored
/// [`NutritionalGoal`], falling back to the documented defaults when none
/// is set.
///
/// # Errors
///
/// Returns a database error if any storage call fails.
pub async fn daily_summary<S: StorageProvider>(
    storage: &S,
    date: NaiveDate,
    user_id: &str,
) -> AppResult<DailyNutritionSummary> {
    let entries = storage
        .get_meal_entries_for_date(date, user_id)
        .await
        .map_err(AppError::from)?;

    let mut totals = Totals::default();
    for entry in &entries {
        let Some(recipe) = storage
            .get_recipe(entry.recipe_id)
            .await
            .map_err(AppError::from)?
        else {
            // Orphaned reference: the recipe was deleted after logging.
            debug!(
                "skipping meal entry {} with missing recipe {}",
                entry.id, entry.recipe_id
            );
            continue;
        };

        totals.calories += recipe.nutrition.calories * entry.servings;
        totals.protein += recipe.nutrition.protein * entry.servings;
        totals.carbs += recipe.nutrition.carbs * entry.servings;
        totals.fat += recipe.nutrition.fat * entry.servings;
        totals.fiber += recipe.nutrition.fiber * entry.servings;
        totals.sodium += recipe.nutrition.sodium * entry.servings;
    }

    let goal = storage
        .get_nutritional_goal(user_id)
        .await
        .map_err(AppError::from)?;

    Ok(build_summary(date, &totals, goal.as_ref()))
}

fn build_summary(
    date: NaiveDate,
    totals: &Totals,
    goal: Option<&NutritionalGoal>,
) -> DailyNutritionSummary {
    DailyNutritionSummary {
        date,
        total_calories: round_total(totals.calories),
        total_protein: round_total(totals.protein),
        total_carbs: round_total(totals.carbs),
        total_fat: round_total(totals.fat),
        total_fiber: round_total(totals.fiber),
        total_sodium: round_total(totals.sodium),
        goal_calories: goal.map_or(DEFAULT_GOAL_CALORIES, |g| g.daily_calories),
        goal_protein: goal.map_or(DEFAULT_GOAL_PROTEIN, |g| g.daily_protein),
        goal_carbs: goal.map_or(DEFAULT_GOAL_CARBS, |g| g.daily_carbs),
        goal_fat: goal.map_or(DEFAULT_GOAL_FAT, |g| g.daily_fat),
        goal_fiber: goal.map_or(DEFAULT_GOAL_FIBER, |g| g.daily_fiber),
        goal_sodium: goal.map_or(DEFAULT_GOAL_SODIUM, |g| g.daily_sodium),
    }
}
