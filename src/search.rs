// ABOUTME: Recipe search pipeline - ingredient gate, optional filters, stable sort
// ABOUTME: Service entry point also records the search request as a side channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sazon Project

//! Recipe search.
//!
//! The pipeline runs in four stages: the 3-of-4 ingredient gate
//! ([`crate::matching`]), then the optional `max_time`, `difficulty`, and
//! `max_cost` filters (all boundary-inclusive), then a stable sort by the
//! requested criterion. Ties keep repository order, so repeated searches
//! against an unchanged repository return identical lists.

use crate::errors::{AppError, AppResult};
use crate::matching::matches_ingredients;
use crate::models::{NewSearchRequest, Recipe, RecipeSearchParams, SortKey};
use crate::storage::StorageProvider;
use tracing::warn;

/// Apply the ingredient gate and optional filters to one recipe
fn passes_filters(recipe: &Recipe, params: &RecipeSearchParams) -> bool {
    if !matches_ingredients(params.ingredients(), &recipe.base_ingredients) {
        return false;
    }
    if let Some(max_time) = params.max_time {
        if recipe.total_time_mins() > max_time {
            return false;
        }
    }
    if let Some(difficulty) = params.difficulty {
        if recipe.difficulty != difficulty {
            return false;
        }
    }
    if let Some(max_cost) = params.max_cost {
        if recipe.estimated_cost > max_cost {
            return false;
        }
    }
    true
}

/// Filter `recipes` by the search parameters and stable-sort the survivors
/// by the requested criterion. Input order is repository order and is
/// preserved for equal sort keys.
#[must_use]
pub fn filter_and_sort(recipes: Vec<Recipe>, params: &RecipeSearchParams) -> Vec<Recipe> {
    let mut matched: Vec<Recipe> = recipes
        .into_iter()
        .filter(|r| passes_filters(r, params))
        .collect();

    match params.sort_by {
        SortKey::Health => matched.sort_by(|a, b| b.health_score.cmp(&a.health_score)),
        SortKey::Time => matched.sort_by_key(Recipe::total_time_mins),
        SortKey::Cost => matched.sort_by(|a, b| a.estimated_cost.total_cmp(&b.estimated_cost)),
        SortKey::Difficulty => matched.sort_by_key(|r| r.difficulty),
    }

    matched
}

/// Execute a recipe search against storage.
///
/// Validates the parameters, fetches all recipes, runs the filter/sort
/// pipeline, and records the search request for analytics. The search log
/// write is fire-and-forget: a failure there is logged at warn level and
/// never fails the search itself.
///
/// # Errors
///
/// Returns [`AppError::invalid_input`] for malformed parameters, or a
/// database error if the recipe fetch fails.
pub async fn search_recipes<S: StorageProvider>(
    storage: &S,
    params: &RecipeSearchParams,
) -> AppResult<Vec<Recipe>> {
    params.validate()?;

    let all_recipes = storage.get_all_recipes().await.map_err(AppError::from)?;
    let results = filter_and_sort(all_recipes, params);

    if let Err(err) = storage.record_search(NewSearchRequest::from(params)).await {
        warn!("failed to record search request: {err:#}");
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, NutritionInfo};

    fn recipe(id: i64, health: u8, prep: u32, cook: u32, cost: f64, diff: Difficulty) -> Recipe {
        Recipe {
            id,
            name: format!("receta {id}"),
            description: String::new(),
            ingredients: Vec::new(),
            base_ingredients: vec![
                "pollo".into(),
                "arroz".into(),
                "cebolla".into(),
                "ajo".into(),
            ],
            steps: Vec::new(),
            nutrition: NutritionInfo::default(),
            estimated_cost: cost,
            prep_time_mins: prep,
            cook_time_mins: cook,
            difficulty: diff,
            health_score: health,
            servings: 2,
            image_url: None,
            tags: Vec::new(),
        }
    }

    fn params(sort_by: SortKey) -> RecipeSearchParams {
        RecipeSearchParams {
            ingredient1: "pollo".into(),
            ingredient2: "arroz".into(),
            ingredient3: "cebolla".into(),
            ingredient4: "ajo".into(),
            max_time: None,
            difficulty: None,
            max_cost: None,
            sort_by,
        }
    }

    #[test]
    fn max_time_boundary_is_inclusive() {
        let recipes = vec![
            recipe(1, 50, 10, 20, 10.0, Difficulty::Facil), // total 30
            recipe(2, 50, 10, 21, 10.0, Difficulty::Facil), // total 31
        ];
        let p = RecipeSearchParams {
            max_time: Some(30),
            ..params(SortKey::Health)
        };
        let result = filter_and_sort(recipes, &p);
        assert_eq!(result.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn cost_sort_is_ascending() {
        let recipes = vec![
            recipe(1, 50, 5, 5, 22.00, Difficulty::Facil),
            recipe(2, 50, 5, 5, 12.00, Difficulty::Facil),
            recipe(3, 50, 5, 5, 18.00, Difficulty::Facil),
        ];
        let result = filter_and_sort(recipes, &params(SortKey::Cost));
        let costs: Vec<f64> = result.iter().map(|r| r.estimated_cost).collect();
        assert_eq!(costs, vec![12.00, 18.00, 22.00]);
    }

    #[test]
    fn ties_preserve_repository_order() {
        let recipes = vec![
            recipe(7, 80, 5, 5, 10.0, Difficulty::Facil),
            recipe(3, 80, 5, 5, 10.0, Difficulty::Facil),
            recipe(9, 80, 5, 5, 10.0, Difficulty::Facil),
        ];
        let result = filter_and_sort(recipes, &params(SortKey::Health));
        assert_eq!(result.iter().map(|r| r.id).collect::<Vec<_>>(), vec![7, 3, 9]);
    }
}
