// ABOUTME: Domain models for recipe discovery and daily nutrition tracking
// ABOUTME: Defines Recipe, MealEntry, NutritionalGoal, UserProfile, and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sazon Project

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Default daily goals used when a user has no stored [`NutritionalGoal`].
///
/// Order: calories, protein (g), carbs (g), fat (g), fiber (g), sodium (mg).
pub const DEFAULT_GOAL_CALORIES: u32 = 2000;
pub const DEFAULT_GOAL_PROTEIN: u32 = 150;
pub const DEFAULT_GOAL_CARBS: u32 = 250;
pub const DEFAULT_GOAL_FAT: u32 = 65;
pub const DEFAULT_GOAL_FIBER: u32 = 25;
pub const DEFAULT_GOAL_SODIUM: u32 = 2300;

/// Recipe difficulty level
///
/// The derived ordering is the ranking used for difficulty sorting:
/// `MuyFacil < Facil < Intermedio < Avanzado`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Difficulty {
    /// Very easy recipes, almost no technique required
    #[serde(rename = "Muy Fácil")]
    MuyFacil,
    /// Easy recipes, basic techniques
    #[default]
    #[serde(rename = "Fácil")]
    Facil,
    /// Moderate complexity
    #[serde(rename = "Intermedio")]
    Intermedio,
    /// Complex recipes, advanced techniques
    #[serde(rename = "Avanzado")]
    Avanzado,
}

impl Difficulty {
    /// Ordinal rank used for difficulty sorting (1 = easiest)
    #[must_use]
    pub const fn ordinal(&self) -> u8 {
        match self {
            Self::MuyFacil => 1,
            Self::Facil => 2,
            Self::Intermedio => 3,
            Self::Avanzado => 4,
        }
    }

    /// Display name (Spanish, as stored)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MuyFacil => "Muy Fácil",
            Self::Facil => "Fácil",
            Self::Intermedio => "Intermedio",
            Self::Avanzado => "Avanzado",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Muy Fácil" => Ok(Self::MuyFacil),
            "Fácil" => Ok(Self::Facil),
            "Intermedio" => Ok(Self::Intermedio),
            "Avanzado" => Ok(Self::Avanzado),
            other => Err(AppError::invalid_input(format!(
                "unknown difficulty: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meal slot a logged entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Desayuno,
    Almuerzo,
    Cena,
    Snack,
}

impl MealType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desayuno => "Desayuno",
            Self::Almuerzo => "Almuerzo",
            Self::Cena => "Cena",
            Self::Snack => "Snack",
        }
    }
}

impl std::str::FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Desayuno" => Ok(Self::Desayuno),
            "Almuerzo" => Ok(Self::Almuerzo),
            "Cena" => Ok(Self::Cena),
            "Snack" => Ok(Self::Snack),
            other => Err(AppError::invalid_input(format!("unknown meal type: {other}"))),
        }
    }
}

/// Biological gender used by the goal calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Masculino,
    Femenino,
    Otro,
}

impl Gender {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Masculino => "Masculino",
            Self::Femenino => "Femenino",
            Self::Otro => "Otro",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Masculino" => Ok(Self::Masculino),
            "Femenino" => Ok(Self::Femenino),
            "Otro" => Ok(Self::Otro),
            other => Err(AppError::invalid_input(format!("unknown gender: {other}"))),
        }
    }
}

/// Weekly activity level, mapped to a TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ActivityLevel {
    Sedentario,
    Ligero,
    #[default]
    Moderado,
    Activo,
    #[serde(rename = "Muy Activo")]
    MuyActivo,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR (McArdle activity factors)
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentario => 1.2,
            Self::Ligero => 1.375,
            Self::Moderado => 1.55,
            Self::Activo => 1.725,
            Self::MuyActivo => 1.9,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentario => "Sedentario",
            Self::Ligero => "Ligero",
            Self::Moderado => "Moderado",
            Self::Activo => "Activo",
            Self::MuyActivo => "Muy Activo",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sedentario" => Ok(Self::Sedentario),
            "Ligero" => Ok(Self::Ligero),
            "Moderado" => Ok(Self::Moderado),
            "Activo" => Ok(Self::Activo),
            "Muy Activo" => Ok(Self::MuyActivo),
            other => Err(AppError::invalid_input(format!(
                "unknown activity level: {other}"
            ))),
        }
    }
}

/// User's weight objective, mapped to a daily calorie adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WeightGoal {
    #[serde(rename = "Perder peso")]
    PerderPeso,
    #[default]
    #[serde(rename = "Mantener peso")]
    MantenerPeso,
    #[serde(rename = "Ganar peso")]
    GanarPeso,
    #[serde(rename = "Ganar masa muscular")]
    GanarMasaMuscular,
}

impl WeightGoal {
    /// Daily calorie adjustment relative to maintenance
    #[must_use]
    pub const fn calorie_adjustment(&self) -> f64 {
        match self {
            Self::PerderPeso => -500.0,
            Self::MantenerPeso => 0.0,
            Self::GanarPeso | Self::GanarMasaMuscular => 500.0,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PerderPeso => "Perder peso",
            Self::MantenerPeso => "Mantener peso",
            Self::GanarPeso => "Ganar peso",
            Self::GanarMasaMuscular => "Ganar masa muscular",
        }
    }
}

impl std::str::FromStr for WeightGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Perder peso" => Ok(Self::PerderPeso),
            "Mantener peso" => Ok(Self::MantenerPeso),
            "Ganar peso" => Ok(Self::GanarPeso),
            "Ganar masa muscular" => Ok(Self::GanarMasaMuscular),
            other => Err(AppError::invalid_input(format!(
                "unknown weight goal: {other}"
            ))),
        }
    }
}

/// Single ingredient on a recipe's display list (with quantity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Human-readable ingredient name
    pub name: String,
    /// Amount in the given unit (free-form, display only)
    pub amount: String,
    /// Measurement unit (free-form, display only)
    pub unit: String,
}

/// One ordered cooking step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    /// 1-based step position
    pub step_number: u32,
    /// Instruction text
    pub instruction: String,
    /// Approximate time this step takes
    pub time_minutes: u32,
}

/// Per-serving nutrition facts for a recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct NutritionInfo {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Fiber in grams
    pub fiber: f64,
    /// Sodium in milligrams
    pub sodium: f64,
}

/// A complete recipe as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier, assigned by storage
    pub id: i64,
    /// Recipe name
    pub name: String,
    /// Recipe description
    pub description: String,
    /// Full ingredient list with quantities (display)
    pub ingredients: Vec<RecipeIngredient>,
    /// The 4 canonical ingredients used for search matching
    pub base_ingredients: Vec<String>,
    /// Ordered cooking steps
    pub steps: Vec<RecipeStep>,
    /// Per-serving nutrition facts
    pub nutrition: NutritionInfo,
    /// Estimated cost, currency-agnostic
    pub estimated_cost: f64,
    /// Preparation time in minutes
    pub prep_time_mins: u32,
    /// Cooking time in minutes
    pub cook_time_mins: u32,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Editorial healthiness rating, 1-100
    pub health_score: u8,
    /// Number of servings the recipe makes
    pub servings: u32,
    /// Optional image URL
    pub image_url: Option<String>,
    /// Free-form tags
    pub tags: Vec<String>,
}

impl Recipe {
    /// Total time (prep + cook) in minutes
    #[must_use]
    pub const fn total_time_mins(&self) -> u32 {
        self.prep_time_mins + self.cook_time_mins
    }
}

/// Recipe data for creation; the id is assigned by storage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub base_ingredients: Vec<String>,
    pub steps: Vec<RecipeStep>,
    pub nutrition: NutritionInfo,
    pub estimated_cost: f64,
    pub prep_time_mins: u32,
    pub cook_time_mins: u32,
    pub difficulty: Difficulty,
    pub health_score: u8,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

const fn default_servings() -> u32 {
    2
}

impl NewRecipe {
    /// Attach an assigned id, producing a stored [`Recipe`]
    #[must_use]
    pub fn into_recipe(self, id: i64) -> Recipe {
        Recipe {
            id,
            name: self.name,
            description: self.description,
            ingredients: self.ingredients,
            base_ingredients: self.base_ingredients,
            steps: self.steps,
            nutrition: self.nutrition,
            estimated_cost: self.estimated_cost,
            prep_time_mins: self.prep_time_mins,
            cook_time_mins: self.cook_time_mins,
            difficulty: self.difficulty,
            health_score: self.health_score,
            servings: self.servings,
            image_url: self.image_url,
            tags: self.tags,
        }
    }
}

/// Criterion used to order search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Descending health score (default)
    #[default]
    Health,
    /// Ascending total time
    Time,
    /// Ascending estimated cost
    Cost,
    /// Ascending difficulty rank
    Difficulty,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Time => "time",
            Self::Cost => "cost",
            Self::Difficulty => "difficulty",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "health" => Ok(Self::Health),
            "time" => Ok(Self::Time),
            "cost" => Ok(Self::Cost),
            "difficulty" => Ok(Self::Difficulty),
            other => Err(AppError::invalid_input(format!("unknown sort key: {other}"))),
        }
    }
}

/// Parameters for a recipe search: exactly four ingredients plus
/// optional filters and a sort criterion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSearchParams {
    pub ingredient1: String,
    pub ingredient2: String,
    pub ingredient3: String,
    pub ingredient4: String,
    /// Reject recipes whose prep + cook time exceeds this (minutes)
    #[serde(default)]
    pub max_time: Option<u32>,
    /// Keep only recipes with exactly this difficulty
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Reject recipes whose estimated cost exceeds this
    #[serde(default)]
    pub max_cost: Option<f64>,
    /// Sort criterion; defaults to health
    #[serde(default)]
    pub sort_by: SortKey,
}

impl RecipeSearchParams {
    /// The four query terms in order
    #[must_use]
    pub fn ingredients(&self) -> [&str; 4] {
        [
            &self.ingredient1,
            &self.ingredient2,
            &self.ingredient3,
            &self.ingredient4,
        ]
    }

    /// Validate the search parameters.
    ///
    /// Each of the four ingredients must be non-blank; a present
    /// `max_cost` must be non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::invalid_input`] naming the offending field.
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("ingredient1", &self.ingredient1),
            ("ingredient2", &self.ingredient2),
            ("ingredient3", &self.ingredient3),
            ("ingredient4", &self.ingredient4),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::invalid_input(format!("{field} is required")));
            }
        }
        if let Some(cost) = self.max_cost {
            if cost < 0.0 {
                return Err(AppError::invalid_input("maxCost must be non-negative"));
            }
        }
        Ok(())
    }
}

/// Log record of one search call; write-once
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub id: i64,
    pub ingredient1: String,
    pub ingredient2: String,
    pub ingredient3: String,
    pub ingredient4: String,
    pub max_time: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub max_cost: Option<f64>,
    pub sort_by: SortKey,
}

/// Search log data prior to id assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSearchRequest {
    pub ingredient1: String,
    pub ingredient2: String,
    pub ingredient3: String,
    pub ingredient4: String,
    pub max_time: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub max_cost: Option<f64>,
    pub sort_by: SortKey,
}

impl From<&RecipeSearchParams> for NewSearchRequest {
    fn from(params: &RecipeSearchParams) -> Self {
        Self {
            ingredient1: params.ingredient1.clone(),
            ingredient2: params.ingredient2.clone(),
            ingredient3: params.ingredient3.clone(),
            ingredient4: params.ingredient4.clone(),
            max_time: params.max_time,
            difficulty: params.difficulty,
            max_cost: params.max_cost,
            sort_by: params.sort_by,
        }
    }
}

/// A user's stored daily nutrition targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalGoal {
    pub id: i64,
    pub user_id: String,
    pub daily_calories: u32,
    /// grams
    pub daily_protein: u32,
    /// grams
    pub daily_carbs: u32,
    /// grams
    pub daily_fat: u32,
    /// grams
    pub daily_fiber: u32,
    /// milligrams
    pub daily_sodium: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Goal data for creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNutritionalGoal {
    pub user_id: String,
    pub daily_calories: u32,
    pub daily_protein: u32,
    pub daily_carbs: u32,
    pub daily_fat: u32,
    pub daily_fiber: u32,
    pub daily_sodium: u32,
}

impl NewNutritionalGoal {
    /// Validate goal values against accepted daily ranges.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::invalid_input`] naming the field and range.
    pub fn validate(&self) -> AppResult<()> {
        validate_range("dailyCalories", self.daily_calories, 1000, 5000)?;
        validate_range("dailyProtein", self.daily_protein, 10, 300)?;
        validate_range("dailyCarbs", self.daily_carbs, 50, 800)?;
        validate_range("dailyFat", self.daily_fat, 20, 200)?;
        validate_range("dailyFiber", self.daily_fiber, 15, 100)?;
        validate_range("dailySodium", self.daily_sodium, 500, 5000)?;
        Ok(())
    }
}

fn validate_range(field: &str, value: u32, min: u32, max: u32) -> AppResult<()> {
    if value < min || value > max {
        return Err(AppError::invalid_input(format!(
            "{field} must be between {min} and {max}"
        )));
    }
    Ok(())
}

/// Partial update for a stored goal; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalGoalUpdate {
    pub daily_calories: Option<u32>,
    pub daily_protein: Option<u32>,
    pub daily_carbs: Option<u32>,
    pub daily_fat: Option<u32>,
    pub daily_fiber: Option<u32>,
    pub daily_sodium: Option<u32>,
}

impl NutritionalGoalUpdate {
    /// Apply this update over an existing goal, refreshing `updated_at`
    #[must_use]
    pub fn apply(&self, goal: &NutritionalGoal) -> NutritionalGoal {
        NutritionalGoal {
            id: goal.id,
            user_id: goal.user_id.clone(),
            daily_calories: self.daily_calories.unwrap_or(goal.daily_calories),
            daily_protein: self.daily_protein.unwrap_or(goal.daily_protein),
            daily_carbs: self.daily_carbs.unwrap_or(goal.daily_carbs),
            daily_fat: self.daily_fat.unwrap_or(goal.daily_fat),
            daily_fiber: self.daily_fiber.unwrap_or(goal.daily_fiber),
            daily_sodium: self.daily_sodium.unwrap_or(goal.daily_sodium),
            created_at: goal.created_at,
            updated_at: Utc::now(),
        }
    }
}

/// One logged instance of a user eating a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub id: i64,
    pub user_id: String,
    pub recipe_id: i64,
    /// Servings eaten; positive decimal, not restricted to integers
    pub servings: f64,
    pub meal_type: MealType,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Meal entry data for creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMealEntry {
    pub user_id: String,
    pub recipe_id: i64,
    pub servings: f64,
    pub meal_type: MealType,
    pub date: NaiveDate,
}

impl NewMealEntry {
    /// Validate the entry; servings must be within 0.1..=10.0.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::invalid_input`] if servings is out of range.
    pub fn validate(&self) -> AppResult<()> {
        if !(0.1..=10.0).contains(&self.servings) {
            return Err(AppError::invalid_input(
                "servings must be between 0.1 and 10",
            ));
        }
        Ok(())
    }
}

/// Optional per-user biometric and preference record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    /// Age in years
    pub age: Option<u32>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    pub gender: Option<Gender>,
    pub activity_level: ActivityLevel,
    pub goal: WeightGoal,
    /// Dietary restrictions (e.g. "Sin gluten")
    pub restrictions: Vec<String>,
    /// Food allergies
    pub allergies: Vec<String>,
    /// Cuisine/diet preferences (e.g. "Vegetariano")
    pub preferences: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Empty profile for a user, with default activity level and goal
    #[must_use]
    pub fn empty(user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            age: None,
            height_cm: None,
            weight_kg: None,
            gender: None,
            activity_level: ActivityLevel::default(),
            goal: WeightGoal::default(),
            restrictions: Vec::new(),
            allergies: Vec::new(),
            preferences: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a profile; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileUpdate {
    pub age: Option<u32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<WeightGoal>,
    pub restrictions: Option<Vec<String>>,
    pub allergies: Option<Vec<String>>,
    pub preferences: Option<Vec<String>>,
}

impl UserProfileUpdate {
    /// Apply this update over an existing profile, refreshing `updated_at`
    #[must_use]
    pub fn apply(&self, profile: &UserProfile) -> UserProfile {
        UserProfile {
            user_id: profile.user_id.clone(),
            age: self.age.or(profile.age),
            height_cm: self.height_cm.or(profile.height_cm),
            weight_kg: self.weight_kg.or(profile.weight_kg),
            gender: self.gender.or(profile.gender),
            activity_level: self.activity_level.unwrap_or(profile.activity_level),
            goal: self.goal.unwrap_or(profile.goal),
            restrictions: self
                .restrictions
                .clone()
                .unwrap_or_else(|| profile.restrictions.clone()),
            allergies: self
                .allergies
                .clone()
                .unwrap_or_else(|| profile.allergies.clone()),
            preferences: self
                .preferences
                .clone()
                .unwrap_or_else(|| profile.preferences.clone()),
            created_at: profile.created_at,
            updated_at: Utc::now(),
        }
    }
}

/// Membership row marking a recipe as a user's favorite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecipe {
    pub id: i64,
    pub user_id: String,
    pub recipe_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Derived, non-persisted view of one day's logged nutrition against
/// the applicable goal.
///
/// Totals are summed in floating point across all of the day's entries
/// and rounded once at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyNutritionSummary {
    pub date: NaiveDate,
    pub total_calories: u32,
    pub total_protein: u32,
    pub total_carbs: u32,
    pub total_fat: u32,
    pub total_fiber: u32,
    pub total_sodium: u32,
    pub goal_calories: u32,
    pub goal_protein: u32,
    pub goal_carbs: u32,
    pub goal_fat: u32,
    pub goal_fiber: u32,
    pub goal_sodium: u32,
}

/// Daily targets derived from a [`UserProfile`] by the goal calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTargets {
    /// kcal per day
    pub calories: u32,
    /// grams per day
    pub protein: u32,
    /// grams per day
    pub carbs: u32,
    /// grams per day
    pub fat: u32,
    /// grams per day
    pub fiber: u32,
    /// milligrams per day
    pub sodium: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_ordering_is_total() {
        assert!(Difficulty::MuyFacil < Difficulty::Facil);
        assert!(Difficulty::Facil < Difficulty::Intermedio);
        assert!(Difficulty::Intermedio < Difficulty::Avanzado);
        assert_eq!(Difficulty::MuyFacil.ordinal(), 1);
        assert_eq!(Difficulty::Avanzado.ordinal(), 4);
    }

    #[test]
    fn difficulty_round_trips_through_spanish_names() {
        for d in [
            Difficulty::MuyFacil,
            Difficulty::Facil,
            Difficulty::Intermedio,
            Difficulty::Avanzado,
        ] {
            assert_eq!(d.as_str().parse::<Difficulty>().unwrap(), d);
        }
        assert!("Experto".parse::<Difficulty>().is_err());
    }

    #[test]
    fn search_params_reject_blank_ingredients() {
        let params = RecipeSearchParams {
            ingredient1: "pollo".into(),
            ingredient2: "   ".into(),
            ingredient3: "arroz".into(),
            ingredient4: "ajo".into(),
            max_time: None,
            difficulty: None,
            max_cost: None,
            sort_by: SortKey::default(),
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("ingredient2"));
    }

    #[test]
    fn goal_validation_enforces_ranges() {
        let goal = NewNutritionalGoal {
            user_id: "u1".into(),
            daily_calories: 900,
            daily_protein: 150,
            daily_carbs: 250,
            daily_fat: 65,
            daily_fiber: 25,
            daily_sodium: 2300,
        };
        assert!(goal.validate().is_err());

        let goal = NewNutritionalGoal {
            daily_calories: 2000,
            ..goal
        };
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn meal_entry_servings_bounds() {
        let entry = NewMealEntry {
            user_id: "u1".into(),
            recipe_id: 1,
            servings: 0.05,
            meal_type: MealType::Almuerzo,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        };
        assert!(entry.validate().is_err());

        let entry = NewMealEntry {
            servings: 1.5,
            ..entry
        };
        assert!(entry.validate().is_ok());
    }
}
