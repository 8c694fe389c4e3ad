// ABOUTME: Profile-driven nutrition goal derivation using Mifflin-St Jeor BMR
// ABOUTME: Pure calculation - activity multiplier, goal adjustment, fixed macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sazon Project

//! Derived nutrition-goal calculator.
//!
//! Computes suggested daily targets from a user's biometric profile. This
//! is a pure function with no side effects; the result is presented to the
//! user, never persisted automatically.
//!
//! # Scientific Reference
//!
//! Mifflin, M.D., et al. (1990). A new predictive equation for resting
//! energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//! 241-247. <https://doi.org/10.1093/ajcn/51.2.241>

use crate::models::{Gender, GoalTargets, UserProfile};

/// Fraction of daily calories allotted to protein (4 kcal/g)
const PROTEIN_CALORIE_SHARE: f64 = 0.25;
/// Fraction of daily calories allotted to carbohydrates (4 kcal/g)
const CARBS_CALORIE_SHARE: f64 = 0.45;
/// Fraction of daily calories allotted to fat (9 kcal/g)
const FAT_CALORIE_SHARE: f64 = 0.30;

/// Fixed daily fiber target in grams, independent of profile
const FIBER_G: u32 = 25;
/// Fixed daily sodium target in milligrams, independent of profile
const SODIUM_MG: u32 = 2300;

/// Basal metabolic rate via Mifflin-St Jeor.
///
/// `bmr = 10*weight + 6.25*height - 5*age + offset`, where the offset is
/// +5 for Masculino and -161 for any other gender.
fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let gender_offset = match gender {
        Gender::Masculino => 5.0,
        Gender::Femenino | Gender::Otro => -161.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + gender_offset
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_positive(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Calculate suggested daily goals from a profile.
///
/// Returns `None` unless age, height, weight, and gender are all present;
/// callers handle absence by prompting for more profile data. Activity
/// level scales the BMR into maintenance calories, the weight goal applies
/// a ±500 kcal adjustment, and macros are split 25% protein / 45% carbs /
/// 30% fat of the adjusted calories. Fiber and sodium targets are fixed.
#[must_use]
pub fn calculate_goals(profile: &UserProfile) -> Option<GoalTargets> {
    let age = profile.age?;
    let height_cm = profile.height_cm?;
    let weight_kg = profile.weight_kg?;
    let gender = profile.gender?;

    let bmr = mifflin_st_jeor(weight_kg, height_cm, age, gender);
    let daily_calories =
        bmr * profile.activity_level.multiplier() + profile.goal.calorie_adjustment();

    let calories = round_positive(daily_calories);
    let protein = round_positive(f64::from(calories) * PROTEIN_CALORIE_SHARE / 4.0);
    let carbs = round_positive(f64::from(calories) * CARBS_CALORIE_SHARE / 4.0);
    let fat = round_positive(f64::from(calories) * FAT_CALORIE_SHARE / 9.0);

    Some(GoalTargets {
        calories,
        protein,
        carbs,
        fat,
        fiber: FIBER_G,
        sodium: SODIUM_MG,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, WeightGoal};

    fn profile(age: u32, height: f64, weight: f64, gender: Gender) -> UserProfile {
        UserProfile {
            age: Some(age),
            height_cm: Some(height),
            weight_kg: Some(weight),
            gender: Some(gender),
            ..UserProfile::empty("u1")
        }
    }

    #[test]
    fn worked_example_moderate_male() {
        // bmr = 10*70 + 6.25*170 - 5*25 + 5 = 1642.5
        // calories = round(1642.5 * 1.55) = 2546
        let p = profile(25, 170.0, 70.0, Gender::Masculino);
        let targets = calculate_goals(&p).unwrap();
        assert_eq!(targets.calories, 2546);
        assert_eq!(targets.protein, 159);
        assert_eq!(targets.carbs, 286);
        assert_eq!(targets.fat, 85);
        assert_eq!(targets.fiber, 25);
        assert_eq!(targets.sodium, 2300);
    }

    #[test]
    fn non_male_genders_share_the_female_offset() {
        let f = calculate_goals(&profile(30, 165.0, 60.0, Gender::Femenino)).unwrap();
        let o = calculate_goals(&profile(30, 165.0, 60.0, Gender::Otro)).unwrap();
        assert_eq!(f, o);
    }

    #[test]
    fn missing_biometrics_yield_none() {
        let mut p = profile(25, 170.0, 70.0, Gender::Masculino);
        p.weight_kg = None;
        assert!(calculate_goals(&p).is_none());

        let mut p = profile(25, 170.0, 70.0, Gender::Masculino);
        p.gender = None;
        assert!(calculate_goals(&p).is_none());
    }

    #[test]
    fn weight_goal_shifts_calories_by_500() {
        let base = profile(25, 170.0, 70.0, Gender::Masculino);

        let mut lose = base.clone();
        lose.goal = WeightGoal::PerderPeso;
        let mut gain = base.clone();
        gain.goal = WeightGoal::GanarPeso;
        let mut muscle = base.clone();
        muscle.goal = WeightGoal::GanarMasaMuscular;

        let maintain = calculate_goals(&base).unwrap();
        assert_eq!(calculate_goals(&lose).unwrap().calories, maintain.calories - 500);
        assert_eq!(calculate_goals(&gain).unwrap().calories, maintain.calories + 500);
        assert_eq!(
            calculate_goals(&muscle).unwrap().calories,
            maintain.calories + 500
        );
    }

    #[test]
    fn activity_multipliers_scale_maintenance() {
        let mut sedentary = profile(40, 180.0, 80.0, Gender::Masculino);
        sedentary.activity_level = ActivityLevel::Sedentario;
        let mut very_active = sedentary.clone();
        very_active.activity_level = ActivityLevel::MuyActivo;

        // bmr = 10*80 + 6.25*180 - 5*40 + 5 = 1730
        assert_eq!(calculate_goals(&sedentary).unwrap().calories, 2076);
        assert_eq!(calculate_goals(&very_active).unwrap().calories, 3287);
    }
}
