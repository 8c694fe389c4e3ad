// ABOUTME: Integration tests for Mifflin-St Jeor goal derivation
// ABOUTME: Worked examples across genders, activity levels, and weight goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sazon Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use sazon::goal_calculator::calculate_goals;
use sazon::models::{ActivityLevel, Gender, UserProfile, WeightGoal};

fn complete_profile() -> UserProfile {
    UserProfile {
        age: Some(25),
        height_cm: Some(170.0),
        weight_kg: Some(70.0),
        gender: Some(Gender::Masculino),
        activity_level: ActivityLevel::Moderado,
        goal: WeightGoal::MantenerPeso,
        ..UserProfile::empty("test_user")
    }
}

#[test]
fn test_worked_example() {
    // bmr = 10*70 + 6.25*170 - 5*25 + 5 = 1642.5
    // maintenance = 1642.5 * 1.55 = 2545.875, rounds to 2546
    let targets = calculate_goals(&complete_profile()).unwrap();
    assert_eq!(targets.calories, 2546);
    assert_eq!(targets.protein, 159); // 2546 * 0.25 / 4
    assert_eq!(targets.carbs, 286); // 2546 * 0.45 / 4
    assert_eq!(targets.fat, 85); // 2546 * 0.30 / 9
    assert_eq!(targets.fiber, 25);
    assert_eq!(targets.sodium, 2300);
}

#[test]
fn test_incomplete_profile_returns_none() {
    let mut profile = complete_profile();
    profile.age = None;
    assert!(calculate_goals(&profile).is_none());

    let mut profile = complete_profile();
    profile.height_cm = None;
    assert!(calculate_goals(&profile).is_none());

    let mut profile = complete_profile();
    profile.weight_kg = None;
    assert!(calculate_goals(&profile).is_none());

    let mut profile = complete_profile();
    profile.gender = None;
    assert!(calculate_goals(&profile).is_none());
}

#[test]
fn test_female_offset_lowers_bmr() {
    let male = calculate_goals(&complete_profile()).unwrap();

    let mut profile = complete_profile();
    profile.gender = Some(Gender::Femenino);
    let female = calculate_goals(&profile).unwrap();

    // Offset difference of 166 kcal at the BMR level, scaled by 1.55
    assert!(female.calories < male.calories);
    assert_eq!(male.calories - female.calories, 257); // round(166 * 1.55)
}

#[test]
fn test_otro_uses_female_offset() {
    let mut femenino = complete_profile();
    femenino.gender = Some(Gender::Femenino);
    let mut otro = complete_profile();
    otro.gender = Some(Gender::Otro);

    assert_eq!(
        calculate_goals(&femenino).unwrap(),
        calculate_goals(&otro).unwrap()
    );
}

#[test]
fn test_goal_adjustments() {
    let maintain = calculate_goals(&complete_profile()).unwrap();

    let mut profile = complete_profile();
    profile.goal = WeightGoal::PerderPeso;
    assert_eq!(
        calculate_goals(&profile).unwrap().calories,
        maintain.calories - 500
    );

    profile.goal = WeightGoal::GanarPeso;
    assert_eq!(
        calculate_goals(&profile).unwrap().calories,
        maintain.calories + 500
    );

    profile.goal = WeightGoal::GanarMasaMuscular;
    assert_eq!(
        calculate_goals(&profile).unwrap().calories,
        maintain.calories + 500
    );
}

#[test]
fn test_activity_level_ordering() {
    let levels = [
        ActivityLevel::Sedentario,
        ActivityLevel::Ligero,
        ActivityLevel::Moderado,
        ActivityLevel::Activo,
        ActivityLevel::MuyActivo,
    ];

    let calories: Vec<u32> = levels
        .iter()
        .map(|&level| {
            let mut profile = complete_profile();
            profile.activity_level = level;
            calculate_goals(&profile).unwrap().calories
        })
        .collect();

    for pair in calories.windows(2) {
        assert!(pair[0] < pair[1], "calories must rise with activity level");
    }
}
