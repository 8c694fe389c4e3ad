// ABOUTME: Demo data seeder for local development and testing
// ABOUTME: Populates storage with Spanish home-cooking recipes and a sample goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sazon Project

//! Demo data seeder.
//!
//! Usage:
//! ```bash
//! # Seed the default SQLite database
//! cargo run --bin seed-demo-data
//!
//! # Seed a specific database
//! cargo run --bin seed-demo-data -- --database-url sqlite:./data/dev.db
//!
//! # Wipe existing data before seeding
//! cargo run --bin seed-demo-data -- --reset
//!
//! # Also create a demo nutritional goal for the default user
//! cargo run --bin seed-demo-data -- --with-goal
//! ```

use anyhow::Result;
use clap::Parser;
use sazon::config::AppConfig;
use sazon::logging;
use sazon::models::{
    Difficulty, NewNutritionalGoal, NewRecipe, NutritionInfo, RecipeIngredient, RecipeStep,
};
use sazon::storage::{Storage, StorageProvider};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Sazon demo data seeder",
    long_about = "Populate storage with demo recipes and a sample nutritional goal"
)]
struct SeedArgs {
    /// Database URL override (defaults to DATABASE_URL or the local SQLite file)
    #[arg(long)]
    database_url: Option<String>,

    /// Wipe existing data before seeding
    #[arg(long)]
    reset: bool,

    /// Also create a demo nutritional goal for the default user
    #[arg(long)]
    with_goal: bool,
}

async fn reset_storage(storage: &Storage) -> Result<()> {
    match storage {
        Storage::Memory(s) => s.clear(),
        Storage::Sqlite(s) => {
            for table in [
                "recipes",
                "search_requests",
                "nutritional_goals",
                "meal_entries",
                "user_profiles",
                "favorite_recipes",
            ] {
                sqlx::query(&format!("DELETE FROM {table}"))
                    .execute(s.pool())
                    .await?;
            }
        }
    }
    Ok(())
}

fn ingredient(name: &str, amount: &str, unit: &str) -> RecipeIngredient {
    RecipeIngredient {
        name: name.into(),
        amount: amount.into(),
        unit: unit.into(),
    }
}

fn step(step_number: u32, instruction: &str, time_minutes: u32) -> RecipeStep {
    RecipeStep {
        step_number,
        instruction: instruction.into(),
        time_minutes,
    }
}

#[allow(clippy::too_many_lines)]
fn demo_recipes() -> Vec<NewRecipe> {
    vec![
        NewRecipe {
            name: "Arroz con Pollo".into(),
            description: "Clásico arroz con pollo al estilo casero, jugoso y lleno de sabor"
                .into(),
            ingredients: vec![
                ingredient("pollo", "500", "g"),
                ingredient("arroz", "2", "tazas"),
                ingredient("cebolla", "1", "unidad"),
                ingredient("ajo", "3", "dientes"),
                ingredient("caldo de pollo", "4", "tazas"),
            ],
            base_ingredients: vec![
                "pollo".into(),
                "arroz".into(),
                "cebolla".into(),
                "ajo".into(),
            ],
            steps: vec![
                step(1, "Dorar el pollo en una olla con aceite caliente", 10),
                step(2, "Sofreír la cebolla y el ajo picados", 5),
                step(3, "Agregar el arroz y el caldo, cocinar a fuego bajo", 25),
            ],
            nutrition: NutritionInfo {
                calories: 520.0,
                protein: 32.0,
                carbs: 58.0,
                fat: 16.0,
                fiber: 2.5,
                sodium: 640.0,
            },
            estimated_cost: 8.50,
            prep_time_mins: 15,
            cook_time_mins: 40,
            difficulty: Difficulty::Facil,
            health_score: 72,
            servings: 4,
            image_url: None,
            tags: vec!["almuerzo".into(), "tradicional".into()],
        },
        NewRecipe {
            name: "Tortilla de Papa".into(),
            description: "Tortilla española de papa y cebolla, dorada por fuera y tierna por dentro".into(),
            ingredients: vec![
                ingredient("papa", "4", "unidades"),
                ingredient("huevo", "6", "unidades"),
                ingredient("cebolla", "1", "unidad"),
                ingredient("aceite de oliva", "1/2", "taza"),
            ],
            base_ingredients: vec![
                "papa".into(),
                "huevo".into(),
                "cebolla".into(),
                "aceite de oliva".into(),
            ],
            steps: vec![
                step(1, "Pelar y cortar las papas en láminas finas", 10),
                step(2, "Freír las papas con la cebolla a fuego medio", 15),
                step(3, "Mezclar con los huevos batidos y cuajar la tortilla", 10),
            ],
            nutrition: NutritionInfo {
                calories: 410.0,
                protein: 14.0,
                carbs: 32.0,
                fat: 25.0,
                fiber: 3.0,
                sodium: 380.0,
            },
            estimated_cost: 5.00,
            prep_time_mins: 15,
            cook_time_mins: 25,
            difficulty: Difficulty::Intermedio,
            health_score: 61,
            servings: 4,
            image_url: None,
            tags: vec!["cena".into(), "vegetariano".into()],
        },
        NewRecipe {
            name: "Lentejas Guisadas".into(),
            description: "Guiso de lentejas con verduras, reconfortante y muy nutritivo".into(),
            ingredients: vec![
                ingredient("lentejas", "300", "g"),
                ingredient("zanahoria", "2", "unidades"),
                ingredient("cebolla", "1", "unidad"),
                ingredient("ajo", "2", "dientes"),
                ingredient("pimentón", "1", "cucharadita"),
            ],
            base_ingredients: vec![
                "lentejas".into(),
                "zanahoria".into(),
                "cebolla".into(),
                "ajo".into(),
            ],
            steps: vec![
                step(1, "Sofreír la cebolla, el ajo y la zanahoria", 8),
                step(2, "Añadir las lentejas, el pimentón y agua", 2),
                step(3, "Cocinar a fuego lento hasta que estén tiernas", 35),
            ],
            nutrition: NutritionInfo {
                calories: 340.0,
                protein: 19.0,
                carbs: 52.0,
                fat: 5.0,
                fiber: 12.0,
                sodium: 420.0,
            },
            estimated_cost: 4.20,
            prep_time_mins: 10,
            cook_time_mins: 45,
            difficulty: Difficulty::MuyFacil,
            health_score: 88,
            servings: 4,
            image_url: None,
            tags: vec!["almuerzo".into(), "vegetariano".into(), "alto en fibra".into()],
        },
        NewRecipe {
            name: "Pollo al Horno con Verduras".into(),
            description: "Muslos de pollo asados con papa, zanahoria y romero".into(),
            ingredients: vec![
                ingredient("pollo", "800", "g"),
                ingredient("papa", "3", "unidades"),
                ingredient("zanahoria", "2", "unidades"),
                ingredient("romero", "2", "ramas"),
            ],
            base_ingredients: vec![
                "pollo".into(),
                "papa".into(),
                "zanahoria".into(),
                "romero".into(),
            ],
            steps: vec![
                step(1, "Precalentar el horno a 200 grados", 10),
                step(2, "Acomodar el pollo y las verduras en una bandeja", 10),
                step(3, "Hornear hasta dorar, volteando a mitad de cocción", 50),
            ],
            nutrition: NutritionInfo {
                calories: 480.0,
                protein: 38.0,
                carbs: 30.0,
                fat: 22.0,
                fiber: 4.5,
                sodium: 520.0,
            },
            estimated_cost: 11.00,
            prep_time_mins: 20,
            cook_time_mins: 60,
            difficulty: Difficulty::Intermedio,
            health_score: 78,
            servings: 4,
            image_url: None,
            tags: vec!["cena".into(), "horno".into()],
        },
        NewRecipe {
            name: "Ensalada de Quinoa".into(),
            description: "Ensalada fresca de quinoa con tomate, pepino y limón".into(),
            ingredients: vec![
                ingredient("quinoa", "1", "taza"),
                ingredient("tomate", "2", "unidades"),
                ingredient("pepino", "1", "unidad"),
                ingredient("limón", "1", "unidad"),
            ],
            base_ingredients: vec![
                "quinoa".into(),
                "tomate".into(),
                "pepino".into(),
                "limón".into(),
            ],
            steps: vec![
                step(1, "Cocinar la quinoa y dejar enfriar", 20),
                step(2, "Picar el tomate y el pepino en cubos", 8),
                step(3, "Mezclar todo y aliñar con jugo de limón", 2),
            ],
            nutrition: NutritionInfo {
                calories: 260.0,
                protein: 9.0,
                carbs: 42.0,
                fat: 6.0,
                fiber: 5.5,
                sodium: 180.0,
            },
            estimated_cost: 6.50,
            prep_time_mins: 15,
            cook_time_mins: 20,
            difficulty: Difficulty::MuyFacil,
            health_score: 93,
            servings: 2,
            image_url: None,
            tags: vec!["almuerzo".into(), "vegetariano".into(), "fresco".into()],
        },
        NewRecipe {
            name: "Paella de Mariscos".into(),
            description: "Paella con camarones, calamares y mejillones al azafrán".into(),
            ingredients: vec![
                ingredient("arroz", "2", "tazas"),
                ingredient("camarones", "300", "g"),
                ingredient("calamares", "200", "g"),
                ingredient("azafrán", "1", "pizca"),
                ingredient("mejillones", "250", "g"),
            ],
            base_ingredients: vec![
                "arroz".into(),
                "camarones".into(),
                "calamares".into(),
                "azafrán".into(),
            ],
            steps: vec![
                step(1, "Preparar un sofrito y marcar los mariscos", 15),
                step(2, "Añadir el arroz y el caldo con azafrán", 5),
                step(3, "Cocinar sin remover hasta formar el socarrat", 25),
            ],
            nutrition: NutritionInfo {
                calories: 560.0,
                protein: 34.0,
                carbs: 62.0,
                fat: 18.0,
                fiber: 2.0,
                sodium: 890.0,
            },
            estimated_cost: 18.00,
            prep_time_mins: 25,
            cook_time_mins: 45,
            difficulty: Difficulty::Avanzado,
            health_score: 70,
            servings: 4,
            image_url: None,
            tags: vec!["almuerzo".into(), "mariscos".into(), "especial".into()],
        },
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env()?;

    let args = SeedArgs::parse();
    let config = AppConfig::from_env();
    let database_url = args.database_url.unwrap_or(config.database_url);

    let storage = Storage::from_url(&database_url).await?;
    info!("Seeding demo data into {}", storage.backend_info());

    if args.reset {
        reset_storage(&storage).await?;
        info!("Cleared existing data");
    }

    let recipes = demo_recipes();
    let total = recipes.len();
    for recipe in recipes {
        let created = storage.create_recipe(recipe).await?;
        info!("Created recipe {} ({})", created.id, created.name);
    }
    info!("Seeded {total} recipes");

    if args.with_goal {
        let goal = NewNutritionalGoal {
            user_id: config.default_user_id.clone(),
            daily_calories: 2200,
            daily_protein: 140,
            daily_carbs: 260,
            daily_fat: 70,
            daily_fiber: 30,
            daily_sodium: 2300,
        };
        goal.validate()?;
        let created = storage.create_nutritional_goal(goal).await?;
        info!(
            "Created demo goal {} for user {}",
            created.id, config.default_user_id
        );
    }

    Ok(())
}
