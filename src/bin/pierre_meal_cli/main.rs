// ABOUTME: Pierre meal planner CLI - compose week plans and derive shopping lists and nutrition
// ABOUTME: Reads catalogs and plans as JSON files and writes JSON results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Compose a week from a candidate grid (raw model output is accepted)
//! pierre-meal-cli compose --catalog recipes.json --grid suggestion.txt --calories 2000
//!
//! # Reject category mismatches instead of keeping them
//! pierre-meal-cli compose --catalog recipes.json --grid grid.json --calories 2000 --policy reject
//!
//! # Manually set one slot of a plan
//! pierre-meal-cli assign --plan plan.json --day monday --slot lunch --recipe 12 --quantity 350
//!
//! # Shopping list for a plan, without zero-quantity lines
//! pierre-meal-cli shopping-list --catalog recipes.json --plan plan.json --skip-empty
//!
//! # Weekly nutrition totals
//! pierre-meal-cli nutrition --catalog recipes.json --plan plan.json
//!
//! # Daily calorie target from body metrics
//! pierre-meal-cli target --weight 70 --height 176 --age 30 --sex male --activity moderate --goal lose
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pierre_meal_planner::{
    config::{CategoryPolicy, PlanningConfig},
    errors::{AppError, AppResult},
    intelligence::{ActivityLevel, ProfileMetrics, Sex, WeightGoal},
    logging::LoggingConfig,
    models::{DayOfWeek, MealSlot, RecipeId},
};
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "pierre-meal-cli",
    about = "Pierre Meal Planner CLI",
    long_about = "Compose seven-day meal plans from candidate grids and derive shopping lists and nutrition totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compose a quantified week plan from a candidate grid
    Compose {
        /// Recipe catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Candidate grid file (JSON or raw model output)
        #[arg(long)]
        grid: PathBuf,

        /// Daily calorie target in kcal
        #[arg(long)]
        calories: f64,

        /// Category mismatch policy (keep or reject); defaults to configuration
        #[arg(long)]
        policy: Option<CategoryPolicy>,

        /// Wrap the plan in a named saved-plan record
        #[arg(long)]
        name: Option<String>,
    },

    /// Manually set one slot of a plan, trusting the given quantity
    Assign {
        /// Plan JSON file (plain plan, saved plan, or compose output)
        #[arg(long)]
        plan: PathBuf,

        /// Day of week
        #[arg(long)]
        day: DayOfWeek,

        /// Meal slot
        #[arg(long)]
        slot: MealSlot,

        /// Recipe id; omit to clear the slot
        #[arg(long)]
        recipe: Option<u64>,

        /// Quantity in grams
        #[arg(long, default_value = "0")]
        quantity: f64,
    },

    /// Build the deduplicated shopping list for a plan
    ShoppingList {
        /// Recipe catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// Drop zero-quantity ingredients
        #[arg(long)]
        skip_empty: bool,
    },

    /// Compute per-day and per-week nutrition totals for a plan
    Nutrition {
        /// Recipe catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,
    },

    /// Compute a daily calorie target from body metrics
    Target {
        /// Body weight in kg
        #[arg(long)]
        weight: f64,

        /// Height in cm
        #[arg(long)]
        height: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// male or female
        #[arg(long)]
        sex: Sex,

        /// sedentary, light, moderate, very or extra
        #[arg(long, default_value = "sedentary")]
        activity: ActivityLevel,

        /// lose, maintain or gain
        #[arg(long, default_value = "maintain")]
        goal: WeightGoal,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let config = PlanningConfig::load()?;
    info!(policy = %config.category_policy, "Pierre meal planner CLI");

    match cli.command {
        Command::Compose {
            catalog,
            grid,
            calories,
            policy,
            name,
        } => {
            commands::compose::run(&config, &catalog, &grid, calories, policy, name).await?;
        }
        Command::Assign {
            plan,
            day,
            slot,
            recipe,
            quantity,
        } => {
            commands::plan::assign(&plan, day, slot, recipe.map(RecipeId), quantity)?;
        }
        Command::ShoppingList {
            catalog,
            plan,
            skip_empty,
        } => {
            commands::plan::shopping_list(&config, &catalog, &plan, skip_empty)?;
        }
        Command::Nutrition { catalog, plan } => {
            commands::plan::nutrition(&catalog, &plan)?;
        }
        Command::Target {
            weight,
            height,
            age,
            sex,
            activity,
            goal,
        } => {
            let profile = ProfileMetrics {
                weight_kg: weight,
                height_cm: height,
                age,
                sex,
                activity_level: activity,
                goal,
            };
            commands::target::run(&config, &profile)?;
        }
    }

    Ok(())
}
