// ABOUTME: Integration tests for the in-memory recipe catalog
// ABOUTME: Covers JSON loading from strings and files, validation and collaborator updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;

use common::{fixture_catalog, fixture_recipes, LENTIL_SOUP};
use pierre_meal_planner::{
    catalog::{InMemoryRecipeCatalog, RecipeCatalog},
    errors::ErrorCode,
    models::{MealSlot, Recipe, RecipeId},
};
use tempfile::TempDir;

const CATALOG_JSON: &str = r#"{
  "recipes": [
    {
      "id": 10,
      "name": "Greek Omelette",
      "category": ["breakfast", "lunch"],
      "portion_grams": 220,
      "nutrition_per_100g": { "calories": 154, "protein": 11, "carbohydrates": 2, "fat": 11, "fiber": 0.6 },
      "ingredients": [
        { "quantity": 3, "unit": "pc", "name": "egg" },
        { "quantity": 40, "unit": "g", "name": "feta" }
      ],
      "instructions": ["Whisk eggs", "Fold in feta and cook"]
    }
  ]
}"#;

#[test]
fn test_catalog_document_with_recipes_key() {
    let catalog = InMemoryRecipeCatalog::from_json_str(CATALOG_JSON).unwrap();
    let omelette = catalog.get_by_id(RecipeId(10)).unwrap();
    assert_eq!(omelette.name, "Greek Omelette");
    assert!(omelette.has_category(MealSlot::Lunch));
    assert_eq!(omelette.ingredients.len(), 2);
    assert_eq!(omelette.instructions[1], "Fold in feta and cook");
}

#[test]
fn test_catalog_from_file_round_trips_through_serde() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(&path, serde_json::to_string(&fixture_recipes()).unwrap()).unwrap();

    let catalog = InMemoryRecipeCatalog::from_json_file(&path).unwrap();
    assert_eq!(catalog.len(), fixture_recipes().len());
    assert_eq!(
        catalog.get_by_id(LENTIL_SOUP),
        fixture_recipes().into_iter().find(|r| r.id == LENTIL_SOUP)
    );
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(InMemoryRecipeCatalog::from_json_file(&dir.path().join("absent.json")).is_err());
}

#[test]
fn test_object_without_recipes_key_is_invalid_format() {
    let error = InMemoryRecipeCatalog::from_json_str(r#"{ "items": [] }"#).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_recipe_without_category_is_rejected() {
    let json = r#"[{ "id": 1, "name": "Mystery", "category": [], "portion_grams": 100,
                     "nutrition_per_100g": { "calories": 100, "protein": 0, "carbohydrates": 0, "fat": 0, "fiber": 0 } }]"#;
    let error = InMemoryRecipeCatalog::from_json_str(json).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_get_by_category_returns_snapshot() {
    let mut catalog = fixture_catalog();
    let dinners = catalog.get_by_category(MealSlot::Dinner);
    assert_eq!(dinners.len(), 2);

    catalog.remove(LENTIL_SOUP);
    // Earlier snapshot is unaffected; a new call sees the removal
    assert_eq!(dinners.len(), 2);
    assert_eq!(catalog.get_by_category(MealSlot::Dinner).len(), 1);
}

#[test]
fn test_update_replaces_recipe() {
    let mut catalog = fixture_catalog();
    let renamed = Recipe {
        name: "Red Lentil Soup".into(),
        ..catalog.get_by_id(LENTIL_SOUP).unwrap()
    };
    let previous = catalog.update(renamed).unwrap();
    assert_eq!(previous.name, "Lentil Soup");
    assert_eq!(catalog.get_by_id(LENTIL_SOUP).unwrap().name, "Red Lentil Soup");
}

#[test]
fn test_insert_duplicate_is_rejected() {
    let mut catalog = fixture_catalog();
    let duplicate = Recipe::new(LENTIL_SOUP, "Another soup", 300.0).with_category(MealSlot::Lunch);
    assert_eq!(
        catalog.insert(duplicate).unwrap_err().code,
        ErrorCode::ResourceAlreadyExists
    );
}
