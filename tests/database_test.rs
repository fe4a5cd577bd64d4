// ABOUTME: Integration tests for the SQLite record stores
// ABOUTME: Covers on-disk persistence, ordering guarantees, and payload round-trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use okawari_server::database::Database;
use okawari_server::models::{CanonicalRecipe, ExpiryType, Ingredient};

fn sample_ingredient(name: &str) -> Ingredient {
    Ingredient {
        id: None,
        name: name.to_owned(),
        quantity: Some("適量".to_owned()),
        date: Some("2999-01-01".to_owned()),
        expiry_type: Some(ExpiryType::BestBefore),
    }
}

#[tokio::test]
async fn test_ingredient_store_round_trip() {
    common::init_test_logging();
    let database = Database::new("sqlite::memory:").await.unwrap();

    let stored = database
        .create_ingredient(&sample_ingredient("にんじん"))
        .await
        .unwrap();
    assert!(stored.id.is_some());

    let listed = database.list_ingredients().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "にんじん");
    assert_eq!(listed[0].expiry_type, Some(ExpiryType::BestBefore));
}

#[tokio::test]
async fn test_database_persists_across_reopen() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}/okawari_test.db", dir.path().display());

    {
        let database = Database::new(&url).await.unwrap();
        database
            .create_ingredient(&sample_ingredient("じゃがいも"))
            .await
            .unwrap();
    }

    let reopened = Database::new(&url).await.unwrap();
    let listed = reopened.list_ingredients().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "じゃがいも");
}

#[tokio::test]
async fn test_latest_condition_prefers_newest_entry() {
    common::init_test_logging();
    let database = Database::new("sqlite::memory:").await.unwrap();

    assert!(database.latest_condition().await.unwrap().is_none());

    database.create_condition("少し疲れている").await.unwrap();
    database.create_condition("元気").await.unwrap();

    let latest = database.latest_condition().await.unwrap().unwrap();
    assert_eq!(latest.status, "元気");

    let listed = database.list_conditions().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].status, "元気");
}

#[tokio::test]
async fn test_saved_recipe_payload_round_trip() {
    common::init_test_logging();
    let database = Database::new("sqlite::memory:").await.unwrap();

    let recipe = CanonicalRecipe {
        recipe_id: "42".to_owned(),
        title: "肉じゃが".to_owned(),
        ingredients: vec!["じゃがいも 3個".to_owned(), "牛肉 200g".to_owned()],
        ..CanonicalRecipe::default()
    };

    let id = database.save_recipe(&recipe).await.unwrap();
    assert!(id > 0);

    let listed = database.list_saved_recipes().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "肉じゃが");
    assert_eq!(listed[0].ingredients.len(), 2);
}
