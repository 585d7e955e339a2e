//! Integration tests against a live store. Run with:
//!   MONGODB_URI=mongodb://localhost:27017 cargo test -- --ignored

use bson::{doc, Document};
use mongodb::Database;

use hrops::config;
use hrops::ops::backup::backup;
use hrops::ops::drain::delete_all;
use hrops::ops::seed::{seed, SeedOutcome};
use hrops::ops::snapshot;

async fn setup_db() -> Database {
    dotenvy::dotenv().ok();
    config::database::connect().await.unwrap()
}

// Unique collection per test so runs do not collide.
fn test_collection(prefix: &str) -> String {
    format!("{prefix}_{}", bson::oid::ObjectId::new().to_hex())
}

async fn insert_docs(db: &Database, collection: &str, count: usize) {
    let docs: Vec<Document> = (0..count).map(|i| doc! { "n": i as i32 }).collect();
    db.collection::<Document>(collection)
        .insert_many(docs)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires a running MongoDB (set MONGODB_URI)"]
async fn drain_empties_collection_with_small_pages() {
    let db = setup_db().await;
    let name = test_collection("drain");
    insert_docs(&db, &name, 7).await;

    let deleted = delete_all(&db, &name, 3).await.unwrap();

    assert_eq!(deleted, 7);
    let remaining = snapshot::read(&db, &name).await.unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
#[ignore = "requires a running MongoDB (set MONGODB_URI)"]
async fn drain_of_missing_collection_deletes_nothing() {
    let db = setup_db().await;
    let name = test_collection("drain_empty");

    let deleted = delete_all(&db, &name, 100).await.unwrap();

    assert_eq!(deleted, 0);
}

#[tokio::test]
#[ignore = "requires a running MongoDB (set MONGODB_URI)"]
async fn seed_skips_populated_collection() {
    let db = setup_db().await;
    let name = test_collection("seed");
    insert_docs(&db, &name, 1).await;

    let fixtures = vec![
        ("one".to_string(), doc! { "v": 1 }),
        ("two".to_string(), doc! { "v": 2 }),
    ];
    let outcome = seed(&db, &name, &fixtures).await.unwrap();

    assert_eq!(outcome, SeedOutcome::Skipped { existing: 1 });
    assert_eq!(snapshot::read(&db, &name).await.unwrap().len(), 1);

    delete_all(&db, &name, 100).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running MongoDB (set MONGODB_URI)"]
async fn seed_writes_fixtures_into_empty_collection() {
    let db = setup_db().await;
    let name = test_collection("seed_fresh");

    let fixtures = vec![
        ("one".to_string(), doc! { "v": 1 }),
        ("two".to_string(), doc! { "v": 2 }),
    ];
    let outcome = seed(&db, &name, &fixtures).await.unwrap();

    assert_eq!(outcome, SeedOutcome::Seeded { written: 2 });
    let records = snapshot::read(&db, &name).await.unwrap();
    assert_eq!(records.len(), 2);

    delete_all(&db, &name, 100).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running MongoDB (set MONGODB_URI)"]
async fn backup_records_missing_collection_as_zero() {
    let db = setup_db().await;
    let present = test_collection("backup_a");
    let missing = test_collection("backup_b");
    insert_docs(&db, &present, 3).await;

    let dir = tempfile::tempdir().unwrap();
    let manifest = backup(&db, &[present.as_str(), missing.as_str()], dir.path())
        .await
        .unwrap();

    assert_eq!(manifest.collections[&present], 3);
    assert_eq!(manifest.collections[&missing], 0);
    assert_eq!(manifest.total_documents, 3);
    assert!(dir.path().join(format!("{present}.json")).exists());
    assert!(!dir.path().join(format!("{missing}.json")).exists());
    assert!(dir.path().join("manifest.json").exists());

    delete_all(&db, &present, 100).await.unwrap();
}
