//! Run with: cargo run --bin backup
//!
//! Writes one JSON file per non-empty collection plus a manifest to
//! backups/YYYY-MM-DD/. Run this before any of the destructive scripts.

use std::path::PathBuf;

use hrops::config;
use hrops::ops::backup::backup;
use hrops::ops::consolidate::CONSOLIDATION_MAP;
use hrops::ops::CANONICAL_COLLECTIONS;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    config::init_tracing();

    println!("Connecting to MongoDB...");
    let db = config::database::connect().await?;

    // Canonical collections first, then whatever is left in the legacy ones.
    let mut collections: Vec<&str> = CANONICAL_COLLECTIONS.to_vec();
    collections.extend(CONSOLIDATION_MAP.iter().map(|(legacy, _)| *legacy));

    let dest =
        PathBuf::from("backups").join(chrono::Utc::now().format("%Y-%m-%d").to_string());

    println!("Backing up {} collections to {}...", collections.len(), dest.display());
    let manifest = backup(&db, &collections, &dest).await?;

    for (name, count) in &manifest.collections {
        println!("  {name}: {count}");
    }
    println!("\n✓ Backup complete: {} documents total", manifest.total_documents);
    Ok(())
}
