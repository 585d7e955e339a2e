//! Run with: cargo run --bin consolidate
//!
//! Folds the seventeen legacy collections into the eight canonical ones.
//! Each legacy collection is copied into its target, then drained; a pair
//! that fails is left for a re-run and does not stop the others.

use hrops::config;
use hrops::ops::confirm;
use hrops::ops::consolidate::consolidate_all;
use hrops::OpsError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    config::init_tracing();

    println!("This will MOVE legacy collections into the canonical ones and delete the originals.");
    println!("Back up first (cargo run --bin backup).");
    match confirm::confirm("CONSOLIDATE") {
        Ok(()) => {}
        Err(OpsError::ConfirmationDeclined) => {
            println!("Aborted.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    println!("Connecting to MongoDB...");
    let db = config::database::connect().await?;

    let summary = consolidate_all(&db).await;

    println!();
    for pair in &summary.pairs {
        match &pair.error {
            None => println!(
                "✓ {} -> {}: {} copied, {} drained",
                pair.legacy, pair.target, pair.copied, pair.drained
            ),
            Some(err) => println!("✗ {} -> {}: {}", pair.legacy, pair.target, err),
        }
    }
    println!(
        "\n✓ Consolidation complete: {} documents moved, {} pairs failed",
        summary.total_copied(),
        summary.failures()
    );

    if summary.failures() > 0 {
        anyhow::bail!("{} consolidation pairs failed, re-run after fixing", summary.failures());
    }
    Ok(())
}
