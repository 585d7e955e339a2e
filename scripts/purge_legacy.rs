//! Run with: cargo run --bin purge_legacy
//!
//! Drains every legacy collection outright. Use after consolidation has been
//! verified, or to throw away legacy data that was migrated by hand.

use mongodb::Database;

use hrops::config;
use hrops::ops::consolidate::CONSOLIDATION_MAP;
use hrops::ops::{confirm, drain};
use hrops::OpsError;

const PAGE_SIZE: i64 = 100;

async fn run(db: &Database) -> Result<u64, OpsError> {
    let mut total: u64 = 0;

    for (legacy, _) in CONSOLIDATION_MAP {
        match drain::delete_all(db, legacy, PAGE_SIZE).await {
            Ok(deleted) => {
                if deleted > 0 {
                    println!("✓ {legacy}: {deleted} deleted");
                }
                total += deleted;
            }
            Err(aborted) => {
                // Partial progress stays deleted; the next run resumes.
                println!("✗ {aborted}");
                total += aborted.deleted;
            }
        }
    }

    Ok(total)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    config::init_tracing();

    println!("This will PERMANENTLY DELETE all legacy collections. Back up first.");
    match confirm::confirm("DELETE") {
        Ok(()) => {}
        Err(OpsError::ConfirmationDeclined) => {
            println!("Aborted.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    println!("Connecting to MongoDB...");
    let db = config::database::connect().await?;

    let total = run(&db).await?;

    println!("\n✓ Purge complete: {total} documents deleted");
    Ok(())
}
