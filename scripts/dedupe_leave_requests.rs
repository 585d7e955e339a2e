//! Run with: cargo run --bin dedupe_leave_requests
//!
//! Removes duplicate leave requests. Two requests are duplicates when
//! employee, type, start date and end date match exactly. The snapshot is
//! sorted by submittedAt descending before partitioning, so the most recent
//! submission of each duplicate group survives.

use bson::{doc, Bson, Document};
use mongodb::Database;

use hrops::config;
use hrops::modules::leave::model::LeaveRequest;
use hrops::ops::snapshot::DocumentRecord;
use hrops::ops::{confirm, dedup, snapshot};
use hrops::OpsError;

const COLLECTION: &str = "leave_requests";
const DELETE_BATCH_SIZE: usize = 100;

struct DedupeSummary {
    kept: usize,
    deleted: u64,
    quarantined: usize,
}

async fn run(db: &Database) -> Result<DedupeSummary, OpsError> {
    let records = snapshot::read_sorted(db, COLLECTION, doc! { "submittedAt": -1 }).await?;
    println!("Fetched {} leave requests", records.len());

    // Decode through the typed boundary. Documents that do not fit the
    // expected shape are left in place rather than trusted or deleted.
    let mut decoded: Vec<(DocumentRecord, LeaveRequest)> = Vec::new();
    let mut quarantined = 0;
    for record in records {
        match LeaveRequest::from_record(&record) {
            Ok(request) => decoded.push((record, request)),
            Err(err) => {
                tracing::warn!(id = %record.id, %err, "malformed leave request, quarantined");
                quarantined += 1;
            }
        }
    }

    let partition = dedup::partition(decoded, |(_, request)| request.dedup_key());
    println!(
        "{} unique, {} duplicates, {} quarantined",
        partition.kept.len(),
        partition.duplicates.len(),
        quarantined
    );

    let coll = db.collection::<Document>(COLLECTION);
    let mut deleted: u64 = 0;
    let ids: Vec<Bson> = partition
        .duplicates
        .iter()
        .map(|(record, _)| record.id.clone())
        .collect();
    for chunk in ids.chunks(DELETE_BATCH_SIZE) {
        let result = coll
            .delete_many(doc! { "_id": { "$in": chunk.to_vec() } })
            .await?;
        deleted += result.deleted_count;
    }

    Ok(DedupeSummary {
        kept: partition.kept.len(),
        deleted,
        quarantined,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    config::init_tracing();

    println!("This will DELETE duplicate leave requests. Back up first (cargo run --bin backup).");
    match confirm::confirm("DEDUPE") {
        Ok(()) => {}
        Err(OpsError::ConfirmationDeclined) => {
            println!("Aborted.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    println!("Connecting to MongoDB...");
    let db = config::database::connect().await?;

    let summary = run(&db).await?;

    println!(
        "\n✓ Dedupe complete: {} kept, {} deleted, {} quarantined",
        summary.kept, summary.deleted, summary.quarantined
    );
    Ok(())
}
