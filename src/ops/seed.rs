use bson::{doc, Document};
use mongodb::Database;
use tracing::info;

use crate::error::OpsError;

#[derive(Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection already had documents; nothing was written.
    Skipped { existing: u64 },
    Seeded { written: usize },
}

/// Write fixture documents at fixed ids. Idempotence comes from only seeding
/// empty collections: if even one document exists the whole collection is
/// skipped, so re-running the seed script never clobbers live data.
pub async fn seed(
    db: &Database,
    collection: &str,
    documents: &[(String, Document)],
) -> Result<SeedOutcome, OpsError> {
    let coll = db.collection::<Document>(collection);

    let existing = coll.count_documents(doc! {}).await?;
    if existing > 0 {
        info!(collection, existing, "already populated, skipping");
        return Ok(SeedOutcome::Skipped { existing });
    }

    for (id, data) in documents {
        coll.replace_one(doc! { "_id": id.as_str() }, data.clone())
            .upsert(true)
            .await?;
    }

    info!(collection, written = documents.len(), "seeded");
    Ok(SeedOutcome::Seeded {
        written: documents.len(),
    })
}
