use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::Database;
use thiserror::Error;
use tracing::info;

/// A failed fetch or batched delete aborts the drain loop. The partial count
/// stays visible so the operator can re-run the script to completion.
#[derive(Error, Debug)]
#[error("drain of '{collection}' aborted after {deleted} deletes: {source}")]
pub struct DrainAborted {
    pub collection: String,
    pub deleted: u64,
    #[source]
    pub source: mongodb::error::Error,
}

/// Delete every document in a collection, `page_size` at a time. Each page is
/// removed with a single batched delete before the next page is fetched.
/// Terminates once a fetch comes back empty, which assumes no concurrent
/// writer is refilling the collection during the migration window.
/// A non-positive `page_size` is treated as 1.
pub async fn delete_all(
    db: &Database,
    collection: &str,
    page_size: i64,
) -> Result<u64, DrainAborted> {
    let page_size = page_limit(page_size);
    let coll = db.collection::<Document>(collection);
    let mut total_deleted: u64 = 0;

    loop {
        let ids = match fetch_page_ids(&coll, page_size).await {
            Ok(ids) => ids,
            Err(source) => {
                return Err(DrainAborted {
                    collection: collection.to_string(),
                    deleted: total_deleted,
                    source,
                })
            }
        };

        if ids.is_empty() {
            break;
        }

        match coll.delete_many(doc! { "_id": { "$in": ids } }).await {
            Ok(result) => {
                total_deleted += result.deleted_count;
                info!(collection, total_deleted, "deleted batch");
            }
            Err(source) => {
                return Err(DrainAborted {
                    collection: collection.to_string(),
                    deleted: total_deleted,
                    source,
                })
            }
        }
    }

    Ok(total_deleted)
}

fn page_limit(page_size: i64) -> i64 {
    page_size.max(1)
}

async fn fetch_page_ids(
    coll: &mongodb::Collection<Document>,
    page_size: i64,
) -> Result<Vec<Bson>, mongodb::error::Error> {
    let mut cursor = coll
        .find(doc! {})
        .projection(doc! { "_id": 1 })
        .limit(page_size)
        .await?;

    let mut ids = Vec::new();
    while let Some(doc) = cursor.try_next().await? {
        if let Some(id) = doc.get("_id") {
            ids.push(id.clone());
        }
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonpositive_page_sizes_clamp_to_one() {
        assert_eq!(page_limit(0), 1);
        assert_eq!(page_limit(-5), 1);
        assert_eq!(page_limit(1), 1);
        assert_eq!(page_limit(100), 100);
    }
}
