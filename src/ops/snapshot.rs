use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::Database;
use serde::Serialize;

use crate::error::OpsError;

/// One document pulled out of the store: its `_id` plus the remaining body.
/// Transient, run-scoped; the store keeps the authoritative copy.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    pub id: Bson,
    pub data: Document,
}

impl DocumentRecord {
    fn from_document(mut doc: Document) -> Self {
        let id = doc.remove("_id").unwrap_or(Bson::Null);
        Self { id, data: doc }
    }
}

/// Read the full current state of a collection, in the store's natural order.
/// A collection that does not exist reads as empty; the store's contract
/// cannot tell the two apart and neither do we.
pub async fn read(db: &Database, collection: &str) -> Result<Vec<DocumentRecord>, OpsError> {
    read_inner(db, collection, None).await
}

/// Like [`read`], with a caller-supplied sort. Callers that depend on input
/// order (the deduplicator does) must use this; the unsorted read has no
/// ordering guarantee.
pub async fn read_sorted(
    db: &Database,
    collection: &str,
    sort: Document,
) -> Result<Vec<DocumentRecord>, OpsError> {
    read_inner(db, collection, Some(sort)).await
}

async fn read_inner(
    db: &Database,
    collection: &str,
    sort: Option<Document>,
) -> Result<Vec<DocumentRecord>, OpsError> {
    let coll = db.collection::<Document>(collection);

    let mut find = coll.find(doc! {});
    if let Some(sort) = sort {
        find = find.sort(sort);
    }

    let docs: Vec<Document> = find.await?.try_collect().await?;
    Ok(docs.into_iter().map(DocumentRecord::from_document).collect())
}
