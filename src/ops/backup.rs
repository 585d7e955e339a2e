use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use mongodb::Database;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{is_permission_denied, OpsError};
use crate::ops::snapshot;

/// Summary of one backup run: per-collection document counts plus the total.
/// Written once as `manifest.json` after every collection has been processed.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub timestamp: String,
    pub collections: BTreeMap<String, u64>,
    pub total_documents: u64,
}

impl Manifest {
    pub fn new(timestamp: String) -> Self {
        Self {
            timestamp,
            collections: BTreeMap::new(),
            total_documents: 0,
        }
    }

    pub fn record(&mut self, collection: &str, count: u64) {
        self.collections.insert(collection.to_string(), count);
        // Recomputed from the map so recording a name twice keeps the total
        // equal to the sum of per-collection counts.
        self.total_documents = self.collections.values().sum();
    }
}

/// Back up each named collection to `<dest_dir>/<name>.json`, sequentially.
/// A collection that fails to read is logged and recorded as zero so one bad
/// collection cannot block the rest of the run. Empty (or missing)
/// collections appear in the manifest but get no file.
pub async fn backup(
    db: &Database,
    collections: &[&str],
    dest_dir: &Path,
) -> Result<Manifest, OpsError> {
    fs::create_dir_all(dest_dir)?;

    let mut manifest = Manifest::new(chrono::Utc::now().to_rfc3339());

    for &name in collections {
        match snapshot::read(db, name).await {
            Ok(records) => {
                let count = records.len() as u64;
                if !records.is_empty() {
                    let path = dest_dir.join(format!("{name}.json"));
                    fs::write(&path, serde_json::to_vec_pretty(&records)?)?;
                }
                info!(collection = name, count, "backed up");
                manifest.record(name, count);
            }
            Err(OpsError::Store(err)) if is_permission_denied(&err) => {
                warn!(collection = name, %err, "permission denied, skipping");
                manifest.record(name, 0);
            }
            Err(err) => {
                warn!(collection = name, %err, "backup failed, skipping");
                manifest.record(name, 0);
            }
        }
    }

    let manifest_path = dest_dir.join("manifest.json");
    fs::write(&manifest_path, serde_json::to_vec_pretty(&manifest)?)?;

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_collection_counts() {
        let mut m = Manifest::new("2026-08-26T00:00:00Z".into());
        m.record("employees", 12);
        m.record("leave_requests", 7);
        m.record("settings", 0);
        assert_eq!(m.total_documents, 19);
        assert_eq!(m.collections["settings"], 0);
        assert_eq!(m.collections.len(), 3);
    }

    #[test]
    fn re_recording_a_collection_does_not_double_count() {
        let mut m = Manifest::new("2026-08-26T00:00:00Z".into());
        m.record("employees", 12);
        m.record("employees", 5);
        assert_eq!(m.collections.len(), 1);
        assert_eq!(m.collections["employees"], 5);
        assert_eq!(m.total_documents, 5);
    }

    #[test]
    fn empty_run_totals_zero() {
        let m = Manifest::new("2026-08-26T00:00:00Z".into());
        assert_eq!(m.total_documents, 0);
        assert!(m.collections.is_empty());
    }
}
