use bson::doc;
use bson::Document;
use mongodb::Database;
use tracing::{info, warn};

use crate::error::OpsError;
use crate::ops::{drain, snapshot};

/// The collection history of the app: seventeen legacy collections fold into
/// the eight canonical ones. Several legacy collections merge into the same
/// target, which is why copies upsert at the original document id.
pub const CONSOLIDATION_MAP: [(&str, &str); 17] = [
    ("staff", "employees"),
    ("employee_profiles", "employees"),
    ("accounts", "users"),
    ("teams", "departments"),
    ("timesheets", "time_entries"),
    ("work_logs", "time_entries"),
    ("clock_events", "time_entries"),
    ("vacations", "leave_requests"),
    ("sick_leaves", "leave_requests"),
    ("leave", "leave_requests"),
    ("absence_requests", "leave_requests"),
    ("salaries", "payroll_records"),
    ("pay_runs", "payroll_records"),
    ("notices", "announcements"),
    ("news", "announcements"),
    ("app_config", "settings"),
    ("preferences", "settings"),
];

pub const DRAIN_PAGE_SIZE: i64 = 100;

#[derive(Debug)]
pub struct PairResult {
    pub legacy: String,
    pub target: String,
    pub copied: usize,
    pub drained: u64,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct ConsolidationSummary {
    pub pairs: Vec<PairResult>,
}

impl ConsolidationSummary {
    pub fn total_copied(&self) -> usize {
        self.pairs.iter().map(|p| p.copied).sum()
    }

    pub fn failures(&self) -> usize {
        self.pairs.iter().filter(|p| p.error.is_some()).count()
    }
}

/// Run the full consolidation, one legacy collection at a time. A legacy
/// collection is drained only after every one of its documents has been
/// copied into the target; a failed copy leaves it in place for a re-run,
/// with the partial copy count reported. Failures are recorded in the
/// summary and do not stop the remaining pairs.
pub async fn consolidate_all(db: &Database) -> ConsolidationSummary {
    let mut summary = ConsolidationSummary::default();

    for (legacy, target) in CONSOLIDATION_MAP {
        let result = consolidate_pair(db, legacy, target).await;
        if let Some(err) = &result.error {
            warn!(legacy, target, %err, "consolidation pair failed");
        }
        summary.pairs.push(result);
    }

    summary
}

async fn consolidate_pair(db: &Database, legacy: &str, target: &str) -> PairResult {
    let mut result = PairResult {
        legacy: legacy.to_string(),
        target: target.to_string(),
        copied: 0,
        drained: 0,
        error: None,
    };

    let records = match snapshot::read(db, legacy).await {
        Ok(records) => records,
        Err(err) => {
            result.error = Some(err.to_string());
            return result;
        }
    };
    if records.is_empty() {
        return result;
    }

    let target_coll = db.collection::<Document>(target);
    for record in &records {
        let replaced = target_coll
            .replace_one(doc! { "_id": record.id.clone() }, record.data.clone())
            .upsert(true)
            .await;
        if let Err(err) = replaced {
            // Upserts already applied stay counted so the summary shows what
            // actually moved before the failure.
            result.error = Some(OpsError::from(err).to_string());
            return result;
        }
        result.copied += 1;
    }

    match drain::delete_all(db, legacy, DRAIN_PAGE_SIZE).await {
        Ok(drained) => {
            result.drained = drained;
            info!(legacy, target, copied = result.copied, drained, "consolidated");
        }
        Err(aborted) => result.error = Some(aborted.to_string()),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_partial_copies_from_failed_pairs() {
        let summary = ConsolidationSummary {
            pairs: vec![
                PairResult {
                    legacy: "vacations".into(),
                    target: "leave_requests".into(),
                    copied: 4,
                    drained: 4,
                    error: None,
                },
                PairResult {
                    legacy: "sick_leaves".into(),
                    target: "leave_requests".into(),
                    copied: 2,
                    drained: 0,
                    error: Some("document store unavailable".into()),
                },
            ],
        };

        assert_eq!(summary.total_copied(), 6);
        assert_eq!(summary.failures(), 1);
    }
}
