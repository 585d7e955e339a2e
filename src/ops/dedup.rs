use std::collections::HashSet;
use std::hash::Hash;

/// Outcome of a deduplication pass. `kept` holds the first record seen for
/// each key, in input order; `duplicates` holds every later record with a key
/// already seen.
#[derive(Debug)]
pub struct Partition<T> {
    pub kept: Vec<T>,
    pub duplicates: Vec<T>,
}

/// First occurrence wins, so the result is order-dependent: callers that care
/// which of two duplicates survives must sort before partitioning. The leave
/// dedupe script sorts by `submittedAt` descending, keeping the most recent
/// submission.
pub fn partition<T, K, F>(records: Vec<T>, key_fn: F) -> Partition<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    let mut duplicates = Vec::new();

    for record in records {
        if seen.insert(key_fn(&record)) {
            kept.push(record);
        } else {
            duplicates.push(record);
        }
    }

    Partition { kept, duplicates }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_record_lands_in_exactly_one_side() {
        let records = vec![1, 2, 2, 3, 1, 4];
        let p = partition(records.clone(), |n| *n % 3);
        assert_eq!(p.kept.len() + p.duplicates.len(), records.len());
    }

    #[test]
    fn kept_keys_are_unique() {
        let p = partition(vec!["a", "b", "a", "c", "b"], |s| s.to_string());
        let keys: HashSet<_> = p.kept.iter().collect();
        assert_eq!(keys.len(), p.kept.len());
    }

    #[test]
    fn partition_is_idempotent_on_kept() {
        let p = partition(vec![10, 20, 10, 30, 20, 20], |n| *n);
        let again = partition(p.kept, |n| *n);
        assert!(again.duplicates.is_empty());
    }

    #[test]
    fn first_occurrence_wins() {
        let p = partition(vec![("k", 1), ("k", 2)], |(k, _)| *k);
        assert_eq!(p.kept, vec![("k", 1)]);
        assert_eq!(p.duplicates, vec![("k", 2)]);
    }

    #[test]
    fn empty_input() {
        let p = partition(Vec::<i32>::new(), |n| *n);
        assert!(p.kept.is_empty());
        assert!(p.duplicates.is_empty());
    }
}
