//! Distribution aggregators over the filtered record set.
//!
//! Each function is stateless: `(records) -> Vec<AggregateBucket>`. For all
//! of them the bucket counts sum to the number of records consumed.

use std::collections::HashMap;

use crate::api::AggregateBucket;
use crate::models::{CanonicalStatus, MaintenanceRecord, VerificationOutcome, VerificationRecord};

/// Number of problem-category buckets kept by the top-N aggregator.
pub const TOP_CATEGORIES: usize = 10;

/// Count records per label in first-seen order.
fn count_by<T, F>(items: &[T], key: F) -> Vec<AggregateBucket>
where
    F: Fn(&T) -> String,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<AggregateBucket> = Vec::new();

    for item in items {
        let label = key(item);
        match index.get(&label) {
            Some(&i) => buckets[i].count += 1,
            None => {
                index.insert(label.clone(), buckets.len());
                buckets.push(AggregateBucket::new(label, 1));
            }
        }
    }

    buckets
}

/// Status distribution after synonym collapsing.
///
/// Buckets appear in the fixed group order Pending, Verified, Completed,
/// Rejected, Other; groups with no records are omitted.
pub fn status_distribution(records: &[MaintenanceRecord]) -> Vec<AggregateBucket> {
    let mut counts: HashMap<CanonicalStatus, usize> = HashMap::new();
    for record in records {
        *counts.entry(CanonicalStatus::from_raw(&record.status)).or_insert(0) += 1;
    }

    CanonicalStatus::all()
        .iter()
        .filter_map(|group| {
            counts
                .get(group)
                .map(|&count| AggregateBucket::new(group.label(), count))
        })
        .collect()
}

/// Distribution by raw maintenance type, first-seen order.
pub fn type_distribution(records: &[MaintenanceRecord]) -> Vec<AggregateBucket> {
    count_by(records, |r| r.maintenance_type.clone())
}

/// Distribution by area, first-seen order.
pub fn area_distribution(records: &[MaintenanceRecord]) -> Vec<AggregateBucket> {
    count_by(records, |r| r.area.clone())
}

/// Problem categories sorted descending by count and truncated to `top_n`
/// (the dashboard uses [`TOP_CATEGORIES`]). The sort is stable, so ties keep
/// first-seen order.
pub fn top_problem_categories(
    records: &[MaintenanceRecord],
    top_n: usize,
) -> Vec<AggregateBucket> {
    let mut buckets = count_by(records, |r| r.problem_category.clone());
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets.truncate(top_n);
    buckets
}

/// Exactly two buckets, Critical and Regular. Their counts always sum to
/// the record count, including when one side is empty.
pub fn critical_split(records: &[MaintenanceRecord]) -> Vec<AggregateBucket> {
    let critical = records.iter().filter(|r| r.is_critical).count();
    vec![
        AggregateBucket::new("Critical", critical),
        AggregateBucket::new("Regular", records.len() - critical),
    ]
}

/// Verification outcome distribution over the verification collection.
/// Unrecognized results fold into Other.
pub fn verification_outcomes(records: &[VerificationRecord]) -> Vec<AggregateBucket> {
    let mut counts: HashMap<VerificationOutcome, usize> = HashMap::new();
    for record in records {
        *counts.entry(VerificationOutcome::from_raw(&record.result)).or_insert(0) += 1;
    }

    VerificationOutcome::all()
        .iter()
        .filter_map(|group| {
            counts
                .get(group)
                .map(|&count| AggregateBucket::new(group.label(), count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::UNSPECIFIED;
    use proptest::prelude::*;

    fn record(status: &str, mtype: &str, area: &str, category: &str, critical: bool) -> MaintenanceRecord {
        MaintenanceRecord {
            id: "M-1".to_string(),
            equipment_id: "EQ-1".to_string(),
            equipment_type: "Pump".to_string(),
            technician: UNSPECIFIED.to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 3, 10),
            registration_date: None,
            area: area.to_string(),
            location: UNSPECIFIED.to_string(),
            maintenance_type: mtype.to_string(),
            is_critical: critical,
            problem_category: category.to_string(),
            problem_description: UNSPECIFIED.to_string(),
            additional_notes: None,
            status: status.to_string(),
        }
    }

    fn verification(result: &str) -> VerificationRecord {
        VerificationRecord {
            maintenance_id: "M-1".to_string(),
            verifier: UNSPECIFIED.to_string(),
            date: None,
            result: result.to_string(),
            comments: String::new(),
        }
    }

    #[test]
    fn test_status_collapse_example() {
        let records: Vec<_> = ["Pendente", "Aprovado", "Concluído", "Reprovado", "Ajustes"]
            .iter()
            .map(|s| record(s, "Preventiva", "A", "Cat", false))
            .collect();

        let buckets = status_distribution(&records);
        let get = |label: &str| buckets.iter().find(|b| b.label == label).map(|b| b.count);

        assert_eq!(get("Pending"), Some(1));
        assert_eq!(get("Verified"), Some(2));
        assert_eq!(get("Completed"), Some(1));
        assert_eq!(get("Rejected"), Some(1));
        assert_eq!(get("Other"), None); // zero-count group omitted
    }

    #[test]
    fn test_status_counts_reconcile() {
        let records: Vec<_> = ["Pendente", "???", "Aprovado", "", "Concluído"]
            .iter()
            .map(|s| record(s, "Preventiva", "A", "Cat", false))
            .collect();

        let buckets = status_distribution(&records);
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_type_distribution_first_seen_order() {
        let records = vec![
            record("Pendente", "Corretiva", "A", "Cat", false),
            record("Pendente", "Preventiva", "A", "Cat", false),
            record("Pendente", "Corretiva", "A", "Cat", false),
        ];

        let buckets = type_distribution(&records);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label, "Corretiva");
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[1].label, "Preventiva");
    }

    #[test]
    fn test_unspecified_values_bucket_together() {
        let records = vec![
            record("Pendente", UNSPECIFIED, "A", "Cat", false),
            record("Pendente", UNSPECIFIED, "A", "Cat", false),
        ];
        let buckets = type_distribution(&records);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].label, UNSPECIFIED);
        assert_eq!(buckets[0].count, 2);
    }

    #[test]
    fn test_top_categories_sorted_and_truncated() {
        let mut records = Vec::new();
        for i in 0..12 {
            let label = format!("cat-{}", i);
            for _ in 0..=i {
                records.push(record("Pendente", "Preventiva", "A", &label, false));
            }
        }

        let buckets = top_problem_categories(&records, TOP_CATEGORIES);
        assert_eq!(buckets.len(), TOP_CATEGORIES);
        assert_eq!(buckets[0].label, "cat-11");
        assert!(buckets.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_top_categories_ties_keep_first_seen_order() {
        let records = vec![
            record("Pendente", "Preventiva", "A", "beta", false),
            record("Pendente", "Preventiva", "A", "alpha", false),
        ];
        let buckets = top_problem_categories(&records, TOP_CATEGORIES);
        assert_eq!(buckets[0].label, "beta");
        assert_eq!(buckets[1].label, "alpha");
    }

    #[test]
    fn test_critical_split_always_two_buckets() {
        let buckets = critical_split(&[]);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].count + buckets[1].count, 0);

        let records = vec![
            record("Pendente", "Preventiva", "A", "Cat", true),
            record("Pendente", "Preventiva", "A", "Cat", false),
            record("Pendente", "Preventiva", "A", "Cat", true),
        ];
        let buckets = critical_split(&records);
        assert_eq!(buckets[0].label, "Critical");
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[1].label, "Regular");
        assert_eq!(buckets[1].count, 1);
    }

    #[test]
    fn test_verification_outcomes_fold_unknown_into_other() {
        let records = vec![
            verification("Aprovado"),
            verification("Ajustes"),
            verification("Reprovado"),
            verification("inconclusivo"),
        ];

        let buckets = verification_outcomes(&records);
        let get = |label: &str| buckets.iter().find(|b| b.label == label).map(|b| b.count);
        assert_eq!(get("Approved"), Some(1));
        assert_eq!(get("Adjustments"), Some(1));
        assert_eq!(get("Rejected"), Some(1));
        assert_eq!(get("Other"), Some(1));

        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, records.len());
    }

    proptest! {
        #[test]
        fn prop_distribution_counts_always_reconcile(
            statuses in proptest::collection::vec("[A-Za-zÀ-ú ]{0,12}", 0..40),
            criticals in proptest::collection::vec(any::<bool>(), 0..40),
        ) {
            let records: Vec<_> = statuses
                .iter()
                .zip(criticals.iter().chain(std::iter::repeat(&false)))
                .map(|(s, &c)| record(s, "Preventiva", "A", "Cat", c))
                .collect();

            let sum = |buckets: Vec<AggregateBucket>| -> usize {
                buckets.iter().map(|b| b.count).sum()
            };

            prop_assert_eq!(sum(status_distribution(&records)), records.len());
            prop_assert_eq!(sum(type_distribution(&records)), records.len());
            prop_assert_eq!(sum(area_distribution(&records)), records.len());
            prop_assert_eq!(sum(critical_split(&records)), records.len());
        }
    }
}
