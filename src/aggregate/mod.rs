//! Grouped revenue aggregation.
//!
//! Rows are partitioned by a categorical key (exact string equality, not
//! case-folded) and `total_revenue` is summed within each group. Missing
//! revenue values are skipped: they contribute nothing to the sum, and a
//! group whose rows are all missing still appears with a sum of `0.0`.
//!
//! Output ordering is summed revenue descending; ties are broken by the
//! order of first appearance of the key in the input, so output is
//! deterministic.

use std::collections::HashMap;

use crate::domain::{EnrichedRecord, GroupKey, GroupTotal};

/// Group rows by `key` and sum `total_revenue` per group, ranked descending.
///
/// An empty input yields an empty vector, not an error.
pub fn revenue_by(rows: &[EnrichedRecord], key: GroupKey) -> Vec<GroupTotal> {
    struct Acc {
        first_seen: usize,
        sum: f64,
        rows: usize,
    }

    let mut groups: HashMap<&str, Acc> = HashMap::new();

    for (idx, row) in rows.iter().enumerate() {
        let label = match key {
            GroupKey::Region => row.record.region.as_str(),
            GroupKey::Product => row.record.product.as_str(),
        };
        let acc = groups.entry(label).or_insert_with(|| Acc {
            first_seen: idx,
            sum: 0.0,
            rows: 0,
        });
        acc.rows += 1;
        if let Some(v) = row.total_revenue {
            acc.sum += v;
        }
    }

    let mut out: Vec<(usize, GroupTotal)> = groups
        .into_iter()
        .map(|(label, acc)| {
            (
                acc.first_seen,
                GroupTotal {
                    key: label.to_string(),
                    total_revenue: acc.sum,
                    rows: acc.rows,
                },
            )
        })
        .collect();

    out.sort_by(|(fa, a), (fb, b)| {
        b.total_revenue
            .partial_cmp(&a.total_revenue)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(fa.cmp(fb))
    });

    out.into_iter().map(|(_, g)| g).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SalesRecord;
    use chrono::NaiveDate;

    fn row(region: &str, product: &str, revenue: Option<f64>) -> EnrichedRecord {
        EnrichedRecord {
            record: SalesRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                region: region.to_string(),
                product: product.to_string(),
                units_sold: None,
                unit_price: None,
            },
            total_revenue: revenue,
        }
    }

    #[test]
    fn ranks_regions_by_summed_revenue() {
        // East's two rows sum to 40.0; West's single row is 100.0 and ranks first.
        let rows = vec![
            row("East", "A", Some(20.0)),
            row("East", "B", Some(20.0)),
            row("West", "A", Some(100.0)),
        ];
        let agg = revenue_by(&rows, GroupKey::Region);
        assert_eq!(agg.len(), 2);
        assert_eq!(agg[0].key, "West");
        assert!((agg[0].total_revenue - 100.0).abs() < 1e-12);
        assert_eq!(agg[1].key, "East");
        assert!((agg[1].total_revenue - 40.0).abs() < 1e-12);
        assert_eq!(agg[1].rows, 2);
    }

    #[test]
    fn key_set_matches_distinct_values_and_total_is_conserved() {
        let rows = vec![
            row("North", "A", Some(1.5)),
            row("South", "B", Some(2.5)),
            row("North", "B", Some(3.0)),
            row("East", "A", None),
        ];
        let agg = revenue_by(&rows, GroupKey::Region);

        let mut keys: Vec<&str> = agg.iter().map(|g| g.key.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["East", "North", "South"]);

        let total: f64 = agg.iter().map(|g| g.total_revenue).sum();
        assert!((total - 7.0).abs() < 1e-12);
    }

    #[test]
    fn output_is_sorted_non_increasing() {
        let rows = vec![
            row("A", "x", Some(1.0)),
            row("B", "x", Some(5.0)),
            row("C", "x", Some(3.0)),
            row("B", "x", Some(2.0)),
        ];
        let agg = revenue_by(&rows, GroupKey::Region);
        for pair in agg.windows(2) {
            assert!(pair[0].total_revenue >= pair[1].total_revenue);
        }
    }

    #[test]
    fn ties_break_by_first_appearance() {
        let rows = vec![
            row("Gamma", "x", Some(10.0)),
            row("Alpha", "x", Some(10.0)),
            row("Beta", "x", Some(10.0)),
        ];
        let agg = revenue_by(&rows, GroupKey::Region);
        let keys: Vec<&str> = agg.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn grouping_is_case_sensitive() {
        let rows = vec![row("east", "x", Some(1.0)), row("East", "x", Some(2.0))];
        let agg = revenue_by(&rows, GroupKey::Region);
        assert_eq!(agg.len(), 2);
    }

    #[test]
    fn missing_revenue_is_skipped_not_zeroed_into_the_sum() {
        let rows = vec![
            row("East", "A", Some(10.0)),
            row("East", "A", None),
            row("East", "A", Some(5.0)),
        ];
        let agg = revenue_by(&rows, GroupKey::Region);
        assert!((agg[0].total_revenue - 15.0).abs() < 1e-12);
        assert_eq!(agg[0].rows, 3);
    }

    #[test]
    fn all_missing_group_sums_to_zero_and_is_kept() {
        let rows = vec![
            row("East", "A", None),
            row("East", "A", None),
            row("West", "A", Some(4.0)),
        ];
        let agg = revenue_by(&rows, GroupKey::Region);
        assert_eq!(agg.len(), 2);
        assert_eq!(agg[0].key, "West");
        assert_eq!(agg[1].key, "East");
        assert_eq!(agg[1].total_revenue, 0.0);
    }

    #[test]
    fn empty_input_yields_empty_aggregate() {
        let agg = revenue_by(&[], GroupKey::Product);
        assert!(agg.is_empty());
    }

    #[test]
    fn groups_by_product_independently_of_region() {
        let rows = vec![
            row("East", "A", Some(20.0)),
            row("West", "A", Some(100.0)),
            row("East", "B", Some(20.0)),
        ];
        let agg = revenue_by(&rows, GroupKey::Product);
        assert_eq!(agg[0].key, "A");
        assert!((agg[0].total_revenue - 120.0).abs() < 1e-12);
        assert_eq!(agg[1].key, "B");
    }
}
