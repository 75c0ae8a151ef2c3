//! Two-file comparison over aggregated machinery keys.

use std::collections::BTreeSet;

use tracing::debug;

use crate::shipcheck::tools::model::{Comparison, ComparisonRow, FileAggregate, KeyStats, Totals};

/// Legacy export total marker; never a real machinery item.
const TOTAL_KEY: &str = "TOTAL";

/// Computes one [`ComparisonRow`] per canonical key in the union of both
/// aggregates, plus count totals. An absent key counts as an empty title set
/// and a zero row count on that side.
pub fn diff(agg_a: &FileAggregate, agg_b: &FileAggregate) -> Comparison {
    let keys: BTreeSet<&String> = agg_a
        .entries
        .keys()
        .chain(agg_b.entries.keys())
        .filter(|key| key.as_str() != TOTAL_KEY)
        .collect();

    let absent = KeyStats::default();
    let mut rows = Vec::with_capacity(keys.len());
    let mut total = Totals::default();

    for key in keys {
        let a = agg_a.entries.get(key).unwrap_or(&absent);
        let b = agg_b.entries.get(key).unwrap_or(&absent);

        let only_in_a: BTreeSet<String> = a.titles.difference(&b.titles).cloned().collect();
        let only_in_b: BTreeSet<String> = b.titles.difference(&a.titles).cloned().collect();
        let common: BTreeSet<String> = a.titles.intersection(&b.titles).cloned().collect();
        let has_differences = !only_in_a.is_empty() || !only_in_b.is_empty();
        let count_diff = a.count as i64 - b.count as i64;

        total.count_a += a.count;
        total.count_b += b.count;
        total.count_diff += count_diff;

        rows.push(ComparisonRow {
            machinery: key.clone(),
            common,
            only_in_a,
            only_in_b,
            has_differences,
            count_a: a.count,
            count_b: b.count,
            count_diff,
        });
    }

    debug!(rows = rows.len(), "comparison rows computed");

    Comparison {
        label_a: agg_a.source.clone(),
        label_b: agg_b.source.clone(),
        rows,
        total,
    }
}
